use std::sync::OnceLock;

use regex::Regex;

/// Classification of a single screenplay line.
///
/// This is phase 1 of Fountain parsing: each line is resolved against the two
/// pieces of context it is handed (the raw lookahead line and the open-dialogue
/// flag) but carries no state of its own. Text is trimmed before any rule runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// Whitespace-only line. Flush signal for an open dialogue block.
    Blank,
    /// Line starting with `INT.`/`EXT.` (period or whitespace separator),
    /// upper-cased.
    SceneHeading { text: String },
    /// One of the eight named transitions, optionally colon-terminated,
    /// upper-cased.
    Transition { text: String },
    /// Upper-case speaker cue. The following lines belong to a dialogue block.
    Character { text: String },
    /// Non-blank line inside an open dialogue block.
    DialogueLine { text: String },
    /// `^…^` wrapped text with the markers and surrounding whitespace stripped.
    Centered { text: String },
    /// Anything else.
    Action { text: String },
}

fn scene_heading_regex() -> &'static Regex {
    static SCENE_HEADING: OnceLock<Regex> = OnceLock::new();
    SCENE_HEADING.get_or_init(|| {
        Regex::new(r"(?i)^(INT\.|EXT\.|INT\s|EXT\s)").expect("Invalid scene heading regex")
    })
}

fn transition_regex() -> &'static Regex {
    static TRANSITION: OnceLock<Regex> = OnceLock::new();
    TRANSITION.get_or_init(|| {
        Regex::new(r"(?i)^(FADE IN|FADE OUT|CUT TO|DISSOLVE TO|SMASH CUT|MATCH CUT|WIPE TO|IRIS):?$")
            .expect("Invalid transition regex")
    })
}

fn all_caps_run_regex() -> &'static Regex {
    static ALL_CAPS_RUN: OnceLock<Regex> = OnceLock::new();
    ALL_CAPS_RUN.get_or_init(|| Regex::new(r"^[A-Z\s]+$").expect("Invalid all-caps regex"))
}

/// Classifies individual lines for the element parsing phase.
pub struct FountainLineClassifier;

impl FountainLineClassifier {
    /// Classifies `line` into a [`LineClass`] given the raw lookahead line (if
    /// any) and whether a dialogue block is currently open.
    ///
    /// Rules run in priority order; the first match wins. Classification is
    /// total: every line, including empty and non-ASCII text, maps to exactly
    /// one class.
    pub fn classify(&self, line: &str, next_line: Option<&str>, in_dialogue: bool) -> LineClass {
        let line = line.trim();

        if line.is_empty() {
            return LineClass::Blank;
        }

        if scene_heading_regex().is_match(line) {
            return LineClass::SceneHeading {
                text: line.to_uppercase(),
            };
        }

        if transition_regex().is_match(line) {
            return LineClass::Transition {
                text: line.to_uppercase(),
            };
        }

        if !in_dialogue && is_character_cue(line, next_line) {
            return LineClass::Character {
                text: line.to_string(),
            };
        }

        if in_dialogue {
            return LineClass::DialogueLine {
                text: line.to_string(),
            };
        }

        if let Some(inner) = line.strip_prefix('^').and_then(|rest| rest.strip_suffix('^')) {
            return LineClass::Centered {
                text: inner.trim().to_string(),
            };
        }

        LineClass::Action {
            text: line.to_string(),
        }
    }
}

/// Character cue heuristic: an upper-case line that is not a long all-caps
/// action run (20+ chars of nothing but `A-Z` and spaces), followed by a line
/// with something speakable on it.
///
/// The lookahead is trimmed before the emptiness check, but the `INT.`/`EXT.`
/// exclusion on it is case-sensitive and period-only, narrower than the scene
/// heading rule itself. A lower-cased heading on the next line therefore reads
/// as speakable here and is swallowed into dialogue until it breaks the block
/// on its own turn.
fn is_character_cue(line: &str, next_line: Option<&str>) -> bool {
    let is_uppercase = line == line.to_uppercase() && !line.is_empty();
    let is_not_action = !all_caps_run_regex().is_match(line) || line.chars().count() < 20;

    let next_is_speakable = match next_line.map(str::trim) {
        Some(next) => !next.is_empty() && !next.starts_with("INT.") && !next.starts_with("EXT."),
        None => false,
    };

    is_uppercase && is_not_action && next_is_speakable
}
