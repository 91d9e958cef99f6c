use serde::{Deserialize, Serialize};

/// The kind of a screenplay element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementKind {
    /// Scene heading line (`INT.`/`EXT.` prefix), stored upper-cased.
    SceneHeading,
    /// One of the eight editorial transitions (`CUT TO:` etc.), stored upper-cased.
    Transition,
    /// Upper-case speaker cue that opens a dialogue block.
    Character,
    /// Spoken lines buffered under a character cue, joined with `\n`.
    Dialogue,
    /// Default descriptive text.
    Action,
    /// Text wrapped in `^` markers, stored with the markers stripped.
    Centered,
}

/// A classified screenplay element with its normalized text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FountainElement {
    pub kind: ElementKind,
    pub text: String,
}

impl FountainElement {
    pub fn new(kind: ElementKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}
