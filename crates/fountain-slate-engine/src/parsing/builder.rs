use super::{
    classify::LineClass,
    element::{ElementKind, FountainElement},
};

/// Scan state for the element builder.
///
/// Dialogue accumulation is the only multi-line construct in the subset, so
/// the machine has exactly two states.
#[derive(Debug, Clone)]
enum ScanState {
    /// Between elements; the next line stands on its own.
    Scanning,
    /// A character cue opened a dialogue block; non-blank lines accumulate in
    /// `buffer` until a flush or break transition fires.
    InDialogue { buffer: Vec<String> },
}

/// Builds the ordered element sequence from classified lines.
///
/// This is the only stateful piece of the parser. Its state lives for a single
/// parse call and is consumed by [`finish`](Self::finish).
pub struct ElementBuilder {
    state: ScanState,
    out: Vec<FountainElement>,
}

impl ElementBuilder {
    pub fn new() -> Self {
        Self {
            state: ScanState::Scanning,
            out: vec![],
        }
    }

    /// Whether a dialogue block is currently open. Fed back to the classifier
    /// for the next line.
    pub fn in_dialogue(&self) -> bool {
        matches!(self.state, ScanState::InDialogue { .. })
    }

    pub fn push(&mut self, class: LineClass) {
        match class {
            LineClass::Blank => self.flush_dialogue(),
            LineClass::SceneHeading { text } => {
                self.break_dialogue();
                self.out
                    .push(FountainElement::new(ElementKind::SceneHeading, text));
            }
            LineClass::Transition { text } => {
                self.break_dialogue();
                self.out
                    .push(FountainElement::new(ElementKind::Transition, text));
            }
            LineClass::Character { text } => {
                self.out
                    .push(FountainElement::new(ElementKind::Character, text));
                self.state = ScanState::InDialogue { buffer: vec![] };
            }
            LineClass::DialogueLine { text } => {
                if let ScanState::InDialogue { buffer } = &mut self.state {
                    buffer.push(text);
                }
            }
            LineClass::Centered { text } => {
                self.out
                    .push(FountainElement::new(ElementKind::Centered, text));
            }
            LineClass::Action { text } => {
                self.out.push(FountainElement::new(ElementKind::Action, text));
            }
        }
    }

    pub fn finish(mut self) -> Vec<FountainElement> {
        // EOF flush
        self.flush_dialogue();
        self.out
    }

    /// Flush transition (blank line, end of input): emits the open dialogue
    /// block only when it holds at least one line. An empty buffer stays open.
    fn flush_dialogue(&mut self) {
        let prev = std::mem::replace(&mut self.state, ScanState::Scanning);
        match prev {
            ScanState::InDialogue { buffer } if !buffer.is_empty() => {
                self.out
                    .push(FountainElement::new(ElementKind::Dialogue, buffer.join("\n")));
            }
            other => self.state = other,
        }
    }

    /// Break transition (scene heading, transition line): a structural element
    /// always closes the dialogue block, emitting whatever was buffered, even
    /// an empty string.
    fn break_dialogue(&mut self) {
        let prev = std::mem::replace(&mut self.state, ScanState::Scanning);
        if let ScanState::InDialogue { buffer } = prev {
            self.out
                .push(FountainElement::new(ElementKind::Dialogue, buffer.join("\n")));
        }
    }
}

impl Default for ElementBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn character(text: &str) -> LineClass {
        LineClass::Character {
            text: text.to_string(),
        }
    }

    fn dialogue_line(text: &str) -> LineClass {
        LineClass::DialogueLine {
            text: text.to_string(),
        }
    }

    #[test]
    fn character_cue_opens_dialogue_state() {
        let mut builder = ElementBuilder::new();
        assert!(!builder.in_dialogue());

        builder.push(character("SARAH"));
        assert!(builder.in_dialogue());
    }

    #[test]
    fn blank_line_flushes_buffered_dialogue() {
        let mut builder = ElementBuilder::new();
        builder.push(character("SARAH"));
        builder.push(dialogue_line("Hello."));
        builder.push(dialogue_line("Anyone there?"));
        builder.push(LineClass::Blank);

        assert!(!builder.in_dialogue());
        assert_eq!(
            builder.finish(),
            vec![
                FountainElement::new(ElementKind::Character, "SARAH"),
                FountainElement::new(ElementKind::Dialogue, "Hello.\nAnyone there?"),
            ]
        );
    }

    #[test]
    fn blank_line_with_empty_buffer_keeps_dialogue_open() {
        let mut builder = ElementBuilder::new();
        builder.push(character("SARAH"));
        builder.push(LineClass::Blank);

        assert!(builder.in_dialogue());
    }

    #[test]
    fn end_of_input_flushes_open_dialogue() {
        let mut builder = ElementBuilder::new();
        builder.push(character("SARAH"));
        builder.push(dialogue_line("Last word."));

        assert_eq!(
            builder.finish(),
            vec![
                FountainElement::new(ElementKind::Character, "SARAH"),
                FountainElement::new(ElementKind::Dialogue, "Last word."),
            ]
        );
    }

    #[test]
    fn end_of_input_with_empty_buffer_emits_no_dialogue() {
        let mut builder = ElementBuilder::new();
        builder.push(character("SARAH"));

        assert_eq!(
            builder.finish(),
            vec![FountainElement::new(ElementKind::Character, "SARAH")]
        );
    }

    #[test]
    fn scene_heading_breaks_dialogue_even_with_empty_buffer() {
        let mut builder = ElementBuilder::new();
        builder.push(character("SARAH"));
        builder.push(LineClass::SceneHeading {
            text: "INT. HALLWAY - NIGHT".to_string(),
        });

        assert_eq!(
            builder.finish(),
            vec![
                FountainElement::new(ElementKind::Character, "SARAH"),
                FountainElement::new(ElementKind::Dialogue, ""),
                FountainElement::new(ElementKind::SceneHeading, "INT. HALLWAY - NIGHT"),
            ]
        );
    }

    #[test]
    fn transition_breaks_dialogue_with_buffered_lines() {
        let mut builder = ElementBuilder::new();
        builder.push(character("SARAH"));
        builder.push(dialogue_line("Wait."));
        builder.push(LineClass::Transition {
            text: "CUT TO:".to_string(),
        });

        assert_eq!(
            builder.finish(),
            vec![
                FountainElement::new(ElementKind::Character, "SARAH"),
                FountainElement::new(ElementKind::Dialogue, "Wait."),
                FountainElement::new(ElementKind::Transition, "CUT TO:"),
            ]
        );
    }

    #[test]
    fn standalone_elements_pass_through_in_order() {
        let mut builder = ElementBuilder::new();
        builder.push(LineClass::Action {
            text: "John walks in.".to_string(),
        });
        builder.push(LineClass::Centered {
            text: "THE END".to_string(),
        });

        assert_eq!(
            builder.finish(),
            vec![
                FountainElement::new(ElementKind::Action, "John walks in."),
                FountainElement::new(ElementKind::Centered, "THE END"),
            ]
        );
    }
}
