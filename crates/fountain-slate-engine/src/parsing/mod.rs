//! # Fountain Parsing
//!
//! Two-phase conversion from Fountain text to typed screenplay elements.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is resolved to a `LineClass`
//!    from the line itself plus two pieces of threaded context (the raw lookahead
//!    line and the open-dialogue flag)
//!
//! 2. **Element Construction** (`builder`): an `ElementBuilder` runs a two-state
//!    scan (`Scanning` / `InDialogue`) and emits `FountainElement`s, flushing
//!    dialogue blocks on blank lines and end of input, and breaking them on
//!    scene headings and transitions
//!
//! ## Modules
//!
//! - **`element`**: Core types (`FountainElement`, `ElementKind`)
//! - **`classify`**: `FountainLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `ElementBuilder` state machine for element construction
//!
//! ## Key Invariants
//!
//! - Parsing is total: any input, including empty and non-ASCII text, yields an
//!   element sequence, with `Action` as the fallback kind
//! - Element order is the screenplay's reading order
//! - A blank line or end of input flushes a dialogue block only when its buffer
//!   is non-empty; a scene heading or transition always closes it, so an empty
//!   `Dialogue` element is possible when a cue directly precedes one

pub mod builder;
pub mod classify;
pub mod element;

pub use builder::ElementBuilder;
pub use classify::{FountainLineClassifier, LineClass};
pub use element::{ElementKind, FountainElement};

/// Parses Fountain text into the ordered screenplay element sequence.
pub fn parse_fountain(text: &str) -> Vec<FountainElement> {
    let classifier = FountainLineClassifier;
    let mut builder = ElementBuilder::new();

    let lines: Vec<&str> = text.split('\n').collect();
    for (i, &line) in lines.iter().enumerate() {
        let next_line = lines.get(i + 1).copied();
        let class = classifier.classify(line, next_line, builder.in_dialogue());
        builder.push(class);
    }

    builder.finish()
}
