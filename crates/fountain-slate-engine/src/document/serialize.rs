use super::{Block, SCENE_HEADING_LEVEL, TextAlign};
use crate::parsing::ElementKind;

/// Infers the element kind a block serializes as, from its attributes alone.
///
/// Rules run in order; the first match wins. The inference is lossy: centered
/// text projects to the same shape as dialogue and re-emerges as
/// [`ElementKind::Dialogue`] (no `^` markers restored), and a short all-caps
/// block hand-styled center+bold reads as a character cue.
pub fn infer_element_kind(block: &Block) -> ElementKind {
    if block.heading_level == Some(SCENE_HEADING_LEVEL) && block.bold {
        return ElementKind::SceneHeading;
    }
    if block.text_align == Some(TextAlign::Right) && block.bold {
        return ElementKind::Transition;
    }
    if block.text_align == Some(TextAlign::Center) {
        if block.bold && block.text == block.text.to_uppercase() {
            return ElementKind::Character;
        }
        if !block.bold {
            return ElementKind::Dialogue;
        }
    }
    ElementKind::Action
}

/// Serializes blocks to canonical Fountain text.
///
/// One line per block, joined with single newlines; dialogue blocks span
/// several physical lines through their embedded newlines. An empty-text block
/// emits an empty line. Scene headings and transitions re-uppercase on the way
/// out; every other kind emits its text unchanged.
pub fn to_fountain(blocks: &[Block]) -> String {
    let lines: Vec<String> = blocks.iter().map(fountain_line).collect();
    lines.join("\n")
}

fn fountain_line(block: &Block) -> String {
    if block.text.is_empty() {
        return String::new();
    }

    match infer_element_kind(block) {
        ElementKind::SceneHeading | ElementKind::Transition => block.text.to_uppercase(),
        _ => block.text.clone(),
    }
}
