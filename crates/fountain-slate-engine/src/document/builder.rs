use super::{Block, SCENE_HEADING_LEVEL, TextAlign};
use crate::parsing::{ElementKind, FountainElement};

/// Projects the element sequence into the structured block sequence, one block
/// per element, in order.
pub fn build_blocks(elements: &[FountainElement]) -> Vec<Block> {
    elements.iter().map(block_for_element).collect()
}

/// The total element-to-attribute mapping.
///
/// Dialogue and centered text project to the same shape; the kind distinction
/// does not survive into the block model.
fn block_for_element(element: &FountainElement) -> Block {
    let text = element.text.clone();
    match element.kind {
        ElementKind::SceneHeading => Block {
            heading_level: Some(SCENE_HEADING_LEVEL),
            text_align: None,
            bold: true,
            text,
        },
        ElementKind::Character => Block {
            heading_level: None,
            text_align: Some(TextAlign::Center),
            bold: true,
            text,
        },
        ElementKind::Dialogue | ElementKind::Centered => Block {
            heading_level: None,
            text_align: Some(TextAlign::Center),
            bold: false,
            text,
        },
        ElementKind::Transition => Block {
            heading_level: None,
            text_align: Some(TextAlign::Right),
            bold: true,
            text,
        },
        ElementKind::Action => Block {
            heading_level: None,
            text_align: None,
            bold: false,
            text,
        },
    }
}
