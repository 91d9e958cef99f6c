//! # Structured Document Model
//!
//! The attribute projection of a screenplay consumed by the rich-text editing
//! surface. A [`Block`] carries alignment, boldness, and heading level but no
//! element kind tag; the serializer re-derives the kind from those attributes
//! alone (`serialize`), which is lossy by contract. See the builder and
//! serializer modules for both directions of the mapping.

pub mod builder;
pub mod serialize;

#[cfg(test)]
mod roundtrip_tests;

use serde::{Deserialize, Serialize};

use crate::parsing::{FountainElement, parse_fountain};

/// Heading level assigned to scene headings in the structured model.
pub const SCENE_HEADING_LEVEL: u8 = 2;

/// Horizontal alignment attribute on a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// One block of the structured document.
///
/// Blocks are the editing surface's native unit; attributes absent from the
/// surface's JSON are absent here too, so `None`/`false` round-trip as omitted
/// fields rather than explicit nulls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Heading level; scene headings carry [`SCENE_HEADING_LEVEL`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_level: Option<u8>,
    /// Alignment; absent means the surface default (left).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    /// Bold emphasis across the whole block.
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    /// Block text; dialogue blocks may contain embedded newlines.
    pub text: String,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// An ordered screenplay document as held by the editing surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    /// Builds the structured document for an element sequence.
    pub fn from_elements(elements: &[FountainElement]) -> Self {
        Self {
            blocks: builder::build_blocks(elements),
        }
    }

    /// Parses Fountain text straight into the structured document.
    pub fn from_fountain(text: &str) -> Self {
        Self::from_elements(&parse_fountain(text))
    }

    /// Serializes the document back to canonical Fountain text.
    pub fn to_fountain(&self) -> String {
        serialize::to_fountain(&self.blocks)
    }
}
