pub mod document;
pub mod io;
pub mod models;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export commonly used types
pub use document::{Block, Document, TextAlign};
pub use models::{FileTree, FileTreeItem, FileTreeNode, ScriptFile};
pub use parsing::{ElementKind, FountainElement, parse_fountain};
