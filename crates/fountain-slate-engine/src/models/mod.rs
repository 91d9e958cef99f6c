pub mod file_tree;
pub mod script_file;

pub use file_tree::{FileTree, FileTreeItem, FileTreeNode};
pub use script_file::ScriptFile;
