use std::collections::BTreeMap;
use std::path::PathBuf;

use relative_path::{RelativePath, RelativePathBuf};

use super::ScriptFile;

/// One node of the scripts folder tree. Folders carry children; files carry
/// the [`ScriptFile`] handle the UI opens.
#[derive(Debug, Clone, PartialEq)]
pub struct FileTreeNode {
    pub name: String,
    pub relative_path: RelativePathBuf,
    pub is_folder: bool,
    pub is_expanded: bool,
    pub script_file: Option<ScriptFile>,
    pub children: BTreeMap<String, FileTreeNode>,
}

impl FileTreeNode {
    pub fn new_folder(name: String, relative_path: RelativePathBuf) -> Self {
        Self {
            name,
            relative_path,
            is_folder: true,
            is_expanded: false,
            script_file: None,
            children: BTreeMap::new(),
        }
    }

    pub fn new_file(name: String, relative_path: RelativePathBuf) -> Self {
        let script_file = Some(ScriptFile::new(relative_path.clone()));
        Self {
            name,
            relative_path,
            is_folder: false,
            is_expanded: false,
            script_file,
            children: BTreeMap::new(),
        }
    }

    fn insert_file(&mut self, remaining_path: &RelativePath) {
        let components: Vec<&str> = remaining_path.components().map(|c| c.as_str()).collect();
        if components.is_empty() {
            return;
        }

        let first_component = components[0].to_string();
        let child_path = self.relative_path.join(&first_component);

        if components.len() == 1 {
            // This is a file in the current directory
            self.children.insert(
                first_component.clone(),
                FileTreeNode::new_file(first_component, child_path),
            );
        } else {
            // This is a folder, recurse
            let mut rest = RelativePathBuf::new();
            for component in &components[1..] {
                rest.push(component);
            }
            self.children
                .entry(first_component.clone())
                .or_insert_with(|| FileTreeNode::new_folder(first_component, child_path))
                .insert_file(&rest);
        }
    }

    pub fn toggle_expanded(&mut self, path: &RelativePath) -> bool {
        if self.relative_path == *path {
            self.is_expanded = !self.is_expanded;
            return true;
        }

        for child in self.children.values_mut() {
            if child.toggle_expanded(path) {
                return true;
            }
        }
        false
    }

    pub fn set_expanded(&mut self, path: &RelativePath, expanded: bool) -> bool {
        if self.relative_path == *path {
            self.is_expanded = expanded;
            return true;
        }

        for child in self.children.values_mut() {
            if child.set_expanded(path, expanded) {
                return true;
            }
        }
        false
    }

    pub fn get_flattened_items(&self, depth: usize) -> Vec<FileTreeItem> {
        let mut items = Vec::new();

        items.push(FileTreeItem {
            node: self.clone(),
            depth,
        });

        if self.is_expanded {
            // Folders before files, each case-insensitive alphabetical
            let mut sorted_children: Vec<_> = self.children.values().collect();
            sorted_children.sort_by(|a, b| match (a.is_folder, b.is_folder) {
                (true, false) => std::cmp::Ordering::Less,
                (false, true) => std::cmp::Ordering::Greater,
                _ => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            });

            for child in sorted_children {
                items.extend(child.get_flattened_items(depth + 1));
            }
        }

        items
    }
}

/// A tree node paired with its rendering depth, for flat list widgets.
#[derive(Debug, Clone, PartialEq)]
pub struct FileTreeItem {
    pub node: FileTreeNode,
    pub depth: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileTree {
    pub root: FileTreeNode,
}

impl FileTree {
    pub fn new(root_path: PathBuf) -> Self {
        let root_name = root_path
            .file_name()
            .unwrap_or_else(|| root_path.as_os_str())
            .to_string_lossy()
            .to_string();

        Self {
            root: FileTreeNode::new_folder(root_name, RelativePathBuf::new()),
        }
    }

    /// Build a tree from absolute script paths under `root_path`. Paths
    /// outside the root or not representable as UTF-8 are skipped.
    pub fn build_from_files(root_path: PathBuf, files: &[PathBuf]) -> Self {
        let mut tree = Self::new(root_path.clone());
        tree.root.is_expanded = true; // Root should always be expanded

        for file in files {
            if let Ok(relative_path) = file.strip_prefix(&root_path)
                && let Ok(relative_path) = RelativePathBuf::from_path(relative_path)
            {
                tree.root.insert_file(&relative_path);
            }
        }

        tree
    }

    pub fn toggle_folder(&mut self, path: &RelativePath) {
        self.root.toggle_expanded(path);
    }

    pub fn expand_folder(&mut self, path: &RelativePath) {
        self.root.set_expanded(path, true);
    }

    pub fn collapse_folder(&mut self, path: &RelativePath) {
        self.root.set_expanded(path, false);
    }

    pub fn get_items(&self) -> Vec<FileTreeItem> {
        self.root.get_flattened_items(0)
    }
}
