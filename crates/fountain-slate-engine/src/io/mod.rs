use crate::models::FileTree;
use relative_path::RelativePath;
use std::fs;
use std::path::{Path, PathBuf};

/// Largest script accepted on read, in bytes.
pub const MAX_SCRIPT_LEN: u64 = 10 * 1024 * 1024;

/// File extensions recognized as Fountain scripts.
pub const SCRIPT_EXTENSIONS: [&str; 2] = ["fountain", "txt"];

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Script not found: {0}")]
    NotFound(PathBuf),
    #[error("Script too large: {path} is {len} bytes")]
    TooLarge { path: PathBuf, len: u64 },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid scripts directory: {0}")]
    InvalidScriptsDir(String),
}

/// Whether a path carries one of the recognized script extensions.
pub fn is_script_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SCRIPT_EXTENSIONS.iter().any(|s| ext.eq_ignore_ascii_case(s)))
}

/// Read a script file and return its Fountain text
pub fn read_script(relative_path: &RelativePath, scripts_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(scripts_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }

    let len = fs::metadata(&absolute_path).map_err(IoError::Io)?.len();
    if len > MAX_SCRIPT_LEN {
        return Err(IoError::TooLarge {
            path: absolute_path,
            len,
        });
    }

    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write Fountain text to a script file
pub fn write_script(
    relative_path: &RelativePath,
    scripts_root: &Path,
    content: &str,
) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(scripts_root);

    // Create parent directories if they don't exist
    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, content).map_err(IoError::Io)
}

/// Scan for script files in the scripts directory
pub fn scan_script_files(scripts_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !scripts_root.exists() {
        return Err(IoError::InvalidScriptsDir(
            "scripts directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(scripts_root, &mut files)?;
    files.sort();
    Ok(files)
}

/// Build a file tree from script files in the scripts directory
pub fn build_file_tree(scripts_root: &Path) -> Result<FileTree, IoError> {
    let files = scan_script_files(scripts_root)?;
    Ok(FileTree::build_from_files(
        scripts_root.to_path_buf(),
        &files,
    ))
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if is_script_file(&path) {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_scripts_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidScriptsDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}

/// Download filename for an exported script, `script.fountain` when the title
/// is blank.
pub fn export_file_name(title: &str) -> String {
    let title = title.trim();
    if title.is_empty() {
        return "script.fountain".to_string();
    }
    format!("{title}.fountain")
}
