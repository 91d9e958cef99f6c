use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;


/// Create a temporary scripts directory with test files
pub fn create_test_scripts_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a test script file with content
pub fn create_test_script(scripts_dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = scripts_dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}
