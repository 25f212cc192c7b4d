use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary drafts directory for testing
pub fn create_test_drafts_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a draft file with content
pub fn create_test_file(drafts_dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = drafts_dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}
