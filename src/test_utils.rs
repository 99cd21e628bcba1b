//! Test utilities for creating temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// The layout used throughout the tests:
    ///
    /// ```text
    /// file1.txt
    /// file2.py
    /// dir1/nested_file.txt
    /// dir2/nested_dir/deep_file.md
    /// ```
    pub fn sample() -> Self {
        let dir = Self::new();
        dir.add_file("file1.txt", "content");
        dir.add_file("file2.py", "print('hello')");
        dir.add_file("dir1/nested_file.txt", "nested content");
        dir.add_file("dir2/nested_dir/deep_file.md", "# Deep file");
        dir
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add a file of `len` zero bytes.
    pub fn add_sized_file(&self, path: &str, len: usize) -> PathBuf {
        let full_path = self.add_file(path, "");
        fs::write(&full_path, vec![0u8; len]).expect("Failed to write file");
        full_path
    }

    /// Add an empty directory (and its parents).
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
