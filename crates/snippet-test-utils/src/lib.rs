//! Shared test utilities for the snippetgen workspace.
//!
//! [`TestTree`] lays out source files and documents in a temporary
//! directory. Dev-dependency only; never published.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tempfile::TempDir;

/// A temporary directory tree with helpers for writing and inspecting files.
///
/// # Example
///
/// ```rust,no_run
/// use snippet_test_utils::TestTree;
///
/// let tree = TestTree::new()
///     .with_file("src/Sample.cs", "#region Snippet:A\nA();\n#endregion\n")
///     .with_file("README.md", "```cs Snippet:A\n```\n");
/// tree.assert_file_contains("README.md", "A();");
/// ```
pub struct TestTree {
    temp_dir: TempDir,
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTree {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Root of the tree.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `rel` inside the tree.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Write `content` to `rel`, creating parent directories.
    pub fn write(&self, rel: &str, content: impl AsRef<[u8]>) {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
    }

    /// Builder form of [`write`](Self::write).
    pub fn with_file(self, rel: &str, content: impl AsRef<[u8]>) -> Self {
        self.write(rel, content);
        self
    }

    /// Read `rel` as UTF-8.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read(&self, rel: &str) -> String {
        let path = self.path(rel);
        fs::read_to_string(&path).unwrap_or_else(|_| panic!("Could not read file: {}", path.display()))
    }

    /// Last modification time of `rel`.
    pub fn modified(&self, rel: &str) -> SystemTime {
        fs::metadata(self.path(rel)).unwrap().modified().unwrap()
    }

    /// Assert that the file at `rel` contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, rel: &str, content: &str) {
        let file_content = self.read(rel);
        assert!(
            file_content.contains(content),
            "Expected {} to contain {:?}, got:\n{}",
            rel,
            content,
            file_content
        );
    }

    /// Assert that the file at `rel` is exactly `content`.
    ///
    /// # Panics
    /// Panics with both texts if they differ.
    pub fn assert_file_eq(&self, rel: &str, content: &str) {
        let file_content = self.read(rel);
        assert_eq!(file_content, content, "Unexpected content in {}", rel);
    }
}
