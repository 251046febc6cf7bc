//! Scratch directory trees for rake-config unit tests.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

use crate::discovery::CONFIG_FILENAME;

/// A temporary directory that config and stopword files are written into.
pub struct TestDir(TempDir);

impl TestDir {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self(tempfile::tempdir().unwrap())
    }

    /// Root of the tree.
    pub fn path(&self) -> &Path {
        self.0.path()
    }

    /// Creates `rel` and its parents.
    pub fn dir(&self, rel: impl AsRef<Path>) -> PathBuf {
        let path = self.path().join(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Writes `content` to `rel`, creating parent directories.
    pub fn file(&self, rel: impl AsRef<Path>, content: &str) -> PathBuf {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Writes a one-word-per-line stopword list.
    pub fn stopword_list(&self, rel: &str, words: &[&str]) -> PathBuf {
        self.file(rel, &(words.join("\n") + "\n"))
    }

    /// Writes `.rake.toml` into directory `rel` (`""` for the tree root).
    pub fn config(&self, rel: &str, toml: &str) -> PathBuf {
        self.file(Path::new(rel).join(CONFIG_FILENAME), toml)
    }
}
