use std::{
    fs,
    path::{Path, PathBuf},
};

/// Scratch directory tree that is removed on drop.
#[derive(Debug)]
pub struct TempWorkspace {
    dir: tempfile::TempDir,
}

impl TempWorkspace {
    pub fn new(prefix: &str) -> Self {
        let dir = tempfile::Builder::new().prefix(prefix).tempdir().unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn create_file(&self, rel: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    /// Writes a file with `n` lines, `line 1` through `line n`.
    pub fn create_lines(&self, rel: &str, n: usize) -> PathBuf {
        let body: String = (1..=n).map(|i| format!("line {i}\n")).collect();
        self.create_file(rel, body)
    }
}
