use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FileStats {
    pub path: PathBuf,
    /// Bare file name, the key used by the exclusion list.
    pub name: String,
    pub lines: usize,
}

impl FileStats {
    pub fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Self {
            path,
            name,
            lines: 0,
        }
    }

    #[must_use]
    pub fn with_lines(mut self, lines: usize) -> Self {
        self.lines = lines;
        self
    }
}

/// Per-file counts ordered by line count, largest first, plus their sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Report {
    pub files: Vec<FileStats>,
    pub total: usize,
}

impl Report {
    /// Sorts descending by line count. The sort is stable, so files with equal
    /// counts keep the order in which they were collected.
    pub fn from_stats(mut files: Vec<FileStats>) -> Self {
        files.sort_by(|a, b| b.lines.cmp(&a.lines));
        let total = files.iter().map(|s| s.lines).sum();
        Self { files, total }
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
