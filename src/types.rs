/*!
 * Core types and data structures for the TreeSnap application
 */

/// Content recorded for a single file in the snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    /// File was read successfully as text
    Text(String),
    /// File could not be read; holds the failure reason
    Unreadable(String),
}

/// One file captured by the walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path relative to the scan root, separators normalized to `/`
    pub path: String,
    /// File content or the captured read failure
    pub content: FileContent,
}

/// Accumulated result of a directory walk, in discovery order.
///
/// The structure listing and the content blocks of the output are both
/// views of this one sequence, so they always stay aligned.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    /// Captured files, in discovery order
    pub entries: Vec<FileEntry>,
}

impl Snapshot {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a file entry
    pub fn push(&mut self, path: String, content: FileContent) {
        self.entries.push(FileEntry { path, content });
    }

    /// Relative paths of all captured files, in discovery order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.path.as_str())
    }

    /// Number of captured files
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the walk captured no files
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
