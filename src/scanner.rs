/*!
 * Directory walking and snapshot collection
 */

use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

use indicatif::ProgressBar;
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::Result;
use crate::patterns::PatternList;
use crate::types::{FileContent, Snapshot};

/// Join a parent-relative path and a child name with `/`.
/// The scan root is the empty string, so its children are bare names.
fn join_rel(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent, name)
    }
}

/// Walker over directory contents
pub struct Scanner {
    /// Scanner configuration
    config: Config,
    /// Patterns excluding files and directories
    ignore: PatternList,
    /// Patterns restricting files when non-empty
    whitelist: PatternList,
    /// Progress bar
    pub progress: Arc<ProgressBar>,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(
        config: Config,
        ignore: PatternList,
        whitelist: PatternList,
        progress: Arc<ProgressBar>,
    ) -> Self {
        Self {
            config,
            ignore,
            whitelist,
            progress,
        }
    }

    /// Walk the target directory and return the collected snapshot.
    ///
    /// Only a failure to read the root itself is fatal; failures deeper
    /// in the tree are reported to stderr and skipped, and per-file read
    /// failures are captured as snapshot data.
    pub fn scan(&self) -> Result<Snapshot> {
        let abs_root = fs::canonicalize(&self.config.root_dir)?;

        // The previous snapshot must not feed into the next one
        let output_file = self
            .config
            .output_file
            .file_name()
            .map(|name| abs_root.join(name));

        let mut snapshot = Snapshot::new();
        self.scan_directory(&abs_root, "", output_file.as_deref(), &mut snapshot)?;
        Ok(snapshot)
    }

    /// Scan one directory level and recurse into surviving subdirectories
    fn scan_directory(
        &self,
        abs_path: &Path,
        rel_path: &str,
        output_file: Option<&Path>,
        snapshot: &mut Snapshot,
    ) -> Result<()> {
        let mut entries = Vec::new();
        for entry in WalkDir::new(abs_path).min_depth(1).max_depth(1) {
            entries.push(entry.map_err(io::Error::from)?);
        }

        // Natural directory-entry order, not sorted
        let (dirs, files): (Vec<_>, Vec<_>) =
            entries.into_iter().partition(|e| e.path().is_dir());

        // Files of the current directory come before any subdirectory content
        for entry in files {
            if output_file == Some(entry.path()) {
                continue;
            }
            let entry_rel = join_rel(rel_path, &entry.file_name().to_string_lossy());
            if self.ignore.matches(&entry_rel) {
                continue;
            }
            if !self.whitelist.is_empty() && !self.whitelist.matches(&entry_rel) {
                continue;
            }
            let content = self.process_file(entry.path(), &entry_rel);
            snapshot.push(entry_rel, content);
        }

        for entry in dirs {
            // Directory symlinks are listed but never descended
            if entry.path_is_symlink() {
                continue;
            }
            let entry_rel = join_rel(rel_path, &entry.file_name().to_string_lossy());

            // Prune before descending: nothing beneath an ignored
            // directory is ever visited
            if self.ignore.matches(&entry_rel) {
                continue;
            }

            if let Err(e) = self.scan_directory(entry.path(), &entry_rel, output_file, snapshot) {
                eprintln!("Error processing directory {}: {}", entry.path().display(), e);
            }
        }

        Ok(())
    }

    /// Read one file's content, capturing any failure instead of raising it
    fn process_file(&self, abs_path: &Path, rel_path: &str) -> FileContent {
        self.progress.inc(1);

        // Truncate long paths to keep the progress line readable
        let display_name = match rel_path.char_indices().nth_back(36) {
            Some((idx, _)) if idx > 0 => format!("...{}", &rel_path[idx..]),
            _ => rel_path.to_string(),
        };
        self.progress
            .set_message(format!("Current file: {}", display_name));

        match fs::read_to_string(abs_path) {
            Ok(text) => FileContent::Text(text),
            Err(e) => FileContent::Unreadable(e.to_string()),
        }
    }
}
