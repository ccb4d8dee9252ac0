/*!
 * Pattern list loading and glob matching
 */

use std::fs;
use std::io;
use std::path::Path;

use globset::{Glob, GlobMatcher};

use crate::error::Result;

/// An ordered list of glob patterns compiled for matching.
///
/// Globs use default `globset` semantics: `*` and `?` match across `/`,
/// so patterns apply to full relative paths, not single segments.
#[derive(Debug, Clone, Default)]
pub struct PatternList {
    matchers: Vec<GlobMatcher>,
}

impl PatternList {
    /// Create an empty list, which matches nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// Compile a list of pattern strings, skipping blank lines.
    /// Patterns that fail to compile are skipped with a warning.
    pub fn from_patterns(patterns: &[String]) -> Self {
        let mut matchers = Vec::new();
        for pattern in patterns {
            let pattern = pattern.trim();
            if pattern.is_empty() {
                continue;
            }
            match Glob::new(pattern) {
                Ok(glob) => matchers.push(glob.compile_matcher()),
                Err(e) => eprintln!("Warning: skipping invalid pattern {:?}: {}", pattern, e),
            }
        }
        Self { matchers }
    }

    /// Load patterns from a list file.
    ///
    /// A missing file is not an error: a diagnostic is printed and an
    /// empty list is returned. Any other I/O failure is fatal.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(text) => {
                let patterns: Vec<String> = text
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(str::to_string)
                    .collect();
                Ok(Self::from_patterns(&patterns))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                eprintln!("List file not found: {}", path.display());
                Ok(Self::empty())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Number of compiled patterns
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// Whether the list holds no patterns
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Check whether a relative path matches any pattern in the list.
    ///
    /// Separators are normalized to `/`. Each pattern is tried against
    /// the bare candidate and the candidate with a trailing `/`, so a
    /// directory-style pattern like `build/*` also matches the bare
    /// directory name `build`. An empty list never matches.
    pub fn matches(&self, path: &str) -> bool {
        if self.matchers.is_empty() {
            return false;
        }
        let normalized = path.replace('\\', "/");
        let with_slash = format!("{}/", normalized);
        self.matchers
            .iter()
            .any(|m| m.is_match(&normalized) || m.is_match(&with_slash))
    }
}
