/*!
 * TreeSnap - Generate a plain-text snapshot of directory contents
 *
 * This library walks a directory tree, filters entries with glob patterns
 * from optional ignore-list and whitelist files, and renders the relative
 * file tree plus the contents of each surviving file into a single text
 * snapshot.
 */

pub mod config;
pub mod error;
pub mod patterns;
pub mod report;
pub mod scanner;
pub mod types;
pub mod writer;


// Re-export main components for easier access
pub use config::{Args, Config, ListFile, ListSource};
pub use error::{Result, TreeSnapError};
pub use patterns::PatternList;
pub use report::{ReportFormat, Reporter, ScanReport};
pub use scanner::Scanner;
pub use types::{FileContent, FileEntry, Snapshot};
pub use writer::SnapshotWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
