/*!
 * Plain-text snapshot writer for TreeSnap
 */

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::config::Config;
use crate::error::Result;
use crate::types::{FileContent, Snapshot};

/// Writer for the snapshot text layout
pub struct SnapshotWriter {
    /// Writer configuration
    config: Config,
}

impl SnapshotWriter {
    /// Create a new snapshot writer
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Write the snapshot to the output file, replacing any previous one.
    ///
    /// The layout is fixed and reproduced byte for byte for downstream
    /// consumers: a `Project Structure:` section listing relative paths,
    /// a blank line, then a `File Contents:` section of fenced blocks
    /// separated by blank lines.
    pub fn write(&self, snapshot: &Snapshot) -> Result<()> {
        let file = File::create(&self.config.output_file)?;
        let mut writer = BufWriter::new(file);

        writer.write_all(b"Project Structure:\n")?;
        for (i, path) in snapshot.paths().enumerate() {
            if i > 0 {
                writer.write_all(b"\n")?;
            }
            writer.write_all(path.as_bytes())?;
        }
        writer.write_all(b"\n\n")?;

        writer.write_all(b"File Contents:\n")?;
        for (i, entry) in snapshot.entries.iter().enumerate() {
            if i > 0 {
                writer.write_all(b"\n")?;
            }
            write!(writer, "{}:\n```\n", entry.path)?;
            match &entry.content {
                FileContent::Text(text) => writer.write_all(text.as_bytes())?,
                FileContent::Unreadable(reason) => {
                    write!(writer, "Error reading file: {}", reason)?
                }
            }
            writer.write_all(b"\n```\n")?;
        }

        writer.flush()?;
        Ok(())
    }
}
