/*!
 * Configuration handling for TreeSnap
 */

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::ensure;
use crate::error::Result;

/// Name of the generated snapshot file
pub const OUTPUT_FILE_NAME: &str = "project_contents.txt";

/// Name of the ignore-list file
pub const IGNORE_LIST_NAME: &str = ".il";

/// Name of the whitelist file
pub const WHITELIST_NAME: &str = ".wl";

/// Command-line arguments for TreeSnap
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "treesnap",
    version = env!("CARGO_PKG_VERSION"),
    about = "Save project structure and file contents to a text snapshot",
    long_about = "Walks the current directory and writes a plain-text snapshot of the \
file tree and file contents to project_contents.txt, optionally filtered by glob \
patterns from a .il (ignore list) and a .wl (whitelist) file."
)]
pub struct Args {
    /// Filter the snapshot with ignore patterns from the resolved .il file
    #[clap(long)]
    pub il: bool,

    /// Restrict the snapshot to files matching the resolved .wl file
    #[clap(long)]
    pub wl: bool,

    /// Print which .il and .wl files are in effect, then exit
    #[clap(long)]
    pub show_locations: bool,
}

/// Where a resolved list file was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSource {
    /// Copy in the current working directory
    Local,
    /// Fallback copy next to the executable
    Default,
}

impl fmt::Display for ListSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListSource::Local => write!(f, "local"),
            ListSource::Default => write!(f, "default"),
        }
    }
}

/// A resolved list file location
#[derive(Debug, Clone)]
pub struct ListFile {
    /// Path the loader will read
    pub path: PathBuf,
    /// Which copy the resolution picked
    pub source: ListSource,
}

impl ListFile {
    /// Resolve a list file: prefer a copy in the project directory,
    /// otherwise fall back to one colocated with the program itself.
    pub fn resolve(name: &str, project_dir: &Path, program_dir: Option<&Path>) -> Self {
        let local = project_dir.join(name);
        if local.exists() {
            return Self {
                path: local,
                source: ListSource::Local,
            };
        }
        match program_dir {
            Some(dir) => Self {
                path: dir.join(name),
                source: ListSource::Default,
            },
            None => Self {
                path: local,
                source: ListSource::Local,
            },
        }
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Directory to walk
    pub root_dir: PathBuf,

    /// Snapshot file path
    pub output_file: PathBuf,

    /// Resolved ignore-list file
    pub ignore_file: ListFile,

    /// Resolved whitelist file
    pub whitelist_file: ListFile,

    /// Whether ignore filtering is enabled
    pub use_ignore: bool,

    /// Whether whitelist filtering is enabled
    pub use_whitelist: bool,
}

impl Config {
    /// Create configuration from command-line arguments, rooted at the
    /// current working directory
    pub fn from_args(args: &Args) -> Result<Self> {
        let root_dir = env::current_dir()?;
        let program_dir = env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));

        Ok(Self {
            output_file: root_dir.join(OUTPUT_FILE_NAME),
            ignore_file: ListFile::resolve(IGNORE_LIST_NAME, &root_dir, program_dir.as_deref()),
            whitelist_file: ListFile::resolve(WHITELIST_NAME, &root_dir, program_dir.as_deref()),
            use_ignore: args.il,
            use_whitelist: args.wl,
            root_dir,
        })
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.root_dir.exists(),
            PathNotFound,
            "Target directory not found: {}",
            self.root_dir.display()
        );
        ensure!(
            self.root_dir.is_dir(),
            Config,
            "Target path is not a directory: {}",
            self.root_dir.display()
        );
        Ok(())
    }
}
