/*!
 * Command-line interface for TreeSnap
 */

use std::process;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use treesnap::config::{Args, Config};
use treesnap::error::Result;
use treesnap::patterns::PatternList;
use treesnap::report::{ReportFormat, Reporter, ScanReport};
use treesnap::scanner::Scanner;
use treesnap::writer::SnapshotWriter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Create configuration
    let config = Config::from_args(&args)?;

    // Report which list files are in effect, without traversing
    if args.show_locations {
        println!(
            "IL file in use: {} ({})",
            config.ignore_file.path.display(),
            config.ignore_file.source
        );
        println!(
            "WL file in use: {} ({})",
            config.whitelist_file.path.display(),
            config.whitelist_file.source
        );
        return Ok(());
    }

    // Validate configuration
    config.validate()?;

    // Load the pattern lists for the enabled filters
    let ignore = if config.use_ignore {
        PatternList::load(&config.ignore_file.path)?
    } else {
        PatternList::empty()
    };
    let whitelist = if config.use_whitelist {
        PatternList::load(&config.whitelist_file.path)?
    } else {
        PatternList::empty()
    };

    // Create progress spinner
    let progress = ProgressBar::new_spinner();
    progress.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos} files")
            .unwrap(),
    );
    progress.enable_steady_tick(Duration::from_millis(100));
    progress.set_prefix("📊 Scanning");
    progress.set_message(format!("📂 {}", config.root_dir.display()));

    // Create scanner and writer
    let scanner = Scanner::new(config.clone(), ignore, whitelist, Arc::new(progress.clone()));
    let writer = SnapshotWriter::new(config.clone());

    // Time both the scan and the write
    let start_time = Instant::now();

    // Walk the tree
    let snapshot = scanner.scan()?;

    // Write the text snapshot
    writer.write(&snapshot)?;

    let total_duration = start_time.elapsed();

    // Clear the progress bar
    progress.finish_and_clear();

    // Print the run summary
    let report = ScanReport::from_snapshot(
        &snapshot,
        config.output_file.display().to_string(),
        total_duration,
    );
    Reporter::new(ReportFormat::ConsoleTable).print_report(&report);

    Ok(())
}
