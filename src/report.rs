/*!
 * Reporting functionality for TreeSnap
 *
 * Provides a formatted summary of a snapshot run using the tabled
 * library for clean, consistent table rendering.
 */

use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::types::{FileContent, Snapshot};

/// Statistics for a completed snapshot run
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Output file path
    pub output_file: String,
    /// Time taken to scan and write
    pub duration: Duration,
    /// Number of files captured
    pub files_processed: usize,
    /// Total number of text lines captured
    pub total_lines: usize,
    /// Total number of characters captured
    pub total_chars: usize,
    /// Files whose content could not be read
    pub unreadable_files: usize,
}

impl ScanReport {
    /// Derive run statistics from a finished snapshot
    pub fn from_snapshot(snapshot: &Snapshot, output_file: String, duration: Duration) -> Self {
        let mut total_lines = 0;
        let mut total_chars = 0;
        let mut unreadable_files = 0;

        for entry in &snapshot.entries {
            match &entry.content {
                FileContent::Text(text) => {
                    total_lines += text.lines().count();
                    total_chars += text.chars().count();
                }
                FileContent::Unreadable(_) => unreadable_files += 1,
            }
        }

        Self {
            output_file,
            duration,
            files_processed: snapshot.len(),
            total_lines,
            total_chars,
            unreadable_files,
        }
    }
}

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
    // Other formats could be added in the future
    // JSON, HTML, etc.
}

/// Report generator for snapshot results
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Format a number with human-readable units
    fn format_number(&self, num: usize) -> String {
        if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }

    /// Generate a report string based on run statistics
    pub fn generate_report(&self, report: &ScanReport) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.generate_console_report(report),
            // Additional formats could be added here
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &ScanReport) {
        println!("\n{}", self.generate_report(report));
    }

    // Create a summary table using the tabled crate
    fn generate_console_report(&self, report: &ScanReport) -> String {
        // Define the summary table data structure
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let mut rows = Vec::new();

        rows.push(SummaryRow {
            key: "📂 Output File".to_string(),
            value: report.output_file.clone(),
        });

        rows.push(SummaryRow {
            key: "⏱️ Process Time".to_string(),
            value: format!("{:.4?}", report.duration),
        });

        rows.push(SummaryRow {
            key: "📄 Files Captured".to_string(),
            value: self.format_number(report.files_processed),
        });

        rows.push(SummaryRow {
            key: "📝 Total Lines".to_string(),
            value: self.format_number(report.total_lines),
        });

        rows.push(SummaryRow {
            key: "🔤 Total Characters".to_string(),
            value: self.format_number(report.total_chars),
        });

        if report.unreadable_files > 0 {
            rows.push(SummaryRow {
                key: "⚠️ Unreadable Files".to_string(),
                value: self.format_number(report.unreadable_files),
            });
        }

        // Create and style the table
        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        format!("✅  SNAPSHOT COMPLETE\n{}", table)
    }
}
