//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{ItemProgress, ScanOutcome, SessionState};
use crate::core::services::{LoadSummary, ReportPayload, ScanReceipt, SubmitReceipt};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn global_counter(accepted: u64, expected: u64) -> String {
    format!("Units unloaded: {accepted} of {expected}")
}

/// Result of one or more scans
#[derive(Debug, Serialize)]
pub struct ScanResult {
    /// One receipt per submitted code, in order
    pub scans: Vec<ScanReceipt>,
    /// Accepted units after the last scan
    pub global_accepted: u64,
    /// Expected units
    pub total_expected: u64,
}

impl ScanResult {
    /// Collect receipts together with the resulting counters
    #[must_use]
    pub fn new(scans: Vec<ScanReceipt>, state: &SessionState) -> Self {
        Self {
            scans,
            global_accepted: state.global_accepted,
            total_expected: state.total_expected,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        for scan in &self.scans {
            println!("{}", receipt_line(scan));
        }
        println!("{}", global_counter(self.global_accepted, self.total_expected));
    }
}

/// One human-readable line for a scan receipt
#[must_use]
pub fn receipt_line(scan: &ScanReceipt) -> String {
    let label = match scan.outcome {
        ScanOutcome::Accepted => "OK".green().bold(),
        ScanOutcome::Unmatched => "UNKNOWN".red().bold(),
        _ => "REJECTED".yellow().bold(),
    };
    format!("{label} {}  {}", scan.raw, scan.message())
}

/// Session progress
#[derive(Debug, Serialize)]
pub struct StatusResult {
    /// Loaded manifest source, if any
    pub source: Option<String>,
    /// Per-item progress
    pub items: Vec<ItemProgress>,
    /// Accepted units
    pub global_accepted: u64,
    /// Expected units
    pub total_expected: u64,
    /// Entries in the correct log
    pub correct_scans: usize,
    /// Entries in the incorrect log
    pub incorrect_scans: usize,
}

impl StatusResult {
    /// Snapshot the session for display, with `focus` listed first
    #[must_use]
    pub fn new(state: &SessionState, focus: Option<&str>) -> Self {
        Self {
            source: state.source.clone(),
            items: state.item_progress(focus),
            global_accepted: state.global_accepted,
            total_expected: state.total_expected,
            correct_scans: state.correct_log.len(),
            incorrect_scans: state.incorrect_log.len(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if self.items.is_empty() {
            println!("No manifest loaded.");
            println!("Run 'dockscan load --file <manifest.csv>' to start a session");
            return;
        }

        if let Some(source) = &self.source {
            println!("Manifest: {source}\n");
        }

        for item in &self.items {
            let progress = format!("{} of {} units scanned", item.scanned, item.expected);
            let progress = if item.is_complete() {
                progress.green()
            } else if item.scanned > 0 {
                progress.yellow()
            } else {
                progress.red()
            };
            println!("  {}  {}", item.valid_codes.join(", ").bold(), item.city);
            println!("      {progress} ({:.0}%)", item.percent());
        }

        println!("\n{}", global_counter(self.global_accepted, self.total_expected));
        println!(
            "Scans logged: {} correct, {} incorrect",
            self.correct_scans, self.incorrect_scans
        );
    }
}

/// Result of loading a manifest
#[derive(Debug, Serialize)]
pub struct LoadResult {
    /// Source label
    pub source: String,
    /// What was loaded
    pub summary: LoadSummary,
}

impl LoadResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        println!("Loaded manifest: {}", self.source);
        println!(
            "  {} item(s), {} unit(s) expected",
            self.summary.items, self.summary.total_expected
        );
        if self.summary.blank_code_rows > 0 {
            println!(
                "  {} row(s) without a barcode (only scannable by alias)",
                self.summary.blank_code_rows
            );
        }
        if !self.summary.quantity_parse_failures.is_empty() {
            println!(
                "  Unreadable quantity (loaded as 0): {}",
                self.summary.quantity_parse_failures.join(", ")
            );
        }
        if !self.summary.colliding_codes.is_empty() {
            println!(
                "  Codes shared by several items (first one wins): {}",
                self.summary.colliding_codes.join(", ")
            );
        }
    }
}

/// Result of building or submitting a report
#[derive(Debug, Serialize)]
pub struct ReportResult {
    /// Whether the report was sent
    pub submitted: bool,
    /// Endpoint reply, when sent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<SubmitReceipt>,
    /// The payload, when not sent (dry run)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<ReportPayload>,
}

impl ReportResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if let Some(payload) = &self.payload {
            print_json(payload);
        }
        if let Some(receipt) = &self.receipt {
            println!("Report sent.");
            println!("{}", receipt.describe());
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => print_json(self),
        }
    }
}
