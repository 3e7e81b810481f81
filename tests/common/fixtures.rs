//! Test fixtures and builders
//!
//! Provides convenient builders for creating test data.

use chrono::NaiveTime;
use dockscan::core::models::{RawManifestRow, SessionState};
use dockscan::core::services::{ReportMeta, load_manifest};

/// Builder for manifest rows
pub struct ManifestBuilder {
    rows: Vec<RawManifestRow>,
}

impl ManifestBuilder {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Add an item with no aliases
    pub fn item(self, code: &str, quantity: &str) -> Self {
        self.row(code, quantity, "", "")
    }

    /// Add an item with a city and comma-joined aliases
    pub fn row(mut self, code: &str, quantity: &str, city: &str, aliases: &str) -> Self {
        self.rows.push(RawManifestRow::new(code, quantity, city, aliases));
        self
    }

    pub fn rows(self) -> Vec<RawManifestRow> {
        self.rows
    }

    /// Load the rows into a fresh session state
    pub fn state(self) -> SessionState {
        let mut state = SessionState::default();
        load_manifest(&mut state, self.rows, Some("fixture".to_string()));
        state
    }
}

impl Default for ManifestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wall-clock time of day for log entries
pub fn at(hour: u32, min: u32, sec: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, min, sec).unwrap()
}

/// Report header with every required field filled
pub fn report_meta() -> ReportMeta {
    ReportMeta {
        plate: "XYZ987".to_string(),
        sender: "Carga Express".to_string(),
        date: "19/10/2026".to_string(),
        site: None,
    }
}
