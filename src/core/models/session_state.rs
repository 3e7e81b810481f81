//! Session state
//!
//! Everything an unloading session knows: the manifest, per-item progress,
//! global counters and both audit logs. This is the value the snapshot store
//! persists and the CLI renders.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{LogEntry, ManifestItem};

/// Full state of one unloading session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// Expected items in import order
    pub manifest: Vec<ManifestItem>,

    /// Accepted units per primary code
    pub progress_by_code: BTreeMap<String, u32>,

    /// Accepted units across the whole session
    pub global_accepted: u64,

    /// Sum of every item's expected quantity
    pub total_expected: u64,

    /// One entry per scan that passed the quota gate
    pub correct_log: Vec<LogEntry>,

    /// One entry per scan that matched no item
    pub incorrect_log: Vec<LogEntry>,

    /// Where the manifest came from (client name, path or URL)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Progress of one manifest line, for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemProgress {
    /// Primary code
    pub code: String,
    /// Every code accepted for the line
    pub valid_codes: Vec<String>,
    /// Destination city
    pub city: String,
    /// Units accepted so far
    pub scanned: u32,
    /// Units expected
    pub expected: u32,
}

impl ItemProgress {
    /// Whether the line is exactly complete
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.scanned == self.expected
    }

    /// Completion percentage, 0 for lines expecting nothing
    #[must_use]
    pub fn percent(&self) -> f64 {
        if self.expected == 0 {
            0.0
        } else {
            f64::from(self.scanned) / f64::from(self.expected) * 100.0
        }
    }
}

impl SessionState {
    /// Whether a manifest is loaded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.manifest.is_empty()
    }

    /// Accepted units for a primary code (0 if unknown)
    #[must_use]
    pub fn progress(&self, primary_code: &str) -> u32 {
        self.progress_by_code.get(primary_code).copied().unwrap_or(0)
    }

    /// Index of the first item that accepts a normalized main code
    #[must_use]
    pub fn find_item(&self, main: &str) -> Option<usize> {
        self.manifest.iter().position(|item| item.accepts(main))
    }

    /// Check the invariants a restored snapshot must satisfy
    ///
    /// Every item has a progress entry, and the global counter equals the
    /// sum of per-item progress.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let all_tracked = self
            .manifest
            .iter()
            .all(|item| self.progress_by_code.contains_key(&item.primary_code));
        let sum: u64 = self.progress_by_code.values().map(|&v| u64::from(v)).sum();
        all_tracked && sum == self.global_accepted
    }

    /// Progress rows in import order, with `focus` (if any) moved first
    #[must_use]
    pub fn item_progress(&self, focus: Option<&str>) -> Vec<ItemProgress> {
        let mut rows: Vec<ItemProgress> = self
            .manifest
            .iter()
            .map(|item| ItemProgress {
                code: item.primary_code.clone(),
                valid_codes: item.valid_codes.clone(),
                city: item.city.clone(),
                scanned: self.progress(&item.primary_code),
                expected: item.expected_quantity,
            })
            .collect();

        if let Some(focus) = focus {
            rows.sort_by_key(|row| row.code != focus);
        }
        rows
    }
}
