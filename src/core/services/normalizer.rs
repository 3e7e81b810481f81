//! Code normalizer
//!
//! Splits a raw scanned string into the main code used for manifest lookup
//! and the optional sub-unit suffix.

/// A scanned code split into lookup key and sub-unit suffix
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedCode {
    /// Main code: trimmed, leading zeros removed
    pub main: String,
    /// Sub-unit suffix, empty when absent
    pub suffix: String,
}

impl NormalizedCode {
    /// Whether the scan named a specific sub-unit
    #[must_use]
    pub fn has_suffix(&self) -> bool {
        !self.suffix.is_empty()
    }
}

/// Normalize a raw scan
///
/// Splits on the first `-`, trims both halves and strips leading `0`s from
/// the main half. Never fails: `"000"` yields an empty main code.
#[must_use]
pub fn normalize(raw: &str) -> NormalizedCode {
    let (main, suffix) = raw.split_once('-').unwrap_or((raw, ""));

    NormalizedCode {
        main: main.trim().trim_start_matches('0').to_string(),
        suffix: suffix.trim().to_string(),
    }
}
