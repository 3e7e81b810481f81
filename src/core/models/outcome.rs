//! Scan classification
//!
//! Every submitted scan ends in exactly one of these outcomes.

use serde::{Deserialize, Serialize};

use super::Tone;

/// Terminal classification of one scan submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanOutcome {
    /// Counted toward the item's quantity
    Accepted,
    /// The item already reached its expected quantity
    OverQuota,
    /// No-suffix scans already cover the item's quantity
    DuplicateNoSuffix,
    /// This sub-unit suffix was already scanned
    DuplicateSubunit,
    /// The code belongs to no manifest item
    Unmatched,
}

impl ScanOutcome {
    /// Whether the scan was counted
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Whether the scan changed session state (and must be persisted)
    ///
    /// Everything except `OverQuota` appends to one of the audit logs.
    #[must_use]
    pub const fn mutates_state(self) -> bool {
        !matches!(self, Self::OverQuota)
    }

    /// Acknowledgment tone for the operator
    #[must_use]
    pub const fn tone(self) -> Tone {
        if self.is_accepted() {
            Tone::SUCCESS
        } else {
            Tone::ERROR
        }
    }

    /// Stable identifier used in JSON output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::OverQuota => "over_quota",
            Self::DuplicateNoSuffix => "duplicate_no_suffix",
            Self::DuplicateSubunit => "duplicate_subunit",
            Self::Unmatched => "unmatched",
        }
    }
}

impl std::fmt::Display for ScanOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
