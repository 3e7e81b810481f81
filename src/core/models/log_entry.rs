//! Audit log entry
//!
//! Each submitted scan that touches an audit log leaves one of these behind.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Clock format used for log times (e.g. `9:05:03 AM`)
pub const LOG_TIME_FORMAT: &str = "%-I:%M:%S %p";

/// One line of the correct or incorrect audit log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// The scanned code exactly as it was submitted
    pub code: String,
    /// Wall-clock time of the scan
    pub time: String,
}

impl LogEntry {
    /// Create an entry stamped with the given local time
    #[must_use]
    pub fn at(code: &str, now: NaiveTime) -> Self {
        Self {
            code: code.to_string(),
            time: now.format(LOG_TIME_FORMAT).to_string(),
        }
    }
}
