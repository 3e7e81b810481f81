//! Domain models for dockscan
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`ManifestItem`] - An expected product line and its scan progress
//! - [`SessionState`] - Manifest, counters and audit logs of one session
//! - [`LogEntry`] - A line in the correct/incorrect audit logs
//! - [`ScanOutcome`] - How a scan was classified
//! - [`Tone`] - Acknowledgment requested from the feedback collaborator

mod log_entry;
mod manifest_item;
mod outcome;
mod session_state;
mod tone;

pub use log_entry::{LOG_TIME_FORMAT, LogEntry};
pub use manifest_item::{ManifestItem, RawManifestRow};
pub use outcome::ScanOutcome;
pub use session_state::{ItemProgress, SessionState};
pub use tone::{Tone, Waveform};
