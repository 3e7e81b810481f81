//! Business logic services
//!
//! Pure orchestration logic that operates on domain models. Only
//! [`session`] talks to the outside world, and only through port traits.
//!
//! - [`normalizer`] - Split a raw scan into main code and suffix
//! - [`reconciler`] - Classify a scan and update progress
//! - [`manifest`] - Replace the session with a loaded manifest
//! - [`snapshot`] - Persist and restore the whole session
//! - [`report`] - Build the end-of-session report
//! - [`debounce`] - Coalesce scanner keystrokes into one scan
//! - [`session`] - Controller tying the above together

pub mod debounce;
pub mod manifest;
pub mod normalizer;
pub mod reconciler;
pub mod report;
pub mod session;
pub mod snapshot;

pub use debounce::Debouncer;
pub use manifest::{LoadSummary, load_manifest, parse_quantity};
pub use normalizer::{NormalizedCode, normalize};
pub use reconciler::submit_scan;
pub use report::{REPORT_TYPE, ReportMeta, ReportPayload, SitePolicy, SubmitReceipt, build_report};
pub use session::{ScanReceipt, Session};
pub use snapshot::{SNAPSHOT_KEY, SnapshotStore};
