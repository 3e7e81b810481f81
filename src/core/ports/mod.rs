//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the reconciliation core
//! and external systems (storage, sound, network).
//!
//! Implementations live in the `adapters` module.

mod feedback;
mod key_value_store;
mod manifest_source;
mod report_sink;

pub use feedback::Feedback;
pub use key_value_store::KeyValueStore;
pub use manifest_source::ManifestSource;
pub use report_sink::ReportSink;
