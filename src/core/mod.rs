//! Core domain logic for dockscan
//!
//! This module contains the reconciliation rules and session bookkeeping.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (ManifestItem, SessionState, LogEntry, ScanOutcome)
//! - `services/` - Business logic orchestration
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
