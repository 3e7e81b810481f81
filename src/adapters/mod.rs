//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `file/` - Directory-backed key/value store, local manifest files
//! - `memory/` - In-memory key/value store
//! - `delimited/` - Manifest CSV parsing
//! - `http/` - Manifest download and report submission
//! - `terminal/` - Bell feedback

pub mod delimited;
pub mod file;
pub mod http;
pub mod memory;
pub mod terminal;
