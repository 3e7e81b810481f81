//! Shared test fixtures and helpers
//!
//! - `fixtures.rs` - Manifest and session builders
//! - `mocks.rs` - Port implementations that record or fail on demand

pub mod fixtures;
pub mod mocks;
