//! dockscan - Reconcile scanned barcodes against an unloading manifest
//!
//! Load a delivery manifest, scan what comes off the truck, and send the
//! comparison report when unloading is done.

// Deny all clippy warnings in this crate
#![deny(clippy::all, clippy::pedantic, clippy::nursery, unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;

/// Main entry point for the dockscan CLI
fn main() -> anyhow::Result<()> {
    cli::run()
}
