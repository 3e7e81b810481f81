//! Manifest source port
//!
//! Fetches the delimited manifest text from wherever it lives.

use std::future::Future;

use crate::error::FetchError;

/// A place a manifest can be fetched from
pub trait ManifestSource {
    /// Human-readable name shown once the manifest is loaded
    fn label(&self) -> String;

    /// Fetch the raw delimited text
    fn fetch(&self) -> impl Future<Output = Result<String, FetchError>> + Send;
}
