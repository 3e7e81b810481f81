//! Typed errors for the fallible edges of a session
//!
//! Scan classifications are never errors (see [`ScanOutcome`]); these cover
//! manifest acquisition, report submission and persistence.
//!
//! [`ScanOutcome`]: crate::core::models::ScanOutcome

use thiserror::Error;

/// Failure to acquire or parse a manifest
///
/// Leaves the current session untouched.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Local file could not be read
    #[error("failed to read manifest {path}: {source}")]
    Io {
        /// Path that was read
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Network failure while downloading
    #[error("failed to download manifest: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("manifest download failed with HTTP {status} ({url})")]
    Http {
        /// HTTP status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// The delimited text could not be read
    #[error("malformed manifest: {0}")]
    Malformed(#[from] csv::Error),

    /// Client name not present in configuration
    #[error("unknown client: {0}. Add it under [clients] in config.toml")]
    UnknownClient(String),
}

/// Failure to build or deliver the session report
#[derive(Debug, Error)]
pub enum SubmitError {
    /// A required report field is blank
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Nothing to report
    #[error("no manifest loaded")]
    EmptyManifest,

    /// Site is not one of the configured checkpoints
    #[error("unknown site: {0}")]
    UnknownSite(String),

    /// No endpoint configured
    #[error("no report endpoint configured (set report.endpoint in config.toml)")]
    NoEndpoint,

    /// Endpoint is not an http(s) URL
    #[error("invalid report endpoint: {0}")]
    InvalidEndpoint(String),

    /// Payload could not be encoded
    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),

    /// Network failure while sending
    #[error("failed to send report: {0}")]
    Transport(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Response body
        body: String,
    },
}

impl SubmitError {
    /// Whether the report never left the machine because it was incomplete
    #[must_use]
    pub const fn is_blocked(&self) -> bool {
        matches!(
            self,
            Self::MissingField(_) | Self::EmptyManifest | Self::UnknownSite(_)
        )
    }
}
