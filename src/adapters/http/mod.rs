//! HTTP adapters
//!
//! - [`HttpManifestSource`] - download a manifest (e.g. a Google Sheets CSV export)
//! - [`HttpReportSink`] - POST the session report to the reporting endpoint

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};

use crate::core::ports::{ManifestSource, ReportSink};
use crate::core::services::report::{ReportPayload, SubmitReceipt};
use crate::error::{FetchError, SubmitError};

/// Google Sheets CSV export URL template (`{id}` is the sheet id)
const SHEETS_EXPORT_URL: &str = "https://docs.google.com/spreadsheets/d/{id}/export?format=csv";

/// Plain text keeps browser-style endpoints (Apps Script) from requiring a
/// CORS preflight; the body is still JSON.
const REPORT_CONTENT_TYPE: &str = "text/plain;charset=UTF-8";

/// CSV export URL for a Google Sheets document id
#[must_use]
pub fn sheet_export_url(sheet_id: &str) -> String {
    SHEETS_EXPORT_URL.replace("{id}", sheet_id.trim())
}

/// Build the shared HTTP client
pub fn client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("dockscan/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Manifest downloaded over HTTP
#[derive(Debug, Clone)]
pub struct HttpManifestSource {
    client: Client,
    url: String,
    label: String,
}

impl HttpManifestSource {
    /// Download from `url`, labelled with the URL itself
    #[must_use]
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            client,
            label: url.clone(),
            url,
        }
    }

    /// Replace the label shown once loaded (e.g. the client name)
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

impl ManifestSource for HttpManifestSource {
    fn label(&self) -> String {
        self.label.clone()
    }

    async fn fetch(&self) -> Result<String, FetchError> {
        log::debug!("downloading manifest from {}", self.url);
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }
        Ok(response.text().await?)
    }
}

/// Report endpoint reached over HTTP POST
#[derive(Debug, Clone)]
pub struct HttpReportSink {
    client: Client,
    endpoint: Url,
}

impl HttpReportSink {
    /// Validate `endpoint` (must be http or https)
    pub fn new(client: Client, endpoint: &str) -> Result<Self, SubmitError> {
        let endpoint = endpoint.trim();
        let url = Url::parse(endpoint)
            .map_err(|_| SubmitError::InvalidEndpoint(endpoint.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(SubmitError::InvalidEndpoint(endpoint.to_string()));
        }
        Ok(Self {
            client,
            endpoint: url,
        })
    }

    /// Validated endpoint
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl ReportSink for HttpReportSink {
    async fn submit(&self, payload: &ReportPayload) -> Result<SubmitReceipt, SubmitError> {
        let body = serde_json::to_string(payload)?;
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, REPORT_CONTENT_TYPE)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(SubmitError::Http {
                status: status.as_u16(),
                body: text,
            });
        }

        // the reply is informational; anything unparsable is just "no details"
        Ok(serde_json::from_str(&text).unwrap_or_default())
    }
}
