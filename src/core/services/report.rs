//! Session report
//!
//! Builds the comparison report sent when an unloading session is closed:
//! a per-item summary plus both audit logs, numbered from 1.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::core::models::{LogEntry, SessionState};
use crate::error::SubmitError;

/// Fixed movement type of every report
pub const REPORT_TYPE: &str = "DESCARGUE";

/// Operator-supplied report header
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportMeta {
    /// Vehicle plate
    pub plate: String,
    /// Sender / carrier
    pub sender: String,
    /// Date shown on the report
    pub date: String,
    /// Checkpoint site, when the deployment uses sites
    pub site: Option<String>,
}

/// Which sites a report may name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SitePolicy {
    /// Reports must name a site
    pub require_site: bool,
    /// Allowed site names (empty = any)
    pub sites: Vec<String>,
}

/// Report header as sent on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadMeta {
    /// Vehicle plate
    #[serde(rename = "placa")]
    pub plate: String,
    /// Movement type
    #[serde(rename = "tipo")]
    pub kind: String,
    /// Sender / carrier
    #[serde(rename = "remitente")]
    pub sender: String,
    /// Report date
    #[serde(rename = "fecha")]
    pub date: String,
    /// Checkpoint site
    #[serde(rename = "sede", default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    /// Units accepted in the session
    #[serde(rename = "total_unidades")]
    pub total_units: u64,
    /// Submission time (RFC 3339, UTC, milliseconds)
    #[serde(rename = "timestamp_envio")]
    pub sent_at: String,
}

/// One manifest line in the summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// Primary code
    #[serde(rename = "codigoBarra")]
    pub code: String,
    /// `"<accepted> / <expected>"`
    #[serde(rename = "unidadesEsc")]
    pub units: String,
    /// Destination city
    #[serde(rename = "ciudad")]
    pub city: String,
}

/// A numbered audit log line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberedEntry {
    /// 1-based position in its log
    pub n: usize,
    /// Scanned code
    #[serde(rename = "codigo")]
    pub code: String,
    /// Scan time
    #[serde(rename = "hora")]
    pub time: String,
}

/// Summary and logs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    /// One row per manifest item, import order
    #[serde(rename = "resumen")]
    pub summary: Vec<SummaryRow>,
    /// Correct log
    #[serde(rename = "correctos")]
    pub correct: Vec<NumberedEntry>,
    /// Incorrect log
    #[serde(rename = "incorrectos")]
    pub incorrect: Vec<NumberedEntry>,
}

/// The full outbound report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPayload {
    /// Header
    pub meta: PayloadMeta,
    /// Summary and logs
    #[serde(rename = "comparativo")]
    pub comparison: Comparison,
}

/// What the report endpoint answered (all fields optional)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitReceipt {
    /// Sheet the report landed in
    #[serde(default)]
    pub sheet: Option<String>,
    /// First column written
    #[serde(default, rename = "startCol")]
    pub start_col: Option<serde_json::Value>,
    /// Write mode reported by the endpoint
    #[serde(default)]
    pub mode: Option<String>,
}

impl SubmitReceipt {
    /// One-line description for the operator
    #[must_use]
    pub fn describe(&self) -> String {
        let start_col = match &self.start_col {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => "-".to_string(),
        };
        format!(
            "Sheet: {} | Start column: {} | Mode: {}",
            self.sheet.as_deref().unwrap_or("-"),
            start_col,
            self.mode.as_deref().unwrap_or("comparativo")
        )
    }
}

fn numbered(log: &[LogEntry]) -> Vec<NumberedEntry> {
    log.iter()
        .enumerate()
        .map(|(i, entry)| NumberedEntry {
            n: i + 1,
            code: entry.code.clone(),
            time: entry.time.clone(),
        })
        .collect()
}

fn required(value: &str, field: &'static str) -> Result<String, SubmitError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(SubmitError::MissingField(field));
    }
    Ok(value.to_string())
}

/// Validate the header and assemble the report
///
/// Refuses to build a report without plate and sender, without a site when
/// the policy requires one, or for an empty manifest.
pub fn build_report(
    state: &SessionState,
    meta: &ReportMeta,
    policy: &SitePolicy,
    kind: &str,
    sent_at: DateTime<Utc>,
) -> Result<ReportPayload, SubmitError> {
    let plate = required(&meta.plate, "placa")?;
    let sender = required(&meta.sender, "remitente")?;

    let site = meta.site.as_deref().map(str::trim).filter(|s| !s.is_empty());
    match site {
        None if policy.require_site => return Err(SubmitError::MissingField("sede")),
        Some(site) if !policy.sites.is_empty() && !policy.sites.iter().any(|s| s == site) => {
            return Err(SubmitError::UnknownSite(site.to_string()));
        },
        _ => {},
    }

    if state.is_empty() {
        return Err(SubmitError::EmptyManifest);
    }

    let summary = state
        .item_progress(None)
        .into_iter()
        .map(|row| SummaryRow {
            units: format!("{} / {}", row.scanned, row.expected),
            code: row.code,
            city: row.city,
        })
        .collect();

    Ok(ReportPayload {
        meta: PayloadMeta {
            plate,
            kind: kind.to_string(),
            sender,
            date: meta.date.trim().to_string(),
            site: site.map(String::from),
            total_units: state.global_accepted,
            sent_at: sent_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        },
        comparison: Comparison {
            summary,
            correct: numbered(&state.correct_log),
            incorrect: numbered(&state.incorrect_log),
        },
    })
}
