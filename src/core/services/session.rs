//! Session controller
//!
//! Owns the [`SessionState`] and its collaborators. Every state-changing
//! operation goes through here so the snapshot is rewritten right after it.

use chrono::{DateTime, NaiveTime, Utc};
use serde::Serialize;

use crate::core::models::{ItemProgress, RawManifestRow, ScanOutcome, SessionState};
use crate::core::ports::{Feedback, ReportSink};
use crate::error::SubmitError;

use super::manifest::{LoadSummary, load_manifest};
use super::normalizer::normalize;
use super::reconciler::submit_scan;
use super::report::{ReportMeta, ReportPayload, SitePolicy, SubmitReceipt, build_report};
use super::snapshot::SnapshotStore;

/// Result of one scan, with enough context to tell the operator why
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReceipt {
    /// Code as submitted
    pub raw: String,
    /// Normalized main code
    pub main: String,
    /// Normalized suffix (empty if none)
    pub suffix: String,
    /// Classification
    pub outcome: ScanOutcome,
    /// The matched item after the scan, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<ItemProgress>,
}

impl ScanReceipt {
    /// Operator-facing explanation of the outcome
    #[must_use]
    pub fn message(&self) -> String {
        let expected = self.item.as_ref().map_or(0, |item| item.expected);
        match self.outcome {
            ScanOutcome::Accepted => match &self.item {
                Some(item) => format!("{}: {} of {} units", item.code, item.scanned, item.expected),
                None => format!("{} accepted", self.main),
            },
            ScanOutcome::OverQuota => {
                format!("Product {} already reached its total quantity ({expected})", self.main)
            },
            ScanOutcome::DuplicateNoSuffix => {
                format!("Code {} was already scanned {expected} time(s)", self.main)
            },
            ScanOutcome::DuplicateSubunit => {
                format!("Sub-code -{} of {} was already scanned", self.suffix, self.main)
            },
            ScanOutcome::Unmatched => "The scanned code does not match any product".to_string(),
        }
    }
}

/// An unloading session and the collaborators it reports to
pub struct Session {
    state: SessionState,
    snapshots: SnapshotStore,
    feedback: Box<dyn Feedback>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .field("snapshots", &self.snapshots)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Resume the last saved session, or start empty
    #[must_use]
    pub fn open(snapshots: SnapshotStore, feedback: Box<dyn Feedback>) -> Self {
        let state = snapshots.restore().unwrap_or_default();
        if !state.is_empty() {
            log::debug!(
                "resumed session: {} items, {}/{} units",
                state.manifest.len(),
                state.global_accepted,
                state.total_expected
            );
        }
        Self {
            state,
            snapshots,
            feedback,
        }
    }

    /// Current state, for rendering
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Replace the session with a new manifest and persist it
    pub fn load_manifest(
        &mut self,
        rows: Vec<RawManifestRow>,
        source: Option<String>,
    ) -> anyhow::Result<LoadSummary> {
        let summary = load_manifest(&mut self.state, rows, source);
        self.snapshots.save(&self.state)?;
        Ok(summary)
    }

    /// Submit one scan, acknowledge it and persist any change
    pub fn submit_scan(&mut self, raw: &str, now: NaiveTime) -> anyhow::Result<ScanReceipt> {
        let outcome = submit_scan(&mut self.state, raw, now);
        self.feedback.play(outcome.tone());

        if outcome.mutates_state() {
            self.snapshots.save(&self.state)?;
        }

        let code = normalize(raw);
        let item = self.state.find_item(&code.main).map(|index| {
            let item = &self.state.manifest[index];
            ItemProgress {
                code: item.primary_code.clone(),
                valid_codes: item.valid_codes.clone(),
                city: item.city.clone(),
                scanned: self.state.progress(&item.primary_code),
                expected: item.expected_quantity,
            }
        });

        Ok(ScanReceipt {
            raw: raw.to_string(),
            main: code.main,
            suffix: code.suffix,
            outcome,
            item,
        })
    }

    /// Reset to an empty session and delete the snapshot
    pub fn finish(&mut self) -> anyhow::Result<()> {
        self.state = SessionState::default();
        self.snapshots.purge()?;
        log::info!("session finished, snapshot purged");
        Ok(())
    }

    /// Build the report for the current state
    pub fn report(
        &self,
        meta: &ReportMeta,
        policy: &SitePolicy,
        kind: &str,
        sent_at: DateTime<Utc>,
    ) -> Result<ReportPayload, SubmitError> {
        build_report(&self.state, meta, policy, kind, sent_at)
    }

    /// Deliver a report; the session itself is left untouched either way
    pub async fn submit_report<R: ReportSink + Sync>(
        &self,
        sink: &R,
        payload: &ReportPayload,
    ) -> Result<SubmitReceipt, SubmitError> {
        log::info!(
            "submitting report for {} ({} units)",
            payload.meta.plate,
            payload.meta.total_units
        );
        sink.submit(payload).await
    }
}
