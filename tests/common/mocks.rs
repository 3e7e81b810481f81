//! Mock implementations of port traits for testing
//!
//! These mocks provide configurable behavior for unit testing
//! without real I/O operations.

use std::sync::{Arc, Mutex};

use dockscan::core::models::Tone;
use dockscan::core::ports::{Feedback, KeyValueStore, ReportSink};
use dockscan::core::services::{ReportPayload, SubmitReceipt};
use dockscan::error::SubmitError;

/// Feedback that records every tone played
#[derive(Clone, Default)]
pub struct RecordingFeedback {
    tones: Arc<Mutex<Vec<Tone>>>,
}

impl RecordingFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tones(&self) -> Vec<Tone> {
        self.tones.lock().unwrap().clone()
    }
}

impl Feedback for RecordingFeedback {
    fn play(&self, tone: Tone) {
        self.tones.lock().unwrap().push(tone);
    }
}

/// Key/value store whose writes always fail
#[derive(Default)]
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> anyhow::Result<Option<String>> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> anyhow::Result<()> {
        anyhow::bail!("disk full")
    }

    fn delete(&self, _key: &str) -> anyhow::Result<()> {
        anyhow::bail!("disk full")
    }
}

/// Key/value store holding a fixed value under every key
pub struct FixedStore(pub String);

impl KeyValueStore for FixedStore {
    fn get(&self, _key: &str) -> anyhow::Result<Option<String>> {
        Ok(Some(self.0.clone()))
    }

    fn set(&self, _key: &str, _value: &str) -> anyhow::Result<()> {
        Ok(())
    }

    fn delete(&self, _key: &str) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Report sink that records payloads and answers with a fixed status
pub struct MockReportSink {
    sent: Mutex<Vec<ReportPayload>>,
    reject_with: Option<u16>,
}

impl MockReportSink {
    pub fn accepting() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            reject_with: None,
        }
    }

    pub fn rejecting(status: u16) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            reject_with: Some(status),
        }
    }

    pub fn sent(&self) -> Vec<ReportPayload> {
        self.sent.lock().unwrap().clone()
    }
}

impl ReportSink for MockReportSink {
    async fn submit(&self, payload: &ReportPayload) -> Result<SubmitReceipt, SubmitError> {
        self.sent.lock().unwrap().push(payload.clone());
        match self.reject_with {
            Some(status) => Err(SubmitError::Http {
                status,
                body: "rejected".to_string(),
            }),
            None => Ok(SubmitReceipt {
                sheet: Some("Descargues".to_string()),
                start_col: Some(serde_json::json!("D")),
                mode: Some("comparativo".to_string()),
            }),
        }
    }
}
