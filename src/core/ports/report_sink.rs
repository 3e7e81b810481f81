//! Report sink port
//!
//! Where a finished session's report is delivered.

use std::future::Future;

use crate::core::services::report::{ReportPayload, SubmitReceipt};
use crate::error::SubmitError;

/// Destination for the session report
pub trait ReportSink {
    /// Deliver the payload and return whatever the receiver answered
    fn submit(
        &self,
        payload: &ReportPayload,
    ) -> impl Future<Output = Result<SubmitReceipt, SubmitError>> + Send;
}
