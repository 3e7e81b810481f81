//! Feedback port
//!
//! Operator acknowledgment after each scan.

use super::super::models::Tone;

/// Produces the audible acknowledgment for a scan
///
/// Fire-and-forget: implementations swallow their own failures.
pub trait Feedback: Send + Sync {
    /// Play a tone
    fn play(&self, tone: Tone);
}
