//! Reconciliation engine
//!
//! Applies one scan to the session: match it against the manifest, gate it
//! on the item's quantity, and update counters and audit logs.
//!
//! Pure business logic, no I/O. Persisting the result is the caller's job
//! (see [`ScanOutcome::mutates_state`]).

use chrono::NaiveTime;

use crate::core::models::{LogEntry, ScanOutcome, SessionState};

use super::normalizer::normalize;

/// Apply a raw scan to the session state
///
/// Quantity is gated twice. The per-item progress counter is the hard cap
/// shared by suffixed and unsuffixed scans; once it is reached the scan is
/// `OverQuota` and nothing is logged. Below the cap the scan is logged as
/// correct before the per-style check runs, so a duplicate suffix (or an
/// extra unsuffixed scan) still leaves a correct-log line without counting.
pub fn submit_scan(state: &mut SessionState, raw: &str, now: NaiveTime) -> ScanOutcome {
    let code = normalize(raw);
    log::debug!("scan {raw:?} -> main {:?} suffix {:?}", code.main, code.suffix);

    let Some(index) = state.find_item(&code.main) else {
        state.incorrect_log.push(LogEntry::at(raw, now));
        return ScanOutcome::Unmatched;
    };

    let item = &mut state.manifest[index];
    let current = state.progress_by_code.get(&item.primary_code).copied().unwrap_or(0);
    if current >= item.expected_quantity {
        return ScanOutcome::OverQuota;
    }

    state.correct_log.push(LogEntry::at(raw, now));

    if !code.has_suffix() || item.expected_quantity == 1 {
        if item.no_suffix_accepted >= item.expected_quantity {
            return ScanOutcome::DuplicateNoSuffix;
        }
        item.no_suffix_accepted += 1;
    } else if !item.scanned_subunits.insert(code.suffix) {
        return ScanOutcome::DuplicateSubunit;
    }

    *state.progress_by_code.entry(item.primary_code.clone()).or_insert(0) += 1;
    state.global_accepted += 1;
    ScanOutcome::Accepted
}
