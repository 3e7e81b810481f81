//! Tests for scan reconciliation

use dockscan::core::models::ScanOutcome;
use dockscan::core::services::{normalize, submit_scan};

use crate::common::fixtures::{ManifestBuilder, at};

// =============================================================================
// NORMALIZATION
// =============================================================================

#[test]
fn test_normalize_documented_cases() {
    let cases = [
        ("00123-4", "123", "4"),
        ("123", "123", ""),
        ("000", "", ""),
        ("0100-A-2", "100", "A-2"),
        ("  0042 ", "42", ""),
    ];
    for (raw, main, suffix) in cases {
        let code = normalize(raw);
        assert_eq!(code.main, main, "main of {raw:?}");
        assert_eq!(code.suffix, suffix, "suffix of {raw:?}");
    }
}

// =============================================================================
// QUANTITY GATING
// =============================================================================

#[test]
fn test_unsuffixed_scans_fill_quantity_then_over_quota() {
    let mut state = ManifestBuilder::new().item("555", "3").state();
    for _ in 0..3 {
        assert_eq!(submit_scan(&mut state, "555", at(8, 0, 0)), ScanOutcome::Accepted);
    }
    assert_eq!(submit_scan(&mut state, "555", at(8, 0, 1)), ScanOutcome::OverQuota);
    assert_eq!(state.progress("555"), 3);
    assert_eq!(state.global_accepted, 3);
    assert_eq!(state.correct_log.len(), 3);
}

#[test]
fn test_repeated_suffix_is_duplicate() {
    let mut state = ManifestBuilder::new().item("77", "2").state();
    assert_eq!(submit_scan(&mut state, "77-1", at(8, 0, 0)), ScanOutcome::Accepted);
    assert_eq!(submit_scan(&mut state, "77-1", at(8, 0, 1)), ScanOutcome::DuplicateSubunit);
    assert_eq!(state.progress("77"), 1);
}

#[test]
fn test_distinct_suffixes_are_accepted() {
    let mut state = ManifestBuilder::new().item("77", "2").state();
    assert_eq!(submit_scan(&mut state, "77-1", at(8, 0, 0)), ScanOutcome::Accepted);
    assert_eq!(submit_scan(&mut state, "77-2", at(8, 0, 1)), ScanOutcome::Accepted);
    assert_eq!(state.progress("77"), 2);
}

#[test]
fn test_single_unit_item_ignores_suffix() {
    let mut state = ManifestBuilder::new().item("8", "1").state();
    assert_eq!(submit_scan(&mut state, "8-5", at(8, 0, 0)), ScanOutcome::Accepted);
    assert_eq!(submit_scan(&mut state, "8-6", at(8, 0, 1)), ScanOutcome::OverQuota);
}

#[test]
fn test_end_to_end_subunit_sequence() {
    let mut state = ManifestBuilder::new().row("100", "2", "", "100").state();

    assert_eq!(submit_scan(&mut state, "100-1", at(9, 0, 0)), ScanOutcome::Accepted);
    assert_eq!(state.progress("100"), 1);

    assert_eq!(submit_scan(&mut state, "100-1", at(9, 0, 1)), ScanOutcome::DuplicateSubunit);
    assert_eq!(state.progress("100"), 1);

    assert_eq!(submit_scan(&mut state, "100-2", at(9, 0, 2)), ScanOutcome::Accepted);
    assert_eq!(state.progress("100"), 2);

    assert_eq!(submit_scan(&mut state, "100-3", at(9, 0, 3)), ScanOutcome::OverQuota);
    assert_eq!(state.global_accepted, 2);
    assert!(state.is_consistent());
}

// =============================================================================
// MATCHING AND LOGS
// =============================================================================

#[test]
fn test_alias_counts_toward_primary() {
    let mut state = ManifestBuilder::new().row("100", "2", "Cali", "200, 300").state();
    assert_eq!(submit_scan(&mut state, "0300", at(10, 0, 0)), ScanOutcome::Accepted);
    assert_eq!(state.progress("100"), 1);
    assert_eq!(state.correct_log[0].code, "0300");
}

#[test]
fn test_unmatched_logs_once_and_changes_no_progress() {
    let mut state = ManifestBuilder::new().item("1", "5").item("2", "5").state();
    let before = state.progress_by_code.clone();

    assert_eq!(submit_scan(&mut state, "999-1", at(10, 0, 0)), ScanOutcome::Unmatched);

    assert_eq!(state.incorrect_log.len(), 1);
    assert_eq!(state.incorrect_log[0].code, "999-1");
    assert_eq!(state.incorrect_log[0].time, "10:00:00 AM");
    assert_eq!(state.progress_by_code, before);
    assert_eq!(state.global_accepted, 0);
}

#[test]
fn test_over_quota_is_not_logged() {
    let mut state = ManifestBuilder::new().item("5", "1").state();
    submit_scan(&mut state, "5", at(10, 0, 0));
    submit_scan(&mut state, "5", at(10, 0, 1));
    assert_eq!(state.correct_log.len(), 1);
    assert!(state.incorrect_log.is_empty());
}

#[test]
fn test_zero_quantity_item_rejects_everything() {
    let mut state = ManifestBuilder::new().item("5", "n/a").state();
    assert_eq!(submit_scan(&mut state, "5", at(10, 0, 0)), ScanOutcome::OverQuota);
    assert_eq!(state.global_accepted, 0);
}
