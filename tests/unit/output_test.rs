//! Tests for output formatting

use std::sync::Arc;

use dockscan::adapters::memory::MemoryKeyValueStore;
use dockscan::adapters::terminal::SilentFeedback;
use dockscan::core::services::{Session, SnapshotStore};
use dockscan::output::{ScanResult, StatusResult, receipt_line};

use crate::common::fixtures::{ManifestBuilder, at};

fn session() -> Session {
    let mut session = Session::open(
        SnapshotStore::new(Box::new(Arc::new(MemoryKeyValueStore::new()))),
        Box::new(SilentFeedback),
    );
    session
        .load_manifest(
            ManifestBuilder::new().row("1", "2", "Tunja", "").row("2", "1", "Pasto", "").rows(),
            Some("fixture".to_string()),
        )
        .unwrap();
    session
}

#[test]
fn test_scan_result_json() {
    let mut session = session();
    let receipts = vec![
        session.submit_scan("1-1", at(8, 0, 0)).unwrap(),
        session.submit_scan("1-1", at(8, 0, 1)).unwrap(),
    ];
    let result = ScanResult::new(receipts, session.state());
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["scans"][0]["outcome"], "accepted");
    assert_eq!(json["scans"][1]["outcome"], "duplicate_subunit");
    assert_eq!(json["scans"][0]["item"]["scanned"], 1);
    assert_eq!(json["global_accepted"], 1);
    assert_eq!(json["total_expected"], 3);
}

#[test]
fn test_status_focus_comes_first() {
    let mut session = session();
    session.submit_scan("2", at(8, 0, 0)).unwrap();

    let status = StatusResult::new(session.state(), Some("2"));
    assert_eq!(status.items[0].code, "2");
    assert!(status.items[0].is_complete());
    assert_eq!(status.items[1].code, "1");
    assert_eq!(status.correct_scans, 1);
    assert_eq!(status.source.as_deref(), Some("fixture"));
}

#[test]
fn test_receipt_line_mentions_code() {
    colored::control::set_override(false);
    let mut session = session();
    let receipt = session.submit_scan("1-1", at(8, 0, 0)).unwrap();
    assert_eq!(receipt_line(&receipt), "OK 1-1  1: 1 of 2 units");
}
