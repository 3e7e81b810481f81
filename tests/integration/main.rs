//! Integration tests for the dockscan CLI
//!
//! These tests run the real binary against a temporary home directory,
//! covering the full cycle of: load → scan → status → report → finish


use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper function to create a dockscan command rooted at `home`
fn dockscan(home: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("dockscan"));
    cmd.arg("--home").arg(home).env_remove("DOCKSCAN_HOME").env("NO_COLOR", "1");
    cmd
}

/// Helper to write a manifest export next to the home directory
fn write_manifest(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("manifest.csv");
    fs::write(&path, content).unwrap();
    path
}

/// Helper to parse JSON stdout
fn json_stdout(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

const MANIFEST: &str = "codigo_barra,cantidad,ciudad,codigos_adicionales\n\
                        100,2,Bogota,\"200\"\n\
                        300,1,Cali,\n";

// =============================================================================
// LOAD
// =============================================================================

#[test]
fn test_load_from_file() {
    let temp = TempDir::new().unwrap();
    let manifest = write_manifest(temp.path(), MANIFEST);

    dockscan(temp.path())
        .args(["load", "--file"])
        .arg(&manifest)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 item(s), 3 unit(s) expected"));

    assert!(temp.path().join("state").join("scanProgress").exists());
}

#[test]
fn test_load_missing_file_fails_without_touching_session() {
    let temp = TempDir::new().unwrap();
    let manifest = write_manifest(temp.path(), MANIFEST);
    dockscan(temp.path()).args(["load", "--file"]).arg(&manifest).assert().success();

    dockscan(temp.path())
        .args(["load", "--force", "--file", "does-not-exist.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read manifest"));

    let output = dockscan(temp.path()).args(["--json", "status"]).output().unwrap();
    assert_eq!(json_stdout(&output)["total_expected"], 3);
}

#[test]
fn test_load_unknown_client() {
    let temp = TempDir::new().unwrap();
    dockscan(temp.path())
        .args(["load", "--client", "nobody"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown client: nobody"));
}

#[test]
fn test_load_requires_a_source() {
    let temp = TempDir::new().unwrap();
    dockscan(temp.path()).arg("load").assert().failure();
}

#[test]
fn test_load_refuses_to_replace_scanned_session() {
    let temp = TempDir::new().unwrap();
    let manifest = write_manifest(temp.path(), MANIFEST);
    dockscan(temp.path()).args(["load", "--file"]).arg(&manifest).assert().success();
    dockscan(temp.path()).args(["scan", "100"]).assert().success();

    dockscan(temp.path())
        .args(["load", "--file"])
        .arg(&manifest)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    dockscan(temp.path())
        .args(["load", "--force", "--file"])
        .arg(&manifest)
        .assert()
        .success();

    let output = dockscan(temp.path()).args(["--json", "status"]).output().unwrap();
    assert_eq!(json_stdout(&output)["global_accepted"], 0);
}

// =============================================================================
// SCAN AND STATUS
// =============================================================================

#[test]
fn test_scan_outcomes_in_json() {
    let temp = TempDir::new().unwrap();
    let manifest = write_manifest(temp.path(), MANIFEST);
    dockscan(temp.path()).args(["load", "--file"]).arg(&manifest).assert().success();

    let output = dockscan(temp.path())
        .args(["--json", "scan", "100-1", "0200-1", "100-2", "100-3", "999"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = json_stdout(&output);
    let outcomes: Vec<&str> = json["scans"]
        .as_array()
        .unwrap()
        .iter()
        .map(|scan| scan["outcome"].as_str().unwrap())
        .collect();
    assert_eq!(
        outcomes,
        vec!["accepted", "duplicate_subunit", "accepted", "over_quota", "unmatched"]
    );
    assert_eq!(json["global_accepted"], 2);
    assert_eq!(json["total_expected"], 3);
}

#[test]
fn test_scan_human_output() {
    let temp = TempDir::new().unwrap();
    let manifest = write_manifest(temp.path(), MANIFEST);
    dockscan(temp.path()).args(["load", "--file"]).arg(&manifest).assert().success();

    dockscan(temp.path())
        .args(["scan", "300", "300"])
        .assert()
        .success()
        .stdout(predicate::str::contains("OK 300"))
        .stdout(predicate::str::contains("already reached its total quantity"))
        .stdout(predicate::str::contains("Units unloaded: 1 of 3"));
}

#[test]
fn test_status_without_manifest() {
    let temp = TempDir::new().unwrap();
    dockscan(temp.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("No manifest loaded"));
}

#[test]
fn test_status_focus_by_alias() {
    let temp = TempDir::new().unwrap();
    let manifest = write_manifest(temp.path(), MANIFEST);
    dockscan(temp.path()).args(["load", "--file"]).arg(&manifest).assert().success();

    let output = dockscan(temp.path())
        .args(["--json", "status", "--focus", "300-1"])
        .output()
        .unwrap();
    let json = json_stdout(&output);
    assert_eq!(json["items"][0]["code"], "300");
    assert_eq!(json["items"][1]["code"], "100");
}

#[test]
fn test_listen_reads_lines_from_stdin() {
    let temp = TempDir::new().unwrap();
    let manifest = write_manifest(temp.path(), MANIFEST);
    dockscan(temp.path()).args(["load", "--file"]).arg(&manifest).assert().success();

    let output = dockscan(temp.path())
        .args(["--json", "listen"])
        .write_stdin("100-1\n100-1\n\n300")
        .output()
        .unwrap();
    assert!(output.status.success());

    let outcomes: Vec<String> = String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|line| {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            value["outcome"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(outcomes, vec!["accepted", "duplicate_subunit", "accepted"]);
}

#[cfg(unix)]
#[test]
fn test_listen_stops_on_interrupt_while_stdin_open() {
    use std::io::{BufRead, BufReader, Write};
    use std::process::{Command, Stdio};
    use std::time::{Duration, Instant};

    let temp = TempDir::new().unwrap();
    let manifest = write_manifest(temp.path(), MANIFEST);
    dockscan(temp.path()).args(["load", "--file"]).arg(&manifest).assert().success();

    let mut child = Command::new(cargo::cargo_bin!("dockscan"))
        .arg("--home")
        .arg(temp.path())
        .args(["--json", "listen"])
        .env_remove("DOCKSCAN_HOME")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();

    // Keep stdin open for the whole test so the reader never sees EOF
    let mut stdin = child.stdin.take().unwrap();
    stdin.write_all(b"300\n").unwrap();
    stdin.flush().unwrap();

    let mut line = String::new();
    BufReader::new(child.stdout.take().unwrap()).read_line(&mut line).unwrap();
    let receipt: serde_json::Value = serde_json::from_str(&line).unwrap();
    assert_eq!(receipt["outcome"], "accepted");

    let killed = Command::new("kill").arg("-INT").arg(child.id().to_string()).status().unwrap();
    assert!(killed.success());

    let deadline = Instant::now() + Duration::from_secs(5);
    let status = loop {
        if let Some(status) = child.try_wait().unwrap() {
            break status;
        }
        if Instant::now() > deadline {
            child.kill().unwrap();
            panic!("listen did not exit after SIGINT");
        }
        std::thread::sleep(Duration::from_millis(20));
    };
    assert!(status.success());
    drop(stdin);

    let output = dockscan(temp.path()).args(["--json", "status"]).output().unwrap();
    assert_eq!(json_stdout(&output)["global_accepted"], 1);
}

// =============================================================================
// FINISH AND CONFIG
// =============================================================================

#[test]
fn test_finish_requires_confirmation_in_json_mode() {
    let temp = TempDir::new().unwrap();
    dockscan(temp.path())
        .args(["--json", "finish"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));
}

#[test]
fn test_finish_prompt_can_be_declined() {
    let temp = TempDir::new().unwrap();
    let manifest = write_manifest(temp.path(), MANIFEST);
    dockscan(temp.path()).args(["load", "--file"]).arg(&manifest).assert().success();

    dockscan(temp.path())
        .arg("finish")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled."));

    assert!(temp.path().join("state").join("scanProgress").exists());
}

#[test]
fn test_config_init_and_show() {
    let temp = TempDir::new().unwrap();
    dockscan(temp.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));
    assert!(temp.path().join("config.toml").exists());

    dockscan(temp.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    let output = dockscan(temp.path()).args(["--json", "config", "show"]).output().unwrap();
    let json = json_stdout(&output);
    assert_eq!(json["scan"]["debounce_ms"], 1000);
    assert_eq!(json["report"]["tipo"], "DESCARGUE");
}

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    dockscan(temp.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("dockscan v"));
}
