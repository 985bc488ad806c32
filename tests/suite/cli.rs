//! Runs the `wfar` binary against certificates on disk.

use std::process::{Command, Output};

use serde_json::json;
use tempfile::TempDir;

use crate::common::{counting_json, write_json};

fn wfar(dir: &TempDir, args: &[&str]) -> Output {
    let config = dir.path().join("config.toml");
    if !config.exists() {
        std::fs::write(&config, "[log]\nlevel = \"warn\"\n").unwrap();
    }
    Command::new(env!("CARGO_BIN_EXE_wfar"))
        .arg("--config")
        .arg(&config)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("wfar binary runs")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn valid_certificate_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_json(dir.path(), "counting.json", &counting_json());

    let output = wfar(&dir, &["verify", path.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("counting.json: valid"));
}

#[test]
fn invalid_certificate_exits_one_and_explains() {
    let dir = tempfile::tempdir().unwrap();
    let mut value = counting_json();
    value["accept"][0]["mode"] = json!("equal");
    let path = write_json(dir.path(), "equal.json", &value);

    let output = wfar(&dir, &["verify", "--explain", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("equal.json: invalid"));
    assert!(out.contains("check failed: acceptance table is closed under one step"));
}

#[test]
fn one_invalid_file_fails_the_batch() {
    let dir = tempfile::tempdir().unwrap();
    let good = write_json(dir.path(), "good.json", &counting_json());
    let mut value = counting_json();
    value["accept"] = json!([]);
    let bad = write_json(dir.path(), "bad.json", &value);

    let output = wfar(
        &dir,
        &["verify", good.to_str().unwrap(), bad.to_str().unwrap()],
    );
    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("good.json: valid"));
    assert!(out.contains("bad.json: invalid"));
}

#[test]
fn table_over_configured_limit_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[limits]\nmax_accept_entries = 0\n",
    )
    .unwrap();
    let path = write_json(dir.path(), "counting.json", &counting_json());

    let output = wfar(&dir, &["verify", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("skipped"));
}

#[test]
fn unreadable_certificate_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = wfar(&dir, &["verify", "does-not-exist.json"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("does-not-exist.json"));
}

#[test]
fn machine_command_prints_table() {
    let dir = tempfile::tempdir().unwrap();
    let output = wfar(&dir, &["machine", "1RB1LB_1LA---"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "A: 1RB 1LB\nB: 1LA ---\n");
}
