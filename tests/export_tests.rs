mod common;
use common::{kat, temp_out, write_sample_log};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_export_csv_detail_table() {
    let log = write_sample_log("export_csv");
    let out = temp_out("export_csv", "csv");

    kat()
        .args([
            "export", &log, "--from", "2025-09-01", "--to", "2025-09-12", "--format", "csv",
            "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("이름"));
    assert!(content.contains("2025-09-01"));
    assert!(content.contains("주간합계"));
    assert!(content.contains("출근만"));
}

#[test]
fn test_export_json_keeps_row_tags() {
    let log = write_sample_log("export_json");
    let out = temp_out("export_json", "json");

    kat()
        .args([
            "export", &log, "--from", "2025-09-01", "--to", "2025-09-12", "--format", "json",
            "--file", &out, "--person", "Kim",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("parse exported json");
    let kinds: Vec<&str> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["kind"].as_str().unwrap())
        .collect();

    assert!(kinds.contains(&"day"));
    assert!(kinds.contains(&"week_summary"));
    assert_eq!(kinds.last(), Some(&"week_summary"));
}

#[test]
fn test_export_xlsx_writes_file() {
    let log = write_sample_log("export_xlsx");
    let out = temp_out("export_xlsx", "xlsx");

    kat()
        .args([
            "export", &log, "--from", "2025-09-01", "--to", "2025-09-12", "--format", "xlsx",
            "--file", &out,
        ])
        .assert()
        .success();

    let meta = fs::metadata(&out).expect("exported xlsx exists");
    assert!(meta.len() > 0);
}

#[test]
fn test_export_refuses_relative_path() {
    let log = write_sample_log("export_relative");

    kat()
        .args([
            "export", &log, "--from", "2025-09-01", "--format", "csv", "--file", "out.csv",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("absolute"));
}

#[test]
fn test_export_force_overwrites_existing_file() {
    let log = write_sample_log("export_force");
    let out = temp_out("export_force", "csv");
    fs::write(&out, "old content").expect("seed existing file");

    kat()
        .args([
            "export", &log, "--from", "2025-09-01", "--to", "2025-09-12", "--format", "csv",
            "--file", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("이름"));
}

#[test]
fn test_export_without_force_cancels_on_existing_file() {
    let log = write_sample_log("export_noforce");
    let out = temp_out("export_noforce", "csv");
    fs::write(&out, "old content").expect("seed existing file");

    // stdin is empty, so the overwrite prompt falls through to "no"
    kat()
        .args([
            "export", &log, "--from", "2025-09-01", "--to", "2025-09-12", "--format", "csv",
            "--file", &out,
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cancelled"));

    let content = fs::read_to_string(&out).expect("read original file");
    assert_eq!(content, "old content");
}
