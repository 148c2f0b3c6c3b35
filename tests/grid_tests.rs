mod common;
use common::{kat, write_sample_log};
use predicates::prelude::*;

#[test]
fn test_grid_for_one_person() {
    let log = write_sample_log("grid_kim");

    kat()
        .args([
            "grid", &log, "--from", "2025-09-01", "--to", "2025-09-12", "--person", "Kim",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("주간 요약"))
        .stdout(predicate::str::contains("2025-09-01"))
        .stdout(predicate::str::contains("2025-09-08"))
        .stdout(predicate::str::contains("+0시간 15분"));
}

#[test]
fn test_grid_requires_single_person() {
    let log = write_sample_log("grid_ambiguous");

    kat()
        .args(["grid", &log, "--from", "2025-09-01", "--to", "2025-09-12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--person"));
}

#[test]
fn test_grid_empty_scope_warns() {
    let log = write_sample_log("grid_empty");

    kat()
        .args([
            "grid", &log, "--from", "2025-10-06", "--to", "2025-10-10", "--person", "Kim",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching records"));
}
