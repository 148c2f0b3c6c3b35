#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn kat() -> Command {
    cargo_bin_cmd!("kattend")
}

/// A small two-person chat export covering two weeks: a complete day, an
/// in-only day, a half-day, and a day in the following week.
pub const SAMPLE_LOG: &str = "\
Kim님과 카카오톡 대화
저장한 날짜 : 2025-09-13 10:00
--------------- 2025년 9월 1일 월요일 ---------------
[Kim] [오전 8:55] 출근
[Lee] [오전 9:10] 출근했습니다
사진
[Kim] [오후 6:10] 퇴근
[Lee] [오후 7:00] 퇴근
--------------- 2025년 9월 2일 화요일 ---------------
[Kim] [오전 9:00] 출근
--------------- 2025년 9월 3일 수요일 ---------------
[Kim] [오전 9:00] 출근 오후 반차입니다
[Kim] [오후 1:00] 퇴근
--------------- 2025년 9월 8일 월요일 ---------------
[Kim] [오전 9:00] 출근
[Kim] [오후 6:00] 퇴근
Kim님이 이모티콘을 보냈습니다
";

/// Write the sample log into the system temp dir under a unique name.
pub fn write_sample_log(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_kattend.txt", name));
    fs::write(&path, SAMPLE_LOG).expect("write sample log");
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}
