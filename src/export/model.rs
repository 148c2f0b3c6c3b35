//! Flattening of report rows into string cells for CSV / XLSX.

use crate::models::{DayStatus, ReportRow};
use crate::utils::formatting::format_delta;

/// Column names, shared by every export format and the terminal table.
pub fn get_headers() -> Vec<&'static str> {
    vec!["이름", "날짜", "요일", "출근", "퇴근", "근무차이"]
}

/// The delta column: a formatted delta for complete days, the status word
/// for partial ones, with the half-day suffix either way.
pub fn delta_cell(status: DayStatus, delta: Option<i64>, suffix: &str) -> String {
    match delta {
        Some(d) => format!("{}{}", format_delta(d), suffix),
        None => format!("{}{}", status.label(), suffix),
    }
}

pub fn row_to_cells(row: &ReportRow) -> Vec<String> {
    match row {
        ReportRow::Day(d) => vec![
            d.name.clone(),
            d.date.format("%Y-%m-%d").to_string(),
            crate::utils::date::weekday_korean(d.weekday).to_string(),
            d.clock_in_str(),
            d.clock_out_str(),
            delta_cell(d.status, d.delta(), &d.suffix),
        ],
        ReportRow::WeekSummary(w) => vec![
            String::new(),
            w.week_start.format("%Y-%m-%d").to_string(),
            "주간합계".to_string(),
            String::new(),
            String::new(),
            format_delta(w.delta()),
        ],
    }
}
