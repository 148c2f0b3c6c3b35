//! End-to-end pipeline shared by the analyze / grid / export commands:
//! boundary validation, log reading, scanning, daily aggregation.

use std::path::Path;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::config::Config;
use crate::core::daily::{StatusMarkers, build_day_records};
use crate::core::halfday::HalfDayDetector;
use crate::errors::{AppError, AppResult};
use crate::models::DayRecord;
use crate::parser::{LogPatterns, ScanFilter, read_log, scan_lines};
use crate::utils::date::{parse_date, today};

/// Analysis options collected from CLI flags; `None` falls back to config
/// or built-in defaults.
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    pub from: String,
    pub to: Option<String>,
    pub person: Option<String>,
    pub standard: Option<i64>,
}

/// Validate the boundary dates. Fails before any parsing work, per the
/// error contract: malformed input never produces a partial table.
pub fn resolve_bounds(opts: &AnalysisOptions) -> AppResult<(NaiveDate, NaiveDate)> {
    let from = parse_date(&opts.from).ok_or_else(|| AppError::InvalidDate(opts.from.clone()))?;

    if from.weekday() != Weekday::Mon {
        return Err(AppError::NotMonday(opts.from.clone()));
    }

    let to = match &opts.to {
        Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
        None => today(),
    };

    if to < from {
        return Err(AppError::InvertedRange {
            start: from.to_string(),
            end: to.to_string(),
        });
    }

    Ok((from, to))
}

/// Run the full scan-and-aggregate pipeline over one log file.
///
/// Returns day records ordered by person then date. Empty output is not an
/// error here; callers decide how to surface it.
pub fn run_analysis(
    log_path: &Path,
    opts: &AnalysisOptions,
    cfg: &Config,
) -> AppResult<Vec<DayRecord>> {
    let (from, to) = resolve_bounds(opts)?;

    let patterns = LogPatterns::from_config(cfg)?;
    let mut detector = HalfDayDetector::from_config(cfg)?;
    if let Some(standard) = opts.standard {
        detector = detector.with_full_minutes(standard);
    }

    let lines = read_log(log_path)?;

    let filter = ScanFilter {
        from,
        to,
        person: opts.person.clone(),
        workdays_only: true,
    };

    let events = scan_lines(&lines, &patterns, &filter);
    let markers = StatusMarkers::from_config(cfg);
    Ok(build_day_records(events, &detector, &markers))
}
