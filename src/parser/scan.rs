//! Single forward pass over the log lines: classification, context
//! tracking, and record extraction in one loop.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use chrono::{NaiveDate, NaiveTime};

use crate::errors::AppResult;
use crate::models::AttendanceEvent;
use crate::parser::context::ScanContext;
use crate::parser::patterns::{LineKind, LogPatterns};
use crate::utils::date::is_workday;

/// Filters applied while extracting events.
#[derive(Debug, Clone)]
pub struct ScanFilter {
    /// Inclusive start boundary (a Monday).
    pub from: NaiveDate,
    /// Inclusive end boundary; defaults to today at the CLI layer.
    pub to: NaiveDate,
    /// Restrict to one sender when set.
    pub person: Option<String>,
    /// Drop Saturday/Sunday events; weekly totals only cover Mon–Fri.
    pub workdays_only: bool,
}

impl ScanFilter {
    fn accepts(&self, event: &AttendanceEvent) -> bool {
        if event.date < self.from || event.date > self.to {
            return false;
        }
        if self.workdays_only && !is_workday(event.weekday) {
            return false;
        }
        if let Some(p) = &self.person {
            if &event.name != p {
                return false;
            }
        }
        true
    }
}

/// Read the whole export into memory as lines. Files are small enough that
/// streaming buys nothing here.
pub fn read_log(path: &Path) -> AppResult<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().map(|l| l.to_string()).collect())
}

/// Extract attendance events from raw lines.
///
/// Messages seen before the first date header are dropped, as are lines
/// matching neither syntax and events rejected by the filter.
pub fn scan_lines<S: AsRef<str>>(
    lines: &[S],
    patterns: &LogPatterns,
    filter: &ScanFilter,
) -> Vec<AttendanceEvent> {
    let mut ctx = ScanContext::new();
    let mut events = Vec::new();

    for line in lines {
        match patterns.classify(line.as_ref()) {
            Some(LineKind::DateHeader { date, weekday }) => {
                ctx.advance(date, weekday);
            }
            Some(LineKind::Message {
                sender,
                meridiem,
                hour,
                minute,
                text,
            }) => {
                let Some((date, weekday)) = ctx.active() else {
                    continue;
                };

                let hour24 = meridiem.to_hour24(hour);
                let Some(time) = NaiveTime::from_hms_opt(hour24, minute, 0) else {
                    continue;
                };

                let event = AttendanceEvent {
                    name: sender,
                    date,
                    weekday,
                    time,
                    text,
                };

                if filter.accepts(&event) {
                    events.push(event);
                }
            }
            None => {}
        }
    }

    events
}

/// Distinct sender names observed anywhere in the log, sorted. Used to let
/// the user pick a person instead of typing one.
pub fn distinct_senders<S: AsRef<str>>(lines: &[S], patterns: &LogPatterns) -> Vec<String> {
    let mut names = BTreeSet::new();

    for line in lines {
        if let Some(LineKind::Message { sender, .. }) = patterns.classify(line.as_ref()) {
            names.insert(sender);
        }
    }

    names.into_iter().collect()
}
