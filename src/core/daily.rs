//! Daily aggregation: reduce each person-date's events to a clock-in /
//! clock-out pair.
//!
//! Timestamps are message-send times, not punch events, so the extremes
//! approximate first-seen/last-seen presence: earliest = clock-in, latest =
//! clock-out. A single event is ambiguous and is tagged by its text marker.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::config::Config;
use crate::core::halfday::HalfDayDetector;
use crate::models::{AttendanceEvent, DayRecord, DayStatus};

/// Configured marker words that disambiguate a single-event day.
#[derive(Debug, Clone)]
pub struct StatusMarkers {
    pub clock_in: String,
    pub clock_out: String,
}

impl StatusMarkers {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            clock_in: cfg.clock_in_marker.clone(),
            clock_out: cfg.clock_out_marker.clone(),
        }
    }

    /// Which side a lone event belongs to. An explicit clock-in word wins,
    /// then an explicit clock-out word; a markerless message counts as
    /// clock-in.
    fn lone_event_status(&self, text: &str) -> DayStatus {
        if text.contains(&self.clock_in) {
            DayStatus::InOnly
        } else if text.contains(&self.clock_out) {
            DayStatus::OutOnly
        } else {
            DayStatus::InOnly
        }
    }
}

/// Group events by (person, date) and reduce each group to a DayRecord.
///
/// Output is ordered by person name, then date ascending. A person-date
/// with zero events simply produces no record.
pub fn build_day_records(
    events: Vec<AttendanceEvent>,
    detector: &HalfDayDetector,
    markers: &StatusMarkers,
) -> Vec<DayRecord> {
    let mut groups: BTreeMap<(String, NaiveDate), Vec<AttendanceEvent>> = BTreeMap::new();

    for ev in events {
        groups
            .entry((ev.name.clone(), ev.date))
            .or_default()
            .push(ev);
    }

    groups
        .into_values()
        .map(|group| reduce_group(group, detector, markers))
        .collect()
}

fn reduce_group(
    mut group: Vec<AttendanceEvent>,
    detector: &HalfDayDetector,
    markers: &StatusMarkers,
) -> DayRecord {
    group.sort_by_key(|e| e.timestamp());

    let joined = group
        .iter()
        .map(|e| e.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let (standard, suffix) = detector.resolve(&joined);

    let first = &group[0];
    let name = first.name.clone();
    let date = first.date;
    let weekday = first.weekday;

    if group.len() >= 2 {
        let last = group.last().unwrap_or(first);
        let worked = (last.timestamp() - first.timestamp()).num_minutes();

        return DayRecord {
            name,
            date,
            weekday,
            clock_in: Some(first.time),
            clock_out: Some(last.time),
            worked: Some(worked),
            standard,
            suffix,
            status: DayStatus::Complete,
        };
    }

    // Single event: the configured marker words decide which side was
    // observed.
    let status = markers.lone_event_status(&first.text);
    let is_out = status == DayStatus::OutOnly;
    DayRecord {
        name,
        date,
        weekday,
        clock_in: (!is_out).then_some(first.time),
        clock_out: is_out.then_some(first.time),
        worked: None,
        standard,
        suffix,
        status,
    }
}
