use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::Serialize;

/// How much of the clock-in/clock-out pair was observed for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DayStatus {
    /// Both extremes observed; worked minutes are meaningful.
    Complete,
    /// Only a clock-in style event was seen (출근만).
    InOnly,
    /// Only a clock-out style event was seen (퇴근만).
    OutOnly,
}

impl DayStatus {
    /// Korean status word shown in the delta column for partial days.
    pub fn label(&self) -> &'static str {
        match self {
            DayStatus::Complete => "",
            DayStatus::InOnly => "출근만",
            DayStatus::OutOnly => "퇴근만",
        }
    }
}

/// One person-date reduced to an inferred clock-in/clock-out pair.
///
/// `standard` is resolved per day (half-day markers lower it), so the
/// delta of two complete days with identical spans can differ.
#[derive(Debug, Clone, Serialize)]
pub struct DayRecord {
    pub name: String,
    pub date: NaiveDate,
    #[serde(skip)]
    pub weekday: Weekday,
    pub clock_in: Option<NaiveTime>,
    pub clock_out: Option<NaiveTime>,
    /// Whole minutes between clock-in and clock-out; absent for partial days.
    pub worked: Option<i64>,
    /// Expected minutes for this day after half-day adjustment.
    pub standard: i64,
    /// Display suffix from the half-day detector, e.g. " (반차)".
    pub suffix: String,
    pub status: DayStatus,
}

impl DayRecord {
    pub fn delta(&self) -> Option<i64> {
        self.worked.map(|w| w - self.standard)
    }

    pub fn clock_in_str(&self) -> String {
        self.clock_in
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_default()
    }

    pub fn clock_out_str(&self) -> String {
        self.clock_out
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_default()
    }
}
