use chrono::NaiveDate;
use serde::Serialize;

/// Accumulated totals for one Monday-keyed week.
#[derive(Debug, Clone, Serialize)]
pub struct WeekRecord {
    /// Monday of the week.
    pub week_start: NaiveDate,
    pub worked: i64,
    pub standard: i64,
}

impl WeekRecord {
    pub fn delta(&self) -> i64 {
        self.worked - self.standard
    }
}
