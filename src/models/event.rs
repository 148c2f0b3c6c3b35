use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::Serialize;

/// A single timestamped chat message attributed to a date context.
///
/// Created per matched message line, immutable afterwards. The collection
/// lives for one analysis run; a new input file discards it entirely.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceEvent {
    pub name: String,
    pub date: NaiveDate,
    #[serde(skip)]
    pub weekday: Weekday,
    pub time: NaiveTime,
    pub text: String,
}

impl AttendanceEvent {
    pub fn timestamp(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}
