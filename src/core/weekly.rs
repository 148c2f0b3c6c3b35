//! Weekly aggregation over day records.
//!
//! One ordered pass, Monday-keyed. Policy for incomplete days (in-only /
//! out-only): they are excluded from the accumulators entirely — neither
//! worked nor standard minutes. A missing clock-out is an observation gap,
//! not evidence of a zero-hour day. The week they fall in is still emitted.

use crate::models::{DayRecord, DayStatus, WeekRecord};
use crate::utils::date::week_start;
use chrono::NaiveDate;

/// Incremental accumulator for a single pass over date-ascending records.
#[derive(Debug, Default)]
pub struct WeeklyAggregator {
    current_start: Option<NaiveDate>,
    worked: i64,
    standard: i64,
    days_seen: u32,
}

impl WeeklyAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next day record (date ascending within one person).
    ///
    /// Returns the closed-out WeekRecord when this day starts a new week.
    pub fn observe(&mut self, day: &DayRecord) -> Option<WeekRecord> {
        let ws = week_start(day.date);

        let closed = match self.current_start {
            Some(current) if current != ws => self.take(),
            None => {
                self.current_start = Some(ws);
                None
            }
            _ => None,
        };

        if self.current_start.is_none() {
            self.current_start = Some(ws);
        }

        self.days_seen += 1;
        if day.status == DayStatus::Complete {
            self.worked += day.worked.unwrap_or(0);
            self.standard += day.standard;
        }

        closed
    }

    /// Close out the in-progress week, if it saw at least one day. Always
    /// called after the final record, so a partial current week is emitted
    /// like any other.
    pub fn finish(mut self) -> Option<WeekRecord> {
        if self.days_seen == 0 {
            return None;
        }
        self.take()
    }

    fn take(&mut self) -> Option<WeekRecord> {
        let start = self.current_start?;
        let record = WeekRecord {
            week_start: start,
            worked: self.worked,
            standard: self.standard,
        };
        self.current_start = None;
        self.worked = 0;
        self.standard = 0;
        self.days_seen = 0;
        Some(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveTime};

    fn day(date: &str, worked: Option<i64>, status: DayStatus) -> DayRecord {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        DayRecord {
            name: "Kim".to_string(),
            date,
            weekday: date.weekday(),
            clock_in: Some(NaiveTime::from_hms_opt(9, 0, 0).unwrap()),
            clock_out: worked.map(|_| NaiveTime::from_hms_opt(18, 0, 0).unwrap()),
            worked,
            standard: 540,
            suffix: String::new(),
            status,
        }
    }

    fn run(days: &[DayRecord]) -> Vec<WeekRecord> {
        let mut agg = WeeklyAggregator::new();
        let mut weeks = Vec::new();
        for d in days {
            if let Some(w) = agg.observe(d) {
                weeks.push(w);
            }
        }
        if let Some(w) = agg.finish() {
            weeks.push(w);
        }
        weeks
    }

    #[test]
    fn single_week_emits_once_at_end() {
        let days = vec![
            day("2025-09-01", Some(555), DayStatus::Complete),
            day("2025-09-02", Some(540), DayStatus::Complete),
        ];
        let weeks = run(&days);
        assert_eq!(weeks.len(), 1);
        assert_eq!(
            weeks[0].week_start,
            NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
        );
        assert_eq!(weeks[0].worked, 1095);
        assert_eq!(weeks[0].standard, 1080);
        assert_eq!(weeks[0].delta(), 15);
    }

    #[test]
    fn week_boundary_splits_accumulation() {
        // Monday through the following Monday: two weeks, each isolated.
        let days = vec![
            day("2025-09-01", Some(540), DayStatus::Complete),
            day("2025-09-05", Some(600), DayStatus::Complete),
            day("2025-09-08", Some(480), DayStatus::Complete),
        ];
        let weeks = run(&days);
        assert_eq!(weeks.len(), 2);
        assert_eq!(weeks[0].worked, 1140);
        assert_eq!(weeks[0].delta(), 60);
        assert_eq!(
            weeks[1].week_start,
            NaiveDate::from_ymd_opt(2025, 9, 8).unwrap()
        );
        assert_eq!(weeks[1].worked, 480);
        assert_eq!(weeks[1].delta(), -60);
    }

    #[test]
    fn incomplete_days_are_excluded_from_both_sides() {
        let days = vec![
            day("2025-09-01", Some(555), DayStatus::Complete),
            day("2025-09-02", None, DayStatus::InOnly),
            day("2025-09-03", None, DayStatus::OutOnly),
        ];
        let weeks = run(&days);
        assert_eq!(weeks.len(), 1);
        assert_eq!(weeks[0].worked, 555);
        assert_eq!(weeks[0].standard, 540);
    }

    #[test]
    fn week_of_only_incomplete_days_still_emits() {
        let days = vec![day("2025-09-02", None, DayStatus::InOnly)];
        let weeks = run(&days);
        assert_eq!(weeks.len(), 1);
        assert_eq!(weeks[0].worked, 0);
        assert_eq!(weeks[0].standard, 0);
    }

    #[test]
    fn no_days_emits_nothing() {
        assert!(run(&[]).is_empty());
    }

    #[test]
    fn one_summary_per_distinct_week_start() {
        let days = vec![
            day("2025-09-01", Some(540), DayStatus::Complete),
            day("2025-09-03", Some(540), DayStatus::Complete),
            day("2025-09-10", Some(540), DayStatus::Complete),
            day("2025-09-17", Some(540), DayStatus::Complete),
        ];
        let weeks = run(&days);
        let starts: Vec<_> = weeks.iter().map(|w| w.week_start).collect();
        assert_eq!(
            starts,
            vec![
                NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 9, 8).unwrap(),
                NaiveDate::from_ymd_opt(2025, 9, 15).unwrap(),
            ]
        );
    }
}
