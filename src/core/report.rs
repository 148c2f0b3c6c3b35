//! Assembles the mixed day/week-summary row sequence and the compact
//! weekly grid from day records.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::core::weekly::WeeklyAggregator;
use crate::models::{DayRecord, ReportRow};
use crate::utils::date::week_start;

/// Build the detail table: day rows in (person, date) order with a
/// week-summary row after each week, including the final in-progress one.
///
/// Input must already be sorted by person then date ascending, which is
/// what [`crate::core::build_day_records`] produces.
pub fn detail_rows(days: &[DayRecord]) -> Vec<ReportRow> {
    let mut rows = Vec::new();
    let mut i = 0;

    while i < days.len() {
        let person = &days[i].name;
        let mut agg = WeeklyAggregator::new();

        while i < days.len() && &days[i].name == person {
            if let Some(week) = agg.observe(&days[i]) {
                rows.push(ReportRow::WeekSummary(week));
            }
            rows.push(ReportRow::Day(days[i].clone()));
            i += 1;
        }

        if let Some(week) = agg.finish() {
            rows.push(ReportRow::WeekSummary(week));
        }
    }

    rows
}

/// One row of the compact weekly grid: Mon–Fri delta cells plus the weekly
/// total. `None` cells mean no record (or an incomplete one) for that day.
#[derive(Debug, Clone, Serialize)]
pub struct WeekGridRow {
    pub week_start: NaiveDate,
    pub cells: [Option<i64>; 5],
    pub total: i64,
}

/// Build the weekly grid for one person's day records (date ascending).
pub fn weekly_grid(days: &[DayRecord]) -> Vec<WeekGridRow> {
    let mut rows: Vec<WeekGridRow> = Vec::new();

    for day in days {
        let ws = week_start(day.date);

        if rows.last().map(|r| r.week_start) != Some(ws) {
            rows.push(WeekGridRow {
                week_start: ws,
                cells: [None; 5],
                total: 0,
            });
        }

        let col = day.weekday.num_days_from_monday() as usize;
        if let (Some(row), Some(delta), true) = (rows.last_mut(), day.delta(), col < 5) {
            row.cells[col] = Some(delta);
            row.total += delta;
        }
    }

    rows
}
