use super::{DayRecord, WeekRecord};
use serde::Serialize;

/// One row of the detail table.
///
/// Rendering and export consume this tagged variant instead of sniffing
/// blank fields to tell summary rows apart from day rows.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportRow {
    Day(DayRecord),
    WeekSummary(WeekRecord),
}

impl ReportRow {
    pub fn is_summary(&self) -> bool {
        matches!(self, ReportRow::WeekSummary(_))
    }
}
