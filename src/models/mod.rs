pub mod day;
pub mod event;
pub mod row;
pub mod week;

pub use day::{DayRecord, DayStatus};
pub use event::AttendanceEvent;
pub use row::ReportRow;
pub use week::WeekRecord;
