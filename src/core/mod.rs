pub mod analysis;
pub mod daily;
pub mod halfday;
pub mod report;
pub mod weekly;

pub use analysis::{AnalysisOptions, run_analysis};
pub use daily::{StatusMarkers, build_day_records};
pub use halfday::HalfDayDetector;
pub use report::{WeekGridRow, detail_rows, weekly_grid};
pub use weekly::WeeklyAggregator;
