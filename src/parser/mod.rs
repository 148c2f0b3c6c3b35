pub mod context;
pub mod patterns;
pub mod scan;

pub use context::ScanContext;
pub use patterns::{LineKind, LogPatterns, Meridiem};
pub use scan::{ScanFilter, distinct_senders, read_log, scan_lines};
