use chrono::{NaiveDate, Weekday};

/// Scan state carried through a single forward pass over the log.
///
/// Holds the most recently seen date header. Explicit state object rather
/// than module-level mutability, so per-line behavior is testable.
#[derive(Debug, Default, Clone)]
pub struct ScanContext {
    current: Option<(NaiveDate, Weekday)>,
}

impl ScanContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite both date and weekday on a date-header match.
    pub fn advance(&mut self, date: NaiveDate, weekday: Weekday) {
        self.current = Some((date, weekday));
    }

    /// Active context, if any header has been seen yet. Persists across
    /// intervening non-matching lines until the next header.
    pub fn active(&self) -> Option<(NaiveDate, Weekday)> {
        self.current
    }
}
