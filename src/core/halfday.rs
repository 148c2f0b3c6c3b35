//! Half-day / quarter-day marker detection.
//!
//! The markers live in free-text chat messages, so matching is fuzzy and
//! whitespace-tolerant (`반 반차` still counts). The vocabulary comes from
//! the configuration; aggregation only sees the resolved minutes and the
//! display suffix.

use crate::config::Config;
use crate::errors::AppResult;
use regex::Regex;

pub struct HalfDayDetector {
    quarter: Regex,
    half: Regex,
    quarter_suffix: String,
    half_suffix: String,
    full_minutes: i64,
    half_minutes: i64,
    quarter_minutes: i64,
}

impl HalfDayDetector {
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        Ok(Self {
            quarter: loose_pattern(&cfg.quarter_day_marker)?,
            half: loose_pattern(&cfg.half_day_marker)?,
            quarter_suffix: format!(" ({})", cfg.quarter_day_marker),
            half_suffix: format!(" ({})", cfg.half_day_marker),
            full_minutes: cfg.standard_minutes,
            half_minutes: cfg.half_day_minutes,
            quarter_minutes: cfg.quarter_day_minutes,
        })
    }

    /// Override the full-day standard (CLI `--standard` flag).
    pub fn with_full_minutes(mut self, minutes: i64) -> Self {
        self.full_minutes = minutes;
        self
    }

    /// Resolve the expected minutes for one person-date from the joined
    /// message texts.
    ///
    /// The quarter-day marker contains the half-day marker as a substring,
    /// so it must be checked first.
    pub fn resolve(&self, joined_texts: &str) -> (i64, String) {
        if self.quarter.is_match(joined_texts) {
            return (self.quarter_minutes, self.quarter_suffix.clone());
        }
        if self.half.is_match(joined_texts) {
            return (self.half_minutes, self.half_suffix.clone());
        }
        (self.full_minutes, String::new())
    }
}

/// Build a pattern tolerating whitespace between the marker's characters.
fn loose_pattern(marker: &str) -> Result<Regex, regex::Error> {
    let src = marker
        .chars()
        .map(|c| regex::escape(&c.to_string()))
        .collect::<Vec<_>>()
        .join(r"\s*");
    Regex::new(&src)
}
