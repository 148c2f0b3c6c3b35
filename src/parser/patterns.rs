//! Line classification for exported KakaoTalk chat logs.
//!
//! Two line syntaxes matter; everything else in the export (system
//! messages, photos, emoticons) is noise and classifies to `None`.
//!
//! ```text
//! --------------- 2025년 9월 1일 월요일 ---------------
//! [Kim] [오전 8:55] 출근
//! ```

use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::date::weekday_from_korean;
use chrono::{NaiveDate, Weekday};
use regex::Regex;

/// Literal Korean AM/PM tokens from the message header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    /// 오전
    Am,
    /// 오후
    Pm,
}

impl Meridiem {
    /// 12-hour to 24-hour conversion.
    /// 오전 12 → 0, 오후 h≠12 → h+12, everything else unchanged.
    pub fn to_hour24(self, hour: u32) -> u32 {
        match (self, hour) {
            (Meridiem::Am, 12) => 0,
            (Meridiem::Pm, h) if h != 12 => h + 12,
            (_, h) => h,
        }
    }
}

/// Classification result for one raw line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    DateHeader {
        date: NaiveDate,
        weekday: Weekday,
    },
    Message {
        sender: String,
        meridiem: Meridiem,
        hour: u32,
        minute: u32,
        text: String,
    },
}

/// Compiled patterns, built once per run from the configuration.
pub struct LogPatterns {
    date_header: Regex,
    message: Regex,
}

impl LogPatterns {
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        // A chat body can quote a date string without being a header; the
        // dash-run prefix disambiguates. The requirement is configurable.
        let date_src = if cfg.require_delimiter {
            format!(
                r"-{{{},}}\s*(\d{{4}})년 (\d{{1,2}})월 (\d{{1,2}})일 ([월화수목금토일])요일",
                cfg.delimiter_min_run
            )
        } else {
            r"(\d{4})년 (\d{1,2})월 (\d{1,2})일 ([월화수목금토일])요일".to_string()
        };

        Ok(Self {
            date_header: Regex::new(&date_src)?,
            message: Regex::new(r"^\[(.+?)\] \[(오전|오후) (\d{1,2}):(\d{2})\] (.*)$")?,
        })
    }

    /// Classify one raw line. Lines matching neither syntax, and headers
    /// carrying an impossible calendar date, return `None`.
    pub fn classify(&self, line: &str) -> Option<LineKind> {
        if let Some(caps) = self.date_header.captures(line) {
            let year: i32 = caps[1].parse().ok()?;
            let month: u32 = caps[2].parse().ok()?;
            let day: u32 = caps[3].parse().ok()?;
            let weekday = weekday_from_korean(caps[4].chars().next()?)?;

            let date = NaiveDate::from_ymd_opt(year, month, day)?;
            return Some(LineKind::DateHeader { date, weekday });
        }

        if let Some(caps) = self.message.captures(line) {
            let meridiem = match &caps[2] {
                "오전" => Meridiem::Am,
                _ => Meridiem::Pm,
            };
            let hour: u32 = caps[3].parse().ok()?;
            let minute: u32 = caps[4].parse().ok()?;
            if hour == 0 || hour > 12 || minute > 59 {
                return None;
            }

            return Some(LineKind::Message {
                sender: caps[1].to_string(),
                meridiem,
                hour,
                minute,
                text: caps[5].to_string(),
            });
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns() -> LogPatterns {
        LogPatterns::from_config(&Config::default()).unwrap()
    }

    #[test]
    fn classifies_date_header() {
        let kind = patterns()
            .classify("--------------- 2025년 9월 1일 월요일 ---------------")
            .unwrap();
        assert_eq!(
            kind,
            LineKind::DateHeader {
                date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
                weekday: Weekday::Mon,
            }
        );
    }

    #[test]
    fn classifies_message_line() {
        let kind = patterns().classify("[Kim] [오전 8:55] 출근").unwrap();
        assert_eq!(
            kind,
            LineKind::Message {
                sender: "Kim".to_string(),
                meridiem: Meridiem::Am,
                hour: 8,
                minute: 55,
                text: "출근".to_string(),
            }
        );
    }

    #[test]
    fn ignores_noise_lines() {
        let p = patterns();
        assert_eq!(p.classify("Kim님이 들어왔습니다."), None);
        assert_eq!(p.classify("사진"), None);
        assert_eq!(p.classify(""), None);
    }

    #[test]
    fn quoted_date_without_delimiter_is_not_a_header() {
        let p = patterns();
        assert_eq!(p.classify("회의는 2025년 9월 1일 월요일에 있어요"), None);
    }

    #[test]
    fn delimiter_requirement_is_configurable() {
        let mut cfg = Config::default();
        cfg.require_delimiter = false;
        let p = LogPatterns::from_config(&cfg).unwrap();
        assert!(matches!(
            p.classify("2025년 9월 1일 월요일"),
            Some(LineKind::DateHeader { .. })
        ));
    }

    #[test]
    fn rejects_impossible_calendar_dates() {
        let p = patterns();
        assert_eq!(p.classify("----- 2025년 2월 30일 월요일"), None);
    }

    #[test]
    fn meridiem_conversion_table() {
        assert_eq!(Meridiem::Am.to_hour24(12), 0);
        assert_eq!(Meridiem::Am.to_hour24(8), 8);
        assert_eq!(Meridiem::Pm.to_hour24(12), 12);
        assert_eq!(Meridiem::Pm.to_hour24(6), 18);
    }
}
