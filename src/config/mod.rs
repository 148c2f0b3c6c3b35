use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::errors::{AppError, AppResult};

/// Application configuration, stored as YAML.
///
/// Everything here has a sensible default; the config file only exists so
/// that the marker vocabulary and the date-header delimiter rule can be
/// tuned without recompiling (chat exports vary between app versions).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Expected minutes of a full workday.
    #[serde(default = "default_standard_minutes")]
    pub standard_minutes: i64,

    /// Require a dash run before the date header. Chat bodies can quote a
    /// date string without being a real header; the delimiter disambiguates.
    #[serde(default = "default_require_delimiter")]
    pub require_delimiter: bool,

    /// Minimum length of the dash run when `require_delimiter` is on.
    #[serde(default = "default_delimiter_min_run")]
    pub delimiter_min_run: usize,

    /// Word marking a clock-in message.
    #[serde(default = "default_clock_in_marker")]
    pub clock_in_marker: String,

    /// Word marking a clock-out message.
    #[serde(default = "default_clock_out_marker")]
    pub clock_out_marker: String,

    /// Word marking a half-day (expected minutes drop to `half_day_minutes`).
    #[serde(default = "default_half_day_marker")]
    pub half_day_marker: String,

    /// Word marking a quarter-day. Checked before the half-day marker since
    /// it contains it as a substring.
    #[serde(default = "default_quarter_day_marker")]
    pub quarter_day_marker: String,

    #[serde(default = "default_half_day_minutes")]
    pub half_day_minutes: i64,

    #[serde(default = "default_quarter_day_minutes")]
    pub quarter_day_minutes: i64,
}

fn default_standard_minutes() -> i64 {
    540
}
fn default_require_delimiter() -> bool {
    true
}
fn default_delimiter_min_run() -> usize {
    5
}
fn default_clock_in_marker() -> String {
    "출근".to_string()
}
fn default_clock_out_marker() -> String {
    "퇴근".to_string()
}
fn default_half_day_marker() -> String {
    "반차".to_string()
}
fn default_quarter_day_marker() -> String {
    "반반차".to_string()
}
fn default_half_day_minutes() -> i64 {
    240
}
fn default_quarter_day_minutes() -> i64 {
    420
}

impl Default for Config {
    fn default() -> Self {
        Self {
            standard_minutes: default_standard_minutes(),
            require_delimiter: default_require_delimiter(),
            delimiter_min_run: default_delimiter_min_run(),
            clock_in_marker: default_clock_in_marker(),
            clock_out_marker: default_clock_out_marker(),
            half_day_marker: default_half_day_marker(),
            quarter_day_marker: default_quarter_day_marker(),
            half_day_minutes: default_half_day_minutes(),
            quarter_day_minutes: default_quarter_day_minutes(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("kattend")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".kattend")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("kattend.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)
        } else {
            Ok(Config::default())
        }
    }

    /// Write the default configuration file, creating the directory.
    pub fn init_all() -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;

        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;

        Ok(())
    }

    /// Sanity checks for hand-edited config files.
    pub fn check(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.standard_minutes <= 0 {
            problems.push("standard_minutes must be positive".to_string());
        }
        if self.half_day_minutes > self.standard_minutes {
            problems.push("half_day_minutes exceeds standard_minutes".to_string());
        }
        if self.quarter_day_minutes > self.standard_minutes {
            problems.push("quarter_day_minutes exceeds standard_minutes".to_string());
        }
        if self.clock_in_marker.is_empty() || self.clock_out_marker.is_empty() {
            problems.push("clock-in/clock-out markers must not be empty".to_string());
        }
        if self.require_delimiter && self.delimiter_min_run == 0 {
            problems.push("delimiter_min_run must be at least 1".to_string());
        }

        problems
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_standard_workday() {
        let cfg = Config::default();
        assert_eq!(cfg.standard_minutes, 540);
        assert_eq!(cfg.half_day_minutes, 240);
        assert_eq!(cfg.quarter_day_minutes, 420);
        assert!(cfg.check().is_empty());
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let cfg: Config = serde_yaml::from_str("standard_minutes: 480\n").unwrap();
        assert_eq!(cfg.standard_minutes, 480);
        assert_eq!(cfg.clock_in_marker, "출근");
        assert!(cfg.require_delimiter);
    }

    #[test]
    fn check_flags_bad_values() {
        let mut cfg = Config::default();
        cfg.standard_minutes = 0;
        cfg.clock_in_marker.clear();
        let problems = cfg.check();
        assert!(problems.iter().any(|p| p.contains("standard_minutes")));
        assert!(problems.iter().any(|p| p.contains("markers")));
    }
}
