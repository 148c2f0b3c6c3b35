//! Unified application error type.
//! All modules (parser, core, cli, export) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Start boundary must be a Monday, got {0}")]
    NotMonday(String),

    #[error("End boundary {end} is before start boundary {start}")]
    InvertedRange { start: String, end: String },

    #[error("Invalid pattern in configuration: {0}")]
    InvalidPattern(#[from] regex::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
