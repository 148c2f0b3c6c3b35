use crate::export::ExportFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for kattend
/// CLI application to turn KakaoTalk chat exports into attendance reports
#[derive(Parser)]
#[command(
    name = "kattend",
    version = env!("CARGO_PKG_VERSION"),
    about = "Parse a KakaoTalk chat-log export into clock-in/clock-out reports with daily and weekly surplus",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init,

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for invalid values")]
        check: bool,
    },

    /// List the distinct sender names found in a chat log
    People {
        /// Path to the exported chat log (UTF-8 text)
        log: PathBuf,
    },

    /// Show the detail table: one row per person-date plus weekly summaries
    Analyze {
        /// Path to the exported chat log (UTF-8 text)
        log: PathBuf,

        /// Start boundary, a Monday (YYYY-MM-DD)
        #[arg(long = "from")]
        from: String,

        /// End boundary (YYYY-MM-DD), defaults to today
        #[arg(long = "to")]
        to: Option<String>,

        /// Restrict the analysis to one sender
        #[arg(long = "person")]
        person: Option<String>,

        /// Override the full-day standard minutes (default from config, 540)
        #[arg(long = "standard")]
        standard: Option<i64>,
    },

    /// Show the compact weekly grid: Mon–Fri deltas per week
    Grid {
        /// Path to the exported chat log (UTF-8 text)
        log: PathBuf,

        /// Start boundary, a Monday (YYYY-MM-DD)
        #[arg(long = "from")]
        from: String,

        /// End boundary (YYYY-MM-DD), defaults to today
        #[arg(long = "to")]
        to: Option<String>,

        /// Sender to build the grid for (required when the log has several)
        #[arg(long = "person")]
        person: Option<String>,

        /// Override the full-day standard minutes
        #[arg(long = "standard")]
        standard: Option<i64>,
    },

    /// Export the detail table to a file
    Export {
        /// Path to the exported chat log (UTF-8 text)
        log: PathBuf,

        /// Start boundary, a Monday (YYYY-MM-DD)
        #[arg(long = "from")]
        from: String,

        /// End boundary (YYYY-MM-DD), defaults to today
        #[arg(long = "to")]
        to: Option<String>,

        /// Restrict the export to one sender
        #[arg(long = "person")]
        person: Option<String>,

        /// Override the full-day standard minutes
        #[arg(long = "standard")]
        standard: Option<i64>,

        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        /// Output file path (absolute)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite the output file without asking
        #[arg(long, short = 'f')]
        force: bool,
    },
}
