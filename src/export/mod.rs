mod fs_utils;
mod json_csv;
mod model;
mod xlsx;

pub use fs_utils::ensure_writable;
pub use model::{get_headers, row_to_cells};

use crate::errors::AppResult;
use crate::models::ReportRow;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for all export formats.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Xlsx,
    Csv,
    Json,
}

/// Serialize the detail table to the requested format.
pub fn export_rows(rows: &[ReportRow], format: &ExportFormat, path: &Path) -> AppResult<()> {
    match format {
        ExportFormat::Xlsx => xlsx::export_xlsx(rows, path),
        ExportFormat::Csv => json_csv::export_csv(rows, path),
        ExportFormat::Json => json_csv::export_json(rows, path),
    }
}
