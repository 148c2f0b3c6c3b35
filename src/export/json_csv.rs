// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{get_headers, row_to_cells};
use crate::export::notify_export_success;
use crate::models::ReportRow;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// JSON export, pretty-printed. Rows keep their tag (`day` /
/// `week_summary`) so consumers never have to sniff blank fields.
pub(crate) fn export_json(rows: &[ReportRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(rows)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// CSV export of the flattened cell table, header row included.
pub(crate) fn export_csv(rows: &[ReportRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    wtr.write_record(get_headers())
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    for row in rows {
        wtr.write_record(row_to_cells(row))
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    notify_export_success("CSV", path);
    Ok(())
}
