// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{get_headers, row_to_cells};
use crate::export::notify_export_success;
use crate::models::ReportRow;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// XLSX export with styling and auto column widths. One sheet, header row,
/// plain values only (no formulas).
pub(crate) fn export_xlsx(rows: &[ReportRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // ---------------------------
    // Empty dataset
    // ---------------------------
    if rows.is_empty() {
        worksheet
            .write(0, 0, "No data available")
            .map_err(to_export_error)?;
        workbook.save(path_str(path)?).map_err(to_export_error)?;
        notify_export_success("XLSX (empty dataset)", path);
        return Ok(());
    }

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    // ---------------------------
    // Column widths
    // ---------------------------
    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);
    let summary_bg = Color::RGB(0xF0F0F0);

    // ---------------------------
    // Data rows
    // ---------------------------
    for (row_index, report_row) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;

        // Week-summary rows get their own fill; day rows alternate bands.
        let fmt = if report_row.is_summary() {
            Format::new()
                .set_bold()
                .set_background_color(summary_bg)
                .set_pattern(FormatPattern::Solid)
                .set_border(FormatBorder::Thin)
        } else {
            let band_color = if row_index % 2 == 0 { band1 } else { band2 };
            Format::new()
                .set_background_color(band_color)
                .set_pattern(FormatPattern::Solid)
                .set_border(FormatBorder::Thin)
        };

        let values = row_to_cells(report_row);

        for (col, value) in values.iter().enumerate() {
            worksheet
                .write_with_format(row, col as u16, value.as_str(), &fmt)
                .map_err(to_export_error)?;

            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    // ---------------------------
    // Set column widths
    // ---------------------------
    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path_str(path)?).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}

fn path_str(path: &Path) -> AppResult<&str> {
    path.to_str()
        .ok_or_else(|| AppError::Export("invalid path".to_string()))
}
