// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, Write};
use std::path::Path;

/// Guard against clobbering an existing output file.
///
/// A missing file or `--force` passes straight through; otherwise the user
/// is prompted, and anything but an explicit yes keeps the file untouched.
pub fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("Output file '{}' already exists.", path.display()));

    print!("Overwrite it? [y/N] ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => {
            info("Overwriting existing file.");
            Ok(())
        }
        _ => Err(AppError::Export(
            "cancelled: existing file left untouched".to_string(),
        )),
    }
}
