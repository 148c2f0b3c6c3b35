use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::analysis::{AnalysisOptions, run_analysis};
use crate::core::report::detail_rows;
use crate::errors::{AppError, AppResult};
use crate::export::{ensure_writable, export_rows};
use crate::ui::messages::warning;
use std::io;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        log,
        from,
        to,
        person,
        standard,
        format,
        file,
        force,
    } = cmd
    {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, *force)?;

        let opts = AnalysisOptions {
            from: from.clone(),
            to: to.clone(),
            person: person.clone(),
            standard: *standard,
        };

        let days = run_analysis(log, &opts, cfg)?;

        if days.is_empty() {
            warning("No matching records for the selected scope.");
            return Ok(());
        }

        let rows = detail_rows(&days);
        export_rows(&rows, format, path)?;
    }
    Ok(())
}
