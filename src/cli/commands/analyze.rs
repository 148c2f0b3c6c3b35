use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::analysis::{AnalysisOptions, run_analysis};
use crate::core::report::detail_rows;
use crate::errors::AppResult;
use crate::export::{get_headers, row_to_cells};
use crate::ui::messages::{header, warning};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Analyze {
        log,
        from,
        to,
        person,
        standard,
    } = cmd
    {
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

        header("상세 분석 결과");
        let mut table = Table::new(get_headers());
        for row in &rows {
            table.add_row(row_to_cells(row));
        }
        print!("{}", table.render());
    }
    Ok(())
}
