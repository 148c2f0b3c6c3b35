use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::analysis::{AnalysisOptions, run_analysis};
use crate::core::report::weekly_grid;
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};
use crate::utils::formatting::format_delta;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Grid {
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

        // The grid is indexed by week only, so it reads for one person.
        let mut names: Vec<&str> = days.iter().map(|d| d.name.as_str()).collect();
        names.dedup();
        if names.len() > 1 {
            warning(format!(
                "Several senders match ({}); pick one with --person.",
                names.join(", ")
            ));
            return Ok(());
        }

        let grid = weekly_grid(&days);

        header(format!("주간 요약 — {}", names[0]));
        let mut table = Table::new(vec!["주차", "월", "화", "수", "목", "금", "주간합계"]);
        for week in &grid {
            let mut row = vec![week.week_start.format("%Y-%m-%d").to_string()];
            for cell in &week.cells {
                row.push(cell.map(format_delta).unwrap_or_default());
            }
            row.push(format_delta(week.total));
            table.add_row(row);
        }
        print!("{}", table.render());
    }
    Ok(())
}
