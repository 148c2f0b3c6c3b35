use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::parser::{LogPatterns, distinct_senders, read_log};
use crate::ui::messages::{info, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::People { log } = cmd {
        let patterns = LogPatterns::from_config(cfg)?;
        let lines = read_log(log)?;
        let names = distinct_senders(&lines, &patterns);

        if names.is_empty() {
            warning("No message lines recognized in this log.");
            return Ok(());
        }

        info(format!("{} sender(s) found:", names.len()));
        for name in names {
            println!("  {}", name);
        }
    }
    Ok(())
}
