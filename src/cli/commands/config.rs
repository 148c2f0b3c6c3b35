use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            println!("{}", cfg.to_yaml()?);
        }

        if *check {
            let problems = cfg.check();
            if problems.is_empty() {
                success("Configuration OK");
            } else {
                for p in problems {
                    warning(p);
                }
            }
        }
    }
    Ok(())
}
