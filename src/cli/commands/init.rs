use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle() -> AppResult<()> {
    Config::init_all()?;
    success(format!("Config file: {:?}", Config::config_file()));
    Ok(())
}
