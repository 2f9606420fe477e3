use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::print_log;
use crate::errors::AppResult;

use super::open_db;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let pool = open_db(cfg)?;
        print_log(&pool.conn)?;
    }

    Ok(())
}
