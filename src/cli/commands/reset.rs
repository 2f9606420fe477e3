use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::persistence::PersistenceGateway;
use crate::db::kv::SqliteKvStore;
use crate::db::log::wlog_quiet;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use super::open_db;
use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

/// Hard reset: clears the stored workouts without going through the store.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { force } = cmd {
        if !*force && !ask_confirmation("Delete ALL logged workouts? This action is irreversible.")
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let pool = open_db(cfg)?;
        let mut gateway = PersistenceGateway::new(SqliteKvStore::new(&pool.conn));
        gateway.reset()?;

        wlog_quiet(&pool.conn, "reset", "workouts", "All workouts removed");
        success("All workouts removed. Restart rworkoutlog to begin with an empty list.");
    }

    Ok(())
}
