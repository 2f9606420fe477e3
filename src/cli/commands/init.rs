use crate::config::Config;
use crate::db::log::wlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

use crate::cli::parser::Cli;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database and its schema
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;

    println!("⚙️  Initializing rWorkoutlog…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_path);

    let pool = DbPool::open_ready(&db_path)?;

    println!("✅ Database initialized at {}", &db_path);

    wlog_quiet(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    );

    println!("🎉 rWorkoutlog initialization completed!");
    Ok(())
}
