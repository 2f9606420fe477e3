use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};

use super::{build_controller, geolocation, open_db};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { map, json } = cmd {
        let pool = open_db(cfg)?;
        let mut controller = build_controller(&pool, cfg, false);

        if *json {
            let raw = controller.gateway().raw()?;
            println!("{}", raw.unwrap_or_else(|| "[]".to_string()));
            return Ok(());
        }

        header("Workouts");
        let count = controller.start();

        if count == 0 {
            info("No workouts logged yet. Use `rworkoutlog add` or `rworkoutlog session`.");
        }

        if *map {
            let geo = geolocation(cfg)?;
            controller.locate(&geo)?;
        }
    }

    Ok(())
}
