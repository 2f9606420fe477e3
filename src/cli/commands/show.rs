use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::controller::AppEvent;
use crate::errors::AppResult;

use super::{build_controller, geolocation, open_db, start_quietly};

/// Center the map on a workout. An unknown id does nothing.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let geo = geolocation(cfg)?;
        let pool = open_db(cfg)?;
        let mut controller = build_controller(&pool, cfg, false);
        start_quietly(&mut controller, &geo)?;

        controller.handle(AppEvent::ListItemClicked(id.trim().to_string()))?;
    }

    Ok(())
}
