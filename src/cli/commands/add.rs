use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::controller::{AppEvent, EventOutcome, FormFields};
use crate::db::log::wlog_quiet;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::parse_coordinates;

use super::{build_controller, geolocation, open_db, start_quietly};

/// Log one workout: pick the location, then submit the form.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        workout_type,
        at,
        distance,
        duration,
        cadence,
        elevation,
    } = cmd
    {
        let at = parse_coordinates(at)?;
        let geo = geolocation(cfg)?;

        let pool = open_db(cfg)?;
        let mut controller = build_controller(&pool, cfg, false);
        start_quietly(&mut controller, &geo)?;

        controller.handle(AppEvent::LocationPicked(at))?;

        let fields = FormFields {
            workout_type: workout_type.clone(),
            distance: distance.clone(),
            duration: duration.clone(),
            cadence: cadence.clone().unwrap_or_default(),
            elevation: elevation.clone().unwrap_or_default(),
        };

        match controller.handle(AppEvent::FormSubmitted(fields))? {
            EventOutcome::Logged(id) => {
                let description = controller
                    .store()
                    .find(&id)
                    .map(|r| r.description().to_string())
                    .unwrap_or_default();

                wlog_quiet(&pool.conn, "add", &id, &description);
                success(format!("Workout logged: {} (id {}).", description, id));
            }
            EventOutcome::Rejected(e) => return Err(AppError::Validation(e)),
            other => {
                return Err(AppError::Other(format!(
                    "unexpected form outcome: {:?}",
                    other
                )));
            }
        }
    }

    Ok(())
}
