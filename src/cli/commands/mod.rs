pub mod add;
pub mod config;
pub mod init;
pub mod list;
pub mod log;
pub mod reset;
pub mod session;
pub mod show;

use crate::config::Config;
use crate::core::controller::InteractionController;
use crate::core::persistence::PersistenceGateway;
use crate::db::kv::SqliteKvStore;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::{FixedPosition, TerminalMap, TerminalView};

/// Controller wired to the terminal and to the SQLite database.
pub type CliController<'c> = InteractionController<TerminalMap, TerminalView, SqliteKvStore<'c>>;

pub(crate) fn open_db(cfg: &Config) -> AppResult<DbPool> {
    DbPool::open_ready(&cfg.database_path())
}

pub(crate) fn build_controller<'c>(
    pool: &'c DbPool,
    cfg: &Config,
    interactive: bool,
) -> CliController<'c> {
    InteractionController::new(
        TerminalMap::default(),
        TerminalView::new(interactive, cfg.initial_workout_type()),
        PersistenceGateway::new(SqliteKvStore::new(&pool.conn)),
        cfg.map_zoom_level,
    )
}

pub(crate) fn geolocation(cfg: &Config) -> AppResult<FixedPosition> {
    Ok(FixedPosition::new(cfg.home_coordinates()?))
}

/// Load saved workouts and locate the map without printing anything
/// except alerts; used by one-shot commands that only care about one event.
pub(crate) fn start_quietly(controller: &mut CliController<'_>, geo: &FixedPosition) -> AppResult<()> {
    controller.view_mut().set_list_muted(true);
    controller.map_mut().set_muted(true);

    controller.start();
    controller.locate(geo)?;

    controller.view_mut().set_list_muted(false);
    controller.map_mut().set_muted(false);
    Ok(())
}
