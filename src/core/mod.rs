pub mod controller;
pub mod factory;
pub mod persistence;
pub mod ports;
pub mod store;

pub use controller::{AppEvent, ControllerState, EventOutcome, FormFields, InteractionController};
pub use factory::{WorkoutExtras, WorkoutFactory};
pub use persistence::{PersistenceGateway, WORKOUTS_KEY};
pub use store::WorkoutStore;
