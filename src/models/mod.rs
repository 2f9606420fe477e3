pub mod coordinates;
pub mod workout;
pub mod workout_type;

pub use coordinates::Coordinates;
pub use workout::{WorkoutKind, WorkoutRecord};
pub use workout_type::WorkoutType;
