/// ANSI color helper utilities for terminal output.
use crate::models::WorkoutType;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

/// Running → green bar, cycling → yellow bar (same palette as the map popups).
pub fn color_for_type(kind: WorkoutType) -> &'static str {
    match kind {
        WorkoutType::Running => GREEN,
        WorkoutType::Cycling => YELLOW,
    }
}
