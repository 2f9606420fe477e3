pub mod geolocation;
pub mod messages;
pub mod terminal;

pub use geolocation::FixedPosition;
pub use terminal::{TerminalMap, TerminalView};
