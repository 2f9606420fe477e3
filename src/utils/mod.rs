pub mod colors;
pub mod coords;
pub mod formatting;
pub mod path;

pub use coords::parse_coordinates;
