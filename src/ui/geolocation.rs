use crate::core::ports::Geolocation;
use crate::errors::GeolocationError;
use crate::models::Coordinates;

/// Position provider answering with a known location (CLI flag or config),
/// or failing when none was given.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPosition {
    position: Option<Coordinates>,
}

impl FixedPosition {
    pub fn new(position: Option<Coordinates>) -> Self {
        Self { position }
    }
}

impl Geolocation for FixedPosition {
    fn current_position(&self) -> Result<Coordinates, GeolocationError> {
        self.position.ok_or(GeolocationError::Unavailable)
    }
}
