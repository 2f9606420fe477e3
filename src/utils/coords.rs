//! Parsing of "lat,lng" coordinate strings.

use crate::errors::{AppError, AppResult};
use crate::models::Coordinates;
use regex::Regex;
use std::sync::OnceLock;

fn coords_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*\[?\s*(-?\d+(?:\.\d+)?)\s*[,;\s]\s*(-?\d+(?:\.\d+)?)\s*\]?\s*$")
            .expect("valid coordinate pattern")
    })
}

/// Parse `"51.5,-0.12"` (also `"51.5 -0.12"` or `"[51.5, -0.12]"`).
///
/// Latitude must be within ±90 and longitude within ±180.
pub fn parse_coordinates(s: &str) -> AppResult<Coordinates> {
    let caps = coords_re()
        .captures(s)
        .ok_or_else(|| AppError::InvalidCoordinates(format!("'{}' (expected LAT,LNG)", s)))?;

    let lat: f64 = caps[1]
        .parse()
        .map_err(|_| AppError::InvalidCoordinates(s.to_string()))?;
    let lng: f64 = caps[2]
        .parse()
        .map_err(|_| AppError::InvalidCoordinates(s.to_string()))?;

    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        return Err(AppError::InvalidCoordinates(format!(
            "'{}' is out of range",
            s
        )));
    }

    Ok(Coordinates::new(lat, lng))
}
