//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::fmt;
use std::io;
use thiserror::Error;

/// Form field checked by the workout factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Distance,
    Duration,
    Cadence,
    Elevation,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Distance => "distance",
            Field::Duration => "duration",
            Field::Cadence => "cadence",
            Field::Elevation => "elevation",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(Field::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Rejected form input. No record is built when this is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("One or more of the inputs is not a positive number! (not a number: {})", join_fields(.fields))]
    NotFinite { fields: Vec<Field> },

    #[error("One or more of the inputs is not a positive number! (not positive: {})", join_fields(.fields))]
    NotPositive { fields: Vec<Field> },

    #[error("Unknown workout type '{0}'. Use 'running' or 'cycling'.")]
    UnknownType(String),
}

impl ValidationError {
    /// Fields that failed the check (empty for an unknown type).
    pub fn fields(&self) -> &[Field] {
        match self {
            ValidationError::NotFinite { fields } | ValidationError::NotPositive { fields } => {
                fields
            }
            ValidationError::UnknownType(_) => &[],
        }
    }
}

/// Outcome of a failed position lookup.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeolocationError {
    #[error("Could not get your position")]
    Unavailable,
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Parsing / validation errors
    // ---------------------------
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Geolocation(#[from] GeolocationError),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
