use super::{coordinates::Coordinates, workout_type::WorkoutType};
use chrono::{DateTime, Datelike, Local};

/// Variant payload of a workout, with its derived metric.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkoutKind {
    Running {
        cadence_spm: f64,
        /// duration_min / distance_km
        pace_min_per_km: f64,
    },
    Cycling {
        /// Only checked for finiteness, may be negative.
        elevation_gain_m: f64,
        /// distance_km / duration_min
        speed_km_per_h: f64,
    },
}

impl WorkoutKind {
    pub fn workout_type(&self) -> WorkoutType {
        match self {
            WorkoutKind::Running { .. } => WorkoutType::Running,
            WorkoutKind::Cycling { .. } => WorkoutType::Cycling,
        }
    }
}

/// A logged workout. Immutable once built: fields are only readable.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutRecord {
    id: String,
    created_at: DateTime<Local>,
    coords: Coordinates,
    distance_km: f64,
    duration_min: f64,
    description: String,
    kind: WorkoutKind,
}

impl WorkoutRecord {
    /// Assemble a record from already-known values.
    /// Used by the factory (fresh values) and by the persistence layer (stored values).
    pub(crate) fn from_parts(
        id: String,
        created_at: DateTime<Local>,
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        description: String,
        kind: WorkoutKind,
    ) -> Self {
        Self {
            id,
            created_at,
            coords,
            distance_km,
            duration_min,
            description,
            kind,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    pub fn coords(&self) -> Coordinates {
        self.coords
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn duration_min(&self) -> f64 {
        self.duration_min
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> &WorkoutKind {
        &self.kind
    }

    pub fn workout_type(&self) -> WorkoutType {
        self.kind.workout_type()
    }

    /// Text shown in the map popup: "<icon> <description>".
    pub fn popup_content(&self) -> String {
        format!("{} {}", self.workout_type().icon(), self.description)
    }
}

/// Last 10 digits of the creation timestamp in milliseconds.
///
/// Two workouts created within the same millisecond share an id.
pub fn make_id(created_at: &DateTime<Local>) -> String {
    let millis = format!("{:010}", created_at.timestamp_millis());
    millis[millis.len() - 10..].to_string()
}

/// "<CapitalizedType> on <MonthName> <Day>", e.g. "Running on April 14".
pub fn make_description(kind: WorkoutType, created_at: &DateTime<Local>) -> String {
    format!(
        "{} on {} {}",
        kind.capitalized(),
        created_at.format("%B"),
        created_at.day()
    )
}
