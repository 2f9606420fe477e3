use crate::errors::{Field, ValidationError};
use crate::models::workout::{make_description, make_id};
use crate::models::{Coordinates, WorkoutKind, WorkoutRecord, WorkoutType};
use chrono::{DateTime, Local, TimeZone};

/// Variant-specific inputs. Only the one matching the workout type is read;
/// a missing value counts as "not a number".
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WorkoutExtras {
    pub cadence_spm: Option<f64>,
    pub elevation_gain_m: Option<f64>,
}

impl WorkoutExtras {
    pub fn cadence(cadence_spm: f64) -> Self {
        Self {
            cadence_spm: Some(cadence_spm),
            elevation_gain_m: None,
        }
    }

    pub fn elevation(elevation_gain_m: f64) -> Self {
        Self {
            cadence_spm: None,
            elevation_gain_m: Some(elevation_gain_m),
        }
    }
}

/// Validation and construction of workout records.
pub struct WorkoutFactory;

impl WorkoutFactory {
    /// Validate the inputs and build a record stamped with the current time.
    pub fn create(
        kind: WorkoutType,
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        extras: WorkoutExtras,
    ) -> Result<WorkoutRecord, ValidationError> {
        Self::create_at(kind, coords, distance_km, duration_min, extras, now_millis())
    }

    /// Same as [`WorkoutFactory::create`] with an explicit creation time.
    pub fn create_at(
        kind: WorkoutType,
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        extras: WorkoutExtras,
        created_at: DateTime<Local>,
    ) -> Result<WorkoutRecord, ValidationError> {
        // finiteness covers every checked field, positivity skips elevation
        let (checked, positive): (Vec<(Field, f64)>, Vec<(Field, f64)>) = match kind {
            WorkoutType::Running => {
                let cadence = extras.cadence_spm.unwrap_or(f64::NAN);
                let all = vec![
                    (Field::Distance, distance_km),
                    (Field::Duration, duration_min),
                    (Field::Cadence, cadence),
                ];
                (all.clone(), all)
            }
            WorkoutType::Cycling => {
                let elevation = extras.elevation_gain_m.unwrap_or(f64::NAN);
                (
                    vec![
                        (Field::Distance, distance_km),
                        (Field::Duration, duration_min),
                        (Field::Elevation, elevation),
                    ],
                    vec![
                        (Field::Distance, distance_km),
                        (Field::Duration, duration_min),
                    ],
                )
            }
        };

        let not_finite = failing(&checked, |v| !v.is_finite());
        if !not_finite.is_empty() {
            return Err(ValidationError::NotFinite { fields: not_finite });
        }

        let not_positive = failing(&positive, |v| v <= 0.0);
        if !not_positive.is_empty() {
            return Err(ValidationError::NotPositive {
                fields: not_positive,
            });
        }

        let workout_kind = match kind {
            WorkoutType::Running => WorkoutKind::Running {
                cadence_spm: checked[2].1,
                pace_min_per_km: duration_min / distance_km,
            },
            WorkoutType::Cycling => WorkoutKind::Cycling {
                elevation_gain_m: checked[2].1,
                speed_km_per_h: distance_km / duration_min,
            },
        };

        Ok(WorkoutRecord::from_parts(
            make_id(&created_at),
            created_at,
            coords,
            distance_km,
            duration_min,
            make_description(kind, &created_at),
            workout_kind,
        ))
    }
}

fn failing(values: &[(Field, f64)], rejects: impl Fn(f64) -> bool) -> Vec<Field> {
    values
        .iter()
        .filter(|(_, v)| rejects(*v))
        .map(|(f, _)| *f)
        .collect()
}

/// Current local time truncated to whole milliseconds, so it survives
/// the persisted RFC 3339 form unchanged.
fn now_millis() -> DateTime<Local> {
    let millis = Local::now().timestamp_millis();
    Local
        .timestamp_millis_opt(millis)
        .single()
        .unwrap_or_else(Local::now)
}
