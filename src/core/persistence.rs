//! Flat-format persistence of the workout store.
//!
//! Stored layout under [`WORKOUTS_KEY`]: a JSON array with one flat object per
//! workout, in store order:
//!
//! ```json
//! [{"id":"1713100000","createdAt":"2024-04-14T15:06:40+02:00","coordinates":[51.5,-0.12],
//!   "distanceKm":5.0,"durationMin":24.0,"description":"Running on April 14",
//!   "type":"running","cadenceSpm":178.0,"paceMinPerKm":4.8}]
//! ```
//!
//! Derived fields (`paceMinPerKm`, `speedKmPerH`, `description`) are written and
//! read back verbatim, never recomputed.

use crate::core::store::WorkoutStore;
use crate::db::kv::KeyValueStore;
use crate::errors::{AppError, AppResult};
use crate::models::{Coordinates, WorkoutKind, WorkoutRecord, WorkoutType};
use crate::ui::messages::warning;
use chrono::{DateTime, Local, SecondsFormat};
use serde_json::{Map, Value, json};

/// Fixed key holding the whole workout list.
pub const WORKOUTS_KEY: &str = "workouts";

/// Why stored data could not be turned back into records.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("stored data is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("stored data is not a list of workouts")]
    NotAList,

    #[error("workout #{0} is not an object")]
    NotAnObject(usize),

    #[error("missing field '{0}'")]
    MissingField(&'static str),

    #[error("field '{0}' has the wrong type")]
    InvalidField(&'static str),

    #[error("unknown workout type '{0}'")]
    UnknownType(String),
}

/// Save/load round trip between a [`WorkoutStore`] and a key-value store.
pub struct PersistenceGateway<K: KeyValueStore> {
    kv: K,
}

impl<K: KeyValueStore> PersistenceGateway<K> {
    pub fn new(kv: K) -> Self {
        Self { kv }
    }

    pub fn kv(&self) -> &K {
        &self.kv
    }

    /// Serialize every record of `store` and write it under [`WORKOUTS_KEY`].
    /// Nothing is written if any record has a non-finite coordinate.
    pub fn save(&mut self, store: &WorkoutStore) -> AppResult<()> {
        if let Some(bad) = store.all().find(|r| !r.coords().is_finite()) {
            return Err(AppError::InvalidCoordinates(format!(
                "workout {} is at {}",
                bad.id(),
                bad.coords()
            )));
        }
        let payload = Value::Array(store.all().map(|r| Value::Object(to_fields(r))).collect());
        let text = serde_json::to_string(&payload)?;
        self.kv.set(WORKOUTS_KEY, &text)
    }

    /// Read the stored records. Missing or corrupt data yields an empty list.
    pub fn load(&self) -> Vec<WorkoutRecord> {
        let raw = match self.kv.get(WORKOUTS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warning(format!("Could not read saved workouts: {}", e));
                return Vec::new();
            }
        };

        match decode(&raw) {
            Ok(records) => records,
            Err(e) => {
                warning(format!("Ignoring saved workouts ({}).", e));
                Vec::new()
            }
        }
    }

    /// The stored payload as-is, if any.
    pub fn raw(&self) -> AppResult<Option<String>> {
        self.kv.get(WORKOUTS_KEY)
    }

    /// Hard reset: remove the persisted list. The in-memory store is not touched;
    /// the application must be restarted afterwards.
    pub fn reset(&mut self) -> AppResult<()> {
        self.kv.remove(WORKOUTS_KEY)
    }
}

/// Parse a stored payload into records (all or nothing).
pub fn decode(raw: &str) -> Result<Vec<WorkoutRecord>, PersistenceError> {
    let value: Value = serde_json::from_str(raw)?;

    // `null` is what an empty slot holds in some stores
    let items = match value {
        Value::Null => return Ok(Vec::new()),
        Value::Array(items) => items,
        _ => return Err(PersistenceError::NotAList),
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_object()
                .ok_or(PersistenceError::NotAnObject(i))
                .and_then(from_fields)
        })
        .collect()
}

/// Flatten a record into its stored field map.
pub fn to_fields(record: &WorkoutRecord) -> Map<String, Value> {
    let mut fields = Map::new();
    fields.insert("id".into(), json!(record.id()));
    fields.insert(
        "createdAt".into(),
        json!(record
            .created_at()
            .to_rfc3339_opts(SecondsFormat::AutoSi, false)),
    );
    fields.insert("coordinates".into(), json!(record.coords()));
    fields.insert("distanceKm".into(), json!(record.distance_km()));
    fields.insert("durationMin".into(), json!(record.duration_min()));
    fields.insert("description".into(), json!(record.description()));
    fields.insert("type".into(), json!(record.workout_type().as_str()));

    match record.kind() {
        WorkoutKind::Running {
            cadence_spm,
            pace_min_per_km,
        } => {
            fields.insert("cadenceSpm".into(), json!(cadence_spm));
            fields.insert("paceMinPerKm".into(), json!(pace_min_per_km));
        }
        WorkoutKind::Cycling {
            elevation_gain_m,
            speed_km_per_h,
        } => {
            fields.insert("elevationGainM".into(), json!(elevation_gain_m));
            fields.insert("speedKmPerH".into(), json!(speed_km_per_h));
        }
    }

    fields
}

/// Rebuild a record from a stored field map, dispatching on the `type` discriminator.
pub fn from_fields(fields: &Map<String, Value>) -> Result<WorkoutRecord, PersistenceError> {
    let type_name = str_field(fields, "type")?;
    let workout_type = WorkoutType::from_db_str(type_name)
        .ok_or_else(|| PersistenceError::UnknownType(type_name.to_string()))?;

    let kind = match workout_type {
        WorkoutType::Running => WorkoutKind::Running {
            cadence_spm: num_field(fields, "cadenceSpm")?,
            pace_min_per_km: num_field(fields, "paceMinPerKm")?,
        },
        WorkoutType::Cycling => WorkoutKind::Cycling {
            elevation_gain_m: num_field(fields, "elevationGainM")?,
            speed_km_per_h: num_field(fields, "speedKmPerH")?,
        },
    };

    let created_at = DateTime::parse_from_rfc3339(str_field(fields, "createdAt")?)
        .map_err(|_| PersistenceError::InvalidField("createdAt"))?
        .with_timezone(&Local);

    let coords: Coordinates = serde_json::from_value(
        fields
            .get("coordinates")
            .cloned()
            .ok_or(PersistenceError::MissingField("coordinates"))?,
    )
    .map_err(|_| PersistenceError::InvalidField("coordinates"))?;

    Ok(WorkoutRecord::from_parts(
        str_field(fields, "id")?.to_string(),
        created_at,
        coords,
        num_field(fields, "distanceKm")?,
        num_field(fields, "durationMin")?,
        str_field(fields, "description")?.to_string(),
        kind,
    ))
}

fn str_field<'a>(
    fields: &'a Map<String, Value>,
    name: &'static str,
) -> Result<&'a str, PersistenceError> {
    fields
        .get(name)
        .ok_or(PersistenceError::MissingField(name))?
        .as_str()
        .ok_or(PersistenceError::InvalidField(name))
}

fn num_field(fields: &Map<String, Value>, name: &'static str) -> Result<f64, PersistenceError> {
    fields
        .get(name)
        .ok_or(PersistenceError::MissingField(name))?
        .as_f64()
        .ok_or(PersistenceError::InvalidField(name))
}
