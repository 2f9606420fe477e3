use crate::core::controller::DEFAULT_ZOOM_LEVEL;
use crate::errors::{AppError, AppResult};
use crate::models::{Coordinates, WorkoutType};
use crate::utils::parse_coordinates;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_zoom_level")]
    pub map_zoom_level: u8,
    /// "lat,lng" answered when the app asks for the current position.
    #[serde(default)]
    pub home_position: Option<String>,
    #[serde(default = "default_workout_type")]
    pub default_workout_type: String,
}

fn default_zoom_level() -> u8 {
    DEFAULT_ZOOM_LEVEL
}
fn default_workout_type() -> String {
    "running".to_string()
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            map_zoom_level: default_zoom_level(),
            home_position: None,
            default_workout_type: default_workout_type(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rworkoutlog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rworkoutlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rworkoutlog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rworkoutlog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        Ok(cfg)
    }

    /// Resolve a `--db` value: `~/` is expanded, a relative name lives in the
    /// config directory.
    pub fn resolve_database(name: &str) -> PathBuf {
        let p = expand_tilde(name);
        if p.is_absolute() {
            p
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Database path with `~/` expanded.
    pub fn database_path(&self) -> String {
        expand_tilde(&self.database).to_string_lossy().to_string()
    }

    /// Parsed `home_position`, if set.
    pub fn home_coordinates(&self) -> AppResult<Option<Coordinates>> {
        self.home_position
            .as_deref()
            .map(parse_coordinates)
            .transpose()
    }

    /// Parsed `default_workout_type` (falls back to running).
    pub fn initial_workout_type(&self) -> WorkoutType {
        WorkoutType::from_input(&self.default_workout_type).unwrap_or(WorkoutType::Running)
    }

    /// Initialize configuration and database files.
    /// Returns the database path that was configured.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<String> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = match custom_name {
            Some(name) => Self::resolve_database(&name),
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(config.database)
    }
}
