#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Local, TimeZone};
use rworkoutlog::core::ports::{Geolocation, MapView, MarkerStyle, ViewOptions, WorkoutView};
use rworkoutlog::core::{InteractionController, PersistenceGateway};
use rworkoutlog::db::MemoryKvStore;
use rworkoutlog::errors::GeolocationError;
use rworkoutlog::models::{Coordinates, WorkoutRecord, WorkoutType};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, isolated from the user's real config directory.
pub fn rwl() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("rworkoutlog_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("rworkoutlog");
    cmd.env("HOME", &home).env("APPDATA", &home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworkoutlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize a test DB through the CLI.
pub fn init_db(db_path: &str) {
    rwl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub const LONDON: Coordinates = Coordinates {
    latitude: 51.5,
    longitude: -0.12,
};

/// 14 April 2024, 09:30 local time.
pub fn april_14() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2024, 4, 14, 9, 30, 0)
        .single()
        .expect("unambiguous local time")
}

// ---------------------------------------------------------------------------
// Recording collaborators
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum MapCall {
    SetView(Coordinates, u8, ViewOptions),
    Marker(Coordinates, String, MarkerStyle),
}

#[derive(Debug, Default)]
pub struct RecordingMap {
    pub calls: Vec<MapCall>,
}

impl RecordingMap {
    pub fn markers(&self) -> Vec<&MapCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, MapCall::Marker(..)))
            .collect()
    }
}

impl MapView for RecordingMap {
    fn set_view(&mut self, coords: Coordinates, zoom: u8, options: ViewOptions) {
        self.calls.push(MapCall::SetView(coords, zoom, options));
    }

    fn place_marker(&mut self, coords: Coordinates, popup: &str, style: MarkerStyle) {
        self.calls
            .push(MapCall::Marker(coords, popup.to_string(), style));
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewCall {
    ShowForm,
    HideForm,
    Toggle(WorkoutType),
    Render(String),
    Alert(String),
}

#[derive(Debug, Default)]
pub struct RecordingView {
    pub calls: Vec<ViewCall>,
}

impl RecordingView {
    pub fn alerts(&self) -> Vec<&String> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                ViewCall::Alert(m) => Some(m),
                _ => None,
            })
            .collect()
    }

    pub fn rendered_ids(&self) -> Vec<&String> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                ViewCall::Render(id) => Some(id),
                _ => None,
            })
            .collect()
    }
}

impl WorkoutView for RecordingView {
    fn show_form(&mut self) {
        self.calls.push(ViewCall::ShowForm);
    }

    fn hide_form(&mut self) {
        self.calls.push(ViewCall::HideForm);
    }

    fn toggle_extra_field(&mut self, current: WorkoutType) {
        self.calls.push(ViewCall::Toggle(current));
    }

    fn render_workout(&mut self, record: &WorkoutRecord) {
        self.calls.push(ViewCall::Render(record.id().to_string()));
    }

    fn alert(&mut self, message: &str) {
        self.calls.push(ViewCall::Alert(message.to_string()));
    }
}

pub struct StaticGeo(pub Result<Coordinates, GeolocationError>);

impl Geolocation for StaticGeo {
    fn current_position(&self) -> Result<Coordinates, GeolocationError> {
        self.0
    }
}

pub type TestController = InteractionController<RecordingMap, RecordingView, MemoryKvStore>;

pub fn controller_with(kv: MemoryKvStore) -> TestController {
    InteractionController::new(
        RecordingMap::default(),
        RecordingView::default(),
        PersistenceGateway::new(kv),
        13,
    )
}
