//! Interaction state machine: turns discrete UI / geolocation messages into
//! store mutations and collaborator requests.
//!
//! ```text
//! Idle --LocationPicked(c)--> AwaitingDetails(c)
//! any --LocationPicked(non-finite)--> same state                 (alert)
//! AwaitingDetails(c) --FormSubmitted, valid--> Idle          (record logged)
//! AwaitingDetails(c) --FormSubmitted, invalid--> AwaitingDetails(c)   (alert)
//! AwaitingDetails(c) --TypeChanged--> AwaitingDetails(c)     (form layout only)
//! any --ListItemClicked(id)--> same state                    (center map)
//! ```

use crate::core::factory::{WorkoutExtras, WorkoutFactory};
use crate::core::persistence::PersistenceGateway;
use crate::core::ports::{Geolocation, MapView, MarkerStyle, ViewOptions, WorkoutView};
use crate::core::store::WorkoutStore;
use crate::db::kv::KeyValueStore;
use crate::errors::{AppResult, GeolocationError, ValidationError};
use crate::models::{Coordinates, WorkoutRecord, WorkoutType};

pub const DEFAULT_ZOOM_LEVEL: u8 = 13;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControllerState {
    Idle,
    AwaitingDetails(Coordinates),
}

/// Raw form values, exactly as typed. Nothing here is trusted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub workout_type: String,
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub elevation: String,
}

/// One discrete external event.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    PositionAcquired(Coordinates),
    PositionUnavailable(GeolocationError),
    LocationPicked(Coordinates),
    TypeChanged(WorkoutType),
    FormSubmitted(FormFields),
    ListItemClicked(String),
}

/// What handling an event did.
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    /// Nothing to do in the current state (or unknown id).
    Ignored,
    MapReady,
    MapUnavailable,
    FormOpened,
    /// The picked location is not a usable point; the state is unchanged.
    LocationRejected,
    FieldsToggled,
    /// A workout with this id was stored and saved.
    Logged(String),
    Rejected(ValidationError),
    /// The map was centered on this workout.
    Centered(String),
}

pub struct InteractionController<M: MapView, V: WorkoutView, K: KeyValueStore> {
    store: WorkoutStore,
    gateway: PersistenceGateway<K>,
    map: M,
    view: V,
    state: ControllerState,
    map_ready: bool,
    zoom_level: u8,
}

impl<M: MapView, V: WorkoutView, K: KeyValueStore> InteractionController<M, V, K> {
    pub fn new(map: M, view: V, gateway: PersistenceGateway<K>, zoom_level: u8) -> Self {
        Self {
            store: WorkoutStore::new(),
            gateway,
            map,
            view,
            state: ControllerState::Idle,
            map_ready: false,
            zoom_level,
        }
    }

    /// Load persisted workouts into the store and render each of them.
    /// Returns the number of workouts loaded.
    pub fn start(&mut self) -> usize {
        let records = self.gateway.load();
        self.store.replace_all(records);

        for record in self.store.all() {
            self.view.render_workout(record);
            if self.map_ready {
                place_marker(&mut self.map, record);
            }
        }

        self.store.len()
    }

    /// Ask `geo` for the user's position and feed the answer back as an event.
    pub fn locate<G: Geolocation>(&mut self, geo: &G) -> AppResult<EventOutcome> {
        let event = match geo.current_position() {
            Ok(coords) => AppEvent::PositionAcquired(coords),
            Err(e) => AppEvent::PositionUnavailable(e),
        };
        self.handle(event)
    }

    /// Run one event to completion.
    pub fn handle(&mut self, event: AppEvent) -> AppResult<EventOutcome> {
        match event {
            AppEvent::PositionAcquired(coords) => Ok(self.on_position_acquired(coords)),
            AppEvent::PositionUnavailable(e) => Ok(self.on_position_unavailable(e)),
            AppEvent::LocationPicked(coords) => Ok(self.on_location_picked(coords)),
            AppEvent::TypeChanged(kind) => Ok(self.on_type_changed(kind)),
            AppEvent::FormSubmitted(fields) => self.on_form_submitted(&fields),
            AppEvent::ListItemClicked(id) => Ok(self.on_list_item_clicked(&id)),
        }
    }

    fn on_position_acquired(&mut self, coords: Coordinates) -> EventOutcome {
        if self.map_ready {
            return EventOutcome::Ignored;
        }

        self.map
            .set_view(coords, self.zoom_level, ViewOptions::instant());
        self.map_ready = true;

        for record in self.store.all() {
            place_marker(&mut self.map, record);
        }

        EventOutcome::MapReady
    }

    fn on_position_unavailable(&mut self, e: GeolocationError) -> EventOutcome {
        self.view.alert(&e.to_string());
        EventOutcome::MapUnavailable
    }

    fn on_location_picked(&mut self, coords: Coordinates) -> EventOutcome {
        if !coords.is_finite() {
            self.view.alert(&format!("Invalid location: {}", coords));
            return EventOutcome::LocationRejected;
        }

        // a second pick while the form is open moves the pending location
        self.state = ControllerState::AwaitingDetails(coords);
        self.view.show_form();
        EventOutcome::FormOpened
    }

    fn on_type_changed(&mut self, kind: WorkoutType) -> EventOutcome {
        match self.state {
            ControllerState::AwaitingDetails(_) => {
                self.view.toggle_extra_field(kind);
                EventOutcome::FieldsToggled
            }
            ControllerState::Idle => EventOutcome::Ignored,
        }
    }

    fn on_form_submitted(&mut self, fields: &FormFields) -> AppResult<EventOutcome> {
        let ControllerState::AwaitingDetails(coords) = self.state else {
            return Ok(EventOutcome::Ignored);
        };

        let record = match build_record(coords, fields) {
            Ok(record) => record,
            Err(e) => {
                self.view.alert(&e.to_string());
                return Ok(EventOutcome::Rejected(e));
            }
        };

        let id = record.id().to_string();
        self.store.append(record);

        if let Some(record) = self.store.find(&id) {
            if self.map_ready {
                place_marker(&mut self.map, record);
            }
            self.view.render_workout(record);
        }

        self.view.hide_form();
        self.state = ControllerState::Idle;
        self.gateway.save(&self.store)?;

        Ok(EventOutcome::Logged(id))
    }

    fn on_list_item_clicked(&mut self, id: &str) -> EventOutcome {
        if !self.map_ready {
            return EventOutcome::Ignored;
        }

        match self.store.find(id) {
            Some(record) => {
                self.map
                    .set_view(record.coords(), self.zoom_level, ViewOptions::animated());
                EventOutcome::Centered(record.id().to_string())
            }
            None => EventOutcome::Ignored,
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn store(&self) -> &WorkoutStore {
        &self.store
    }

    pub fn gateway(&self) -> &PersistenceGateway<K> {
        &self.gateway
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn map_mut(&mut self) -> &mut M {
        &mut self.map
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn is_map_ready(&self) -> bool {
        self.map_ready
    }
}

fn place_marker<M: MapView>(map: &mut M, record: &WorkoutRecord) {
    map.place_marker(
        record.coords(),
        &record.popup_content(),
        MarkerStyle::for_type(record.workout_type()),
    );
}

/// Validate the raw form and build the record for `coords`.
fn build_record(coords: Coordinates, fields: &FormFields) -> Result<WorkoutRecord, ValidationError> {
    let kind = WorkoutType::from_input(&fields.workout_type)
        .ok_or_else(|| ValidationError::UnknownType(fields.workout_type.clone()))?;

    let extras = match kind {
        WorkoutType::Running => WorkoutExtras::cadence(parse_input(&fields.cadence)),
        WorkoutType::Cycling => WorkoutExtras::elevation(parse_input(&fields.elevation)),
    };

    WorkoutFactory::create(
        kind,
        coords,
        parse_input(&fields.distance),
        parse_input(&fields.duration),
        extras,
    )
}

/// Read a typed number: blank is 0, anything unparsable is NaN.
pub fn parse_input(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}
