mod common;
use common::{
    LONDON, MapCall, RecordingView, StaticGeo, ViewCall, april_14, controller_with,
};
use rworkoutlog::core::controller::parse_input;
use rworkoutlog::core::ports::{MarkerStyle, ViewOptions};
use rworkoutlog::core::{
    AppEvent, ControllerState, EventOutcome, FormFields, PersistenceGateway, WORKOUTS_KEY,
    WorkoutExtras, WorkoutFactory, WorkoutStore,
};
use rworkoutlog::db::{KeyValueStore, MemoryKvStore};
use rworkoutlog::errors::{Field, GeolocationError, ValidationError};
use rworkoutlog::models::{Coordinates, WorkoutType};

fn running_form(distance: &str, duration: &str, cadence: &str) -> FormFields {
    FormFields {
        workout_type: "running".into(),
        distance: distance.into(),
        duration: duration.into(),
        cadence: cadence.into(),
        elevation: String::new(),
    }
}

fn cycling_form(distance: &str, duration: &str, elevation: &str) -> FormFields {
    FormFields {
        workout_type: "cycling".into(),
        distance: distance.into(),
        duration: duration.into(),
        cadence: String::new(),
        elevation: elevation.into(),
    }
}

/// Memory store pre-filled with one saved run and one saved ride.
fn saved_kv() -> (MemoryKvStore, Vec<String>) {
    let mut store = WorkoutStore::new();
    let run = WorkoutFactory::create_at(
        WorkoutType::Running,
        LONDON,
        5.0,
        24.0,
        WorkoutExtras::cadence(178.0),
        april_14(),
    )
    .unwrap();
    let ride = WorkoutFactory::create_at(
        WorkoutType::Cycling,
        Coordinates::new(51.52, -0.1),
        20.0,
        60.0,
        WorkoutExtras::elevation(500.0),
        april_14() + chrono::Duration::minutes(90),
    )
    .unwrap();
    let ids = vec![run.id().to_string(), ride.id().to_string()];
    store.append(run);
    store.append(ride);

    let mut gateway = PersistenceGateway::new(MemoryKvStore::new());
    gateway.save(&store).unwrap();
    let raw = gateway.raw().unwrap().unwrap();
    (MemoryKvStore::new().with_entry(WORKOUTS_KEY, &raw), ids)
}

#[test]
fn test_starts_idle_with_empty_store() {
    let mut c = controller_with(MemoryKvStore::new());
    assert_eq!(c.start(), 0);
    assert_eq!(c.state(), ControllerState::Idle);
    assert!(c.view().calls.is_empty());
    assert!(!c.is_map_ready());
}

#[test]
fn test_startup_renders_saved_workouts_then_markers_when_map_ready() {
    let (kv, ids) = saved_kv();
    let mut c = controller_with(kv);

    assert_eq!(c.start(), 2);
    assert_eq!(c.view().rendered_ids(), vec![&ids[0], &ids[1]]);
    assert!(c.map().calls.is_empty(), "map not ready yet");

    let outcome = c.locate(&StaticGeo(Ok(LONDON))).unwrap();
    assert_eq!(outcome, EventOutcome::MapReady);
    assert_eq!(
        c.map().calls[0],
        MapCall::SetView(LONDON, 13, ViewOptions::instant())
    );
    assert_eq!(c.map().markers().len(), 2);
    assert_eq!(
        c.map().calls[1],
        MapCall::Marker(
            LONDON,
            "🏃‍♂️ Running on April 14".to_string(),
            MarkerStyle::for_type(WorkoutType::Running)
        )
    );
    assert_eq!(c.state(), ControllerState::Idle);
}

#[test]
fn test_second_position_is_ignored() {
    let mut c = controller_with(MemoryKvStore::new());
    c.start();
    c.locate(&StaticGeo(Ok(LONDON))).unwrap();
    let outcome = c
        .handle(AppEvent::PositionAcquired(Coordinates::new(0.0, 0.0)))
        .unwrap();

    assert_eq!(outcome, EventOutcome::Ignored);
    assert_eq!(c.map().calls.len(), 1);
}

#[test]
fn test_location_picked_opens_form() {
    let mut c = controller_with(MemoryKvStore::new());
    c.start();

    let outcome = c.handle(AppEvent::LocationPicked(LONDON)).unwrap();

    assert_eq!(outcome, EventOutcome::FormOpened);
    assert_eq!(c.state(), ControllerState::AwaitingDetails(LONDON));
    assert_eq!(c.view().calls, vec![ViewCall::ShowForm]);
}

#[test]
fn test_non_finite_location_is_rejected() {
    let mut c = controller_with(MemoryKvStore::new());
    c.start();
    c.handle(AppEvent::LocationPicked(LONDON)).unwrap();
    c.handle(AppEvent::FormSubmitted(running_form("5", "24", "178")))
        .unwrap();

    for bad in [
        Coordinates::new(f64::NAN, 0.0),
        Coordinates::new(51.5, f64::INFINITY),
    ] {
        let outcome = c.handle(AppEvent::LocationPicked(bad)).unwrap();
        assert_eq!(outcome, EventOutcome::LocationRejected);
        assert_eq!(c.state(), ControllerState::Idle);
    }
    assert_eq!(c.view().alerts().len(), 2);

    // no form is open, so a submit logs nothing
    let outcome = c
        .handle(AppEvent::FormSubmitted(running_form("5", "24", "178")))
        .unwrap();
    assert_eq!(outcome, EventOutcome::Ignored);
    assert_eq!(c.store().len(), 1);
    assert_eq!(c.gateway().load().len(), 1);
}

#[test]
fn test_non_finite_pick_keeps_pending_location() {
    let mut c = controller_with(MemoryKvStore::new());
    c.start();
    c.handle(AppEvent::LocationPicked(LONDON)).unwrap();

    let outcome = c
        .handle(AppEvent::LocationPicked(Coordinates::new(f64::NAN, f64::NAN)))
        .unwrap();

    assert_eq!(outcome, EventOutcome::LocationRejected);
    assert_eq!(c.state(), ControllerState::AwaitingDetails(LONDON));
}

#[test]
fn test_valid_submit_logs_workout_and_returns_to_idle() {
    let mut c = controller_with(MemoryKvStore::new());
    c.start();
    c.locate(&StaticGeo(Ok(LONDON))).unwrap();
    c.handle(AppEvent::LocationPicked(LONDON)).unwrap();

    let outcome = c
        .handle(AppEvent::FormSubmitted(running_form("5", "24", "178")))
        .unwrap();

    let id = match outcome {
        EventOutcome::Logged(id) => id,
        other => panic!("expected a logged workout, got {:?}", other),
    };
    assert_eq!(c.state(), ControllerState::Idle);
    assert_eq!(c.store().len(), 1);

    let record = c.store().find(&id).expect("stored");
    assert!(record.description().starts_with("Running on"));

    // marker, list entry, hidden form
    match c.map().calls.last() {
        Some(MapCall::Marker(coords, popup, style)) => {
            assert_eq!(*coords, LONDON);
            assert!(popup.starts_with("🏃‍♂️ Running on"));
            assert_eq!(style.class_name, "running-popup");
        }
        other => panic!("expected a marker, got {:?}", other),
    }
    assert_eq!(
        c.view().calls,
        vec![
            ViewCall::ShowForm,
            ViewCall::Render(id.clone()),
            ViewCall::HideForm
        ]
    );

    // saved
    let reloaded = c.gateway().load();
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded[0].id(), id);
}

#[test]
fn test_invalid_submit_keeps_form_open() {
    let mut c = controller_with(MemoryKvStore::new());
    c.start();
    c.handle(AppEvent::LocationPicked(LONDON)).unwrap();

    let outcome = c
        .handle(AppEvent::FormSubmitted(running_form("-5", "24", "178")))
        .unwrap();

    assert_eq!(
        outcome,
        EventOutcome::Rejected(ValidationError::NotPositive {
            fields: vec![Field::Distance]
        })
    );
    assert_eq!(c.state(), ControllerState::AwaitingDetails(LONDON));
    assert!(c.store().is_empty());
    assert_eq!(c.view().alerts().len(), 1);
    assert!(
        c.view().alerts()[0].contains("One or more of the inputs is not a positive number!")
    );
    assert!(c.gateway().kv().get(WORKOUTS_KEY).unwrap().is_none());

    // the user fixes the value and submits again
    let outcome = c
        .handle(AppEvent::FormSubmitted(running_form("5", "24", "178")))
        .unwrap();
    assert!(matches!(outcome, EventOutcome::Logged(_)));
    assert_eq!(c.state(), ControllerState::Idle);
}

#[test]
fn test_unparsable_or_blank_inputs() {
    let mut c = controller_with(MemoryKvStore::new());
    c.start();
    c.handle(AppEvent::LocationPicked(LONDON)).unwrap();

    let outcome = c
        .handle(AppEvent::FormSubmitted(running_form("five", "24", "")))
        .unwrap();
    assert_eq!(
        outcome,
        EventOutcome::Rejected(ValidationError::NotFinite {
            fields: vec![Field::Distance]
        })
    );

    // blank cadence reads as 0, which is not positive
    let outcome = c
        .handle(AppEvent::FormSubmitted(running_form("5", "24", " ")))
        .unwrap();
    assert_eq!(
        outcome,
        EventOutcome::Rejected(ValidationError::NotPositive {
            fields: vec![Field::Cadence]
        })
    );
    assert!(c.store().is_empty());
}

#[test]
fn test_blank_elevation_is_zero_for_cycling() {
    let mut c = controller_with(MemoryKvStore::new());
    c.start();
    c.handle(AppEvent::LocationPicked(LONDON)).unwrap();

    let outcome = c
        .handle(AppEvent::FormSubmitted(cycling_form("20", "60", "")))
        .unwrap();
    assert!(matches!(outcome, EventOutcome::Logged(_)));
}

#[test]
fn test_unknown_type_is_rejected() {
    let mut c = controller_with(MemoryKvStore::new());
    c.start();
    c.handle(AppEvent::LocationPicked(LONDON)).unwrap();

    let mut form = running_form("5", "24", "178");
    form.workout_type = "swimming".into();
    let outcome = c.handle(AppEvent::FormSubmitted(form)).unwrap();

    assert_eq!(
        outcome,
        EventOutcome::Rejected(ValidationError::UnknownType("swimming".into()))
    );
    assert_eq!(c.state(), ControllerState::AwaitingDetails(LONDON));
}

#[test]
fn test_submit_without_location_is_ignored() {
    let mut c = controller_with(MemoryKvStore::new());
    c.start();

    let outcome = c
        .handle(AppEvent::FormSubmitted(running_form("5", "24", "178")))
        .unwrap();

    assert_eq!(outcome, EventOutcome::Ignored);
    assert!(c.store().is_empty());
}

#[test]
fn test_type_change_only_toggles_fields() {
    let mut c = controller_with(MemoryKvStore::new());
    c.start();

    assert_eq!(
        c.handle(AppEvent::TypeChanged(WorkoutType::Cycling)).unwrap(),
        EventOutcome::Ignored
    );

    c.handle(AppEvent::LocationPicked(LONDON)).unwrap();
    let outcome = c
        .handle(AppEvent::TypeChanged(WorkoutType::Cycling))
        .unwrap();

    assert_eq!(outcome, EventOutcome::FieldsToggled);
    assert_eq!(c.state(), ControllerState::AwaitingDetails(LONDON));
    assert_eq!(
        c.view().calls.last(),
        Some(&ViewCall::Toggle(WorkoutType::Cycling))
    );
    assert!(c.store().is_empty());
}

#[test]
fn test_second_pick_moves_pending_location() {
    let mut c = controller_with(MemoryKvStore::new());
    c.start();
    let elsewhere = Coordinates::new(40.4168, -3.7038);

    c.handle(AppEvent::LocationPicked(LONDON)).unwrap();
    c.handle(AppEvent::LocationPicked(elsewhere)).unwrap();
    c.handle(AppEvent::FormSubmitted(running_form("5", "24", "178")))
        .unwrap();

    assert_eq!(c.store().all().next().unwrap().coords(), elsewhere);
}

#[test]
fn test_list_click_centers_map() {
    let (kv, ids) = saved_kv();
    let mut c = controller_with(kv);
    c.start();
    c.locate(&StaticGeo(Ok(Coordinates::new(0.0, 0.0)))).unwrap();

    let outcome = c
        .handle(AppEvent::ListItemClicked(ids[1].clone()))
        .unwrap();

    assert_eq!(outcome, EventOutcome::Centered(ids[1].clone()));
    assert_eq!(
        c.map().calls.last(),
        Some(&MapCall::SetView(
            Coordinates::new(51.52, -0.1),
            13,
            ViewOptions::animated()
        ))
    );
}

#[test]
fn test_unknown_list_click_is_a_no_op() {
    let (kv, _) = saved_kv();
    let mut c = controller_with(kv);
    c.start();
    c.locate(&StaticGeo(Ok(LONDON))).unwrap();
    let map_calls = c.map().calls.len();
    let view_calls = c.view().calls.len();

    let outcome = c
        .handle(AppEvent::ListItemClicked("doesnotexist".into()))
        .unwrap();

    assert_eq!(outcome, EventOutcome::Ignored);
    assert_eq!(c.map().calls.len(), map_calls);
    assert_eq!(c.view().calls.len(), view_calls);
    assert!(c.view().alerts().is_empty());
    assert_eq!(c.state(), ControllerState::Idle);
}

#[test]
fn test_geolocation_failure_degrades_to_list_only() {
    let (kv, ids) = saved_kv();
    let mut c = controller_with(kv);
    c.start();

    let outcome = c
        .locate(&StaticGeo(Err(GeolocationError::Unavailable)))
        .unwrap();
    assert_eq!(outcome, EventOutcome::MapUnavailable);
    assert_eq!(c.view().alerts(), vec!["Could not get your position"]);

    // clicks do nothing, logging still works without markers
    assert_eq!(
        c.handle(AppEvent::ListItemClicked(ids[0].clone())).unwrap(),
        EventOutcome::Ignored
    );
    c.handle(AppEvent::LocationPicked(LONDON)).unwrap();
    let outcome = c
        .handle(AppEvent::FormSubmitted(cycling_form("20", "60", "500")))
        .unwrap();

    assert!(matches!(outcome, EventOutcome::Logged(_)));
    assert!(c.map().calls.is_empty());
    assert_eq!(c.store().len(), 3);
    assert_eq!(c.gateway().load().len(), 3);
}

#[test]
fn test_session_survives_restart() {
    let mut first = controller_with(MemoryKvStore::new());
    first.start();
    first.handle(AppEvent::LocationPicked(LONDON)).unwrap();
    first
        .handle(AppEvent::FormSubmitted(cycling_form("20", "60", "500")))
        .unwrap();
    let raw = first.gateway().raw().unwrap().unwrap();

    let mut second = controller_with(MemoryKvStore::new().with_entry(WORKOUTS_KEY, &raw));
    assert_eq!(second.start(), 1);

    let original = first.store().all().next().unwrap();
    let restored = second.store().all().next().unwrap();
    assert_eq!(original, restored);
    assert_eq!(second.view().rendered_ids(), vec![original.id()]);
}

#[test]
fn test_parse_input_semantics() {
    assert_eq!(parse_input("5"), 5.0);
    assert_eq!(parse_input("  4.5 "), 4.5);
    assert_eq!(parse_input(""), 0.0);
    assert_eq!(parse_input("   "), 0.0);
    assert_eq!(parse_input("-3"), -3.0);
    assert!(parse_input("abc").is_nan());
    assert!(parse_input("5km").is_nan());
}

#[test]
fn test_recording_view_is_default_empty() {
    let view = RecordingView::default();
    assert!(view.alerts().is_empty());
}
