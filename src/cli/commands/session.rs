//! Interactive session: one line on stdin is one UI event.
//!
//! ```text
//! pick 51.5,-0.12        click on the map
//! type cycling           change the form's workout type
//! submit 20 60 500       submit distance, duration and cadence/elevation
//! click 1713100000       click a workout in the list
//! list | state | help | quit
//! ```

use crate::config::Config;
use crate::core::controller::{AppEvent, ControllerState, EventOutcome, FormFields};
use crate::db::log::wlog_quiet;
use crate::errors::AppResult;
use crate::models::WorkoutType;
use crate::ui::messages::{error, header, info, prompt, success, warning};
use crate::ui::terminal::render_entry;
use crate::utils::parse_coordinates;
use std::io::{self, BufRead};

use super::{CliController, build_controller, geolocation, open_db};

const HELP: &str = "\
Commands:
  pick <lat,lng>                      pick a location on the map (opens the form)
  type <running|cycling>              change the workout type in the form
  submit <distance> <duration> <x>    submit the form (x = cadence or elevation)
  click <id>                          center the map on a listed workout
  list                                print the workout list
  state                               show whether the form is open
  help                                show this help
  quit                                leave the session";

/// One parsed input line.
#[derive(Debug, PartialEq)]
enum Line<'a> {
    Pick(&'a str),
    Type(&'a str),
    Submit(Vec<&'a str>),
    Click(&'a str),
    List,
    State,
    Help,
    Quit,
    Empty,
    Unknown(&'a str),
}

fn parse_line(line: &str) -> Line<'_> {
    let trimmed = line.trim();
    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (trimmed, ""),
    };

    match word.to_lowercase().as_str() {
        "" => Line::Empty,
        "pick" => Line::Pick(rest),
        "type" => Line::Type(rest),
        "submit" => Line::Submit(rest.split_whitespace().collect()),
        "click" => Line::Click(rest),
        "list" | "ls" => Line::List,
        "state" => Line::State,
        "help" | "?" => Line::Help,
        "quit" | "exit" | "q" => Line::Quit,
        _ => Line::Unknown(word),
    }
}

pub fn handle(cfg: &Config) -> AppResult<()> {
    let geo = geolocation(cfg)?;
    let pool = open_db(cfg)?;
    let mut controller = build_controller(&pool, cfg, true);

    header("rWorkoutlog session");
    controller.start();
    controller.locate(&geo)?;
    info("Type `help` for the list of commands.");

    let mut selected = cfg.initial_workout_type();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        prompt();
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match parse_line(&line) {
            Line::Empty => {}
            Line::Quit => break,
            Line::Help => println!("{}", HELP),
            Line::State => print_state(&controller, selected),
            Line::List => {
                for record in controller.store().all() {
                    println!("{}", render_entry(record));
                }
            }
            Line::Pick(raw) => match parse_coordinates(raw) {
                Ok(coords) => {
                    controller.handle(AppEvent::LocationPicked(coords))?;
                }
                Err(e) => error(e),
            },
            Line::Type(raw) => match WorkoutType::from_input(raw) {
                Some(kind) => {
                    selected = kind;
                    if controller.handle(AppEvent::TypeChanged(kind))? == EventOutcome::Ignored {
                        controller.view_mut().set_extra_field(kind);
                    }
                }
                None => warning(format!("Unknown workout type '{}'.", raw)),
            },
            Line::Submit(values) => {
                let fields = form_fields(selected, &values);
                match controller.handle(AppEvent::FormSubmitted(fields))? {
                    EventOutcome::Logged(id) => {
                        let description = controller
                            .store()
                            .find(&id)
                            .map(|r| r.description().to_string())
                            .unwrap_or_default();
                        wlog_quiet(&pool.conn, "add", &id, &description);
                        success(format!("Workout logged (id {}).", id));
                    }
                    EventOutcome::Ignored => {
                        warning("No location picked yet. Use `pick <lat,lng>` first.")
                    }
                    _ => {}
                }
            }
            Line::Click(id) => {
                if controller.handle(AppEvent::ListItemClicked(id.to_string()))?
                    == EventOutcome::Ignored
                    && !controller.is_map_ready()
                {
                    info("The map is not available in this session.");
                }
            }
            Line::Unknown(word) => warning(format!("Unknown command '{}'. Try `help`.", word)),
        }
    }

    info("Bye.");
    Ok(())
}

/// Build raw form values from `submit` arguments; the third value goes to
/// the field the selected type shows.
fn form_fields(selected: WorkoutType, values: &[&str]) -> FormFields {
    let value = |i: usize| values.get(i).map(|v| v.to_string()).unwrap_or_default();
    let extra = value(2);

    FormFields {
        workout_type: selected.as_str().to_string(),
        distance: value(0),
        duration: value(1),
        cadence: if selected == WorkoutType::Running {
            extra.clone()
        } else {
            String::new()
        },
        elevation: if selected == WorkoutType::Cycling {
            extra
        } else {
            String::new()
        },
    }
}

fn print_state(controller: &CliController<'_>, selected: WorkoutType) {
    match controller.state() {
        ControllerState::Idle => println!("Idle ({} workouts)", controller.store().len()),
        ControllerState::AwaitingDetails(coords) => println!(
            "Awaiting {} details for {} ({} workouts)",
            selected.as_str(),
            coords,
            controller.store().len()
        ),
    }
}
