//! Terminal renditions of the map and of the form/list.

use crate::core::ports::{MapView, MarkerStyle, ViewOptions, WorkoutView};
use crate::models::{Coordinates, WorkoutKind, WorkoutRecord, WorkoutType};
use crate::ui::messages::{info, warning};
use crate::utils::colors::{BLUE, GREEN, GREY, RESET, color_for_type};
use crate::utils::formatting::{fmt_fixed1, fmt_num};

/// Prints map requests as text lines.
#[derive(Debug, Default)]
pub struct TerminalMap {
    muted: bool,
}

impl TerminalMap {
    /// While muted, requests are accepted but nothing is printed.
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }
}

impl MapView for TerminalMap {
    fn set_view(&mut self, coords: Coordinates, zoom: u8, options: ViewOptions) {
        if self.muted {
            return;
        }
        let how = if options.animate { " (animated)" } else { "" };
        println!("🗺️  {BLUE}Map centered on {coords} · zoom {zoom}{how}{RESET}");
    }

    fn place_marker(&mut self, coords: Coordinates, popup: &str, style: MarkerStyle) {
        if self.muted {
            return;
        }
        println!("📍 {coords} {GREY}[{}]{RESET} {popup}", style.class_name);
    }
}

/// Prints list entries and form prompts.
///
/// Form prompts are only shown in interactive sessions. Alerts are always shown.
#[derive(Debug)]
pub struct TerminalView {
    interactive: bool,
    list_muted: bool,
    extra_field: WorkoutType,
}

impl TerminalView {
    pub fn new(interactive: bool, initial_type: WorkoutType) -> Self {
        Self {
            interactive,
            list_muted: false,
            extra_field: initial_type,
        }
    }

    /// While muted, list entries are not printed.
    pub fn set_list_muted(&mut self, muted: bool) {
        self.list_muted = muted;
    }

    /// Follow a type change made while the form is hidden.
    pub fn set_extra_field(&mut self, kind: WorkoutType) {
        self.extra_field = kind;
    }

    /// Which extra field the form currently shows.
    pub fn extra_field(&self) -> WorkoutType {
        self.extra_field
    }

    fn form_hint(&self) -> &'static str {
        match self.extra_field {
            WorkoutType::Running => "submit <distance km> <duration min> <cadence spm>",
            WorkoutType::Cycling => "submit <distance km> <duration min> <elevation m>",
        }
    }
}

impl WorkoutView for TerminalView {
    fn show_form(&mut self) {
        if self.interactive {
            info(format!(
                "New {} workout. Enter: {}",
                self.extra_field.as_str(),
                self.form_hint()
            ));
        }
    }

    fn hide_form(&mut self) {
        if self.interactive {
            println!("{GREY}Form closed.{RESET}");
        }
    }

    fn toggle_extra_field(&mut self, current: WorkoutType) {
        self.extra_field = current;
        if self.interactive {
            info(format!("Form switched to {}: {}", current.as_str(), self.form_hint()));
        }
    }

    fn render_workout(&mut self, record: &WorkoutRecord) {
        if self.list_muted {
            return;
        }
        println!("{}", render_entry(record));
    }

    fn alert(&mut self, message: &str) {
        warning(message);
    }
}

/// Multi-line list entry for one workout.
pub fn render_entry(record: &WorkoutRecord) -> String {
    let kind = record.workout_type();
    let color = color_for_type(kind);

    let mut details = vec![
        format!("{} {} km", kind.icon(), fmt_num(record.distance_km())),
        format!("⏱ {} min", fmt_num(record.duration_min())),
    ];

    match record.kind() {
        WorkoutKind::Running {
            cadence_spm,
            pace_min_per_km,
        } => {
            details.push(format!("⚡️ {} min/km", fmt_fixed1(*pace_min_per_km)));
            details.push(format!("🦶🏼 {} spm", fmt_num(*cadence_spm)));
        }
        WorkoutKind::Cycling {
            elevation_gain_m,
            speed_km_per_h,
        } => {
            details.push(format!("⚡️ {} km/h", fmt_fixed1(*speed_km_per_h)));
            details.push(format!("⛰ {} m", fmt_num(*elevation_gain_m)));
        }
    }

    format!(
        "{color}▌{RESET} {GREEN}{}{RESET} {GREY}#{}{RESET}\n{color}▌{RESET}   {}",
        record.description(),
        record.id(),
        details.join("   ")
    )
}
