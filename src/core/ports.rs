//! Capabilities the interaction controller drives but does not implement.

use crate::errors::GeolocationError;
use crate::models::{Coordinates, WorkoutRecord, WorkoutType};

/// Options for a map re-center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewOptions {
    pub animate: bool,
    pub pan_duration_secs: f64,
}

impl ViewOptions {
    /// Jump without animation (initial map load).
    pub fn instant() -> Self {
        Self {
            animate: false,
            pan_duration_secs: 0.0,
        }
    }

    /// Animated one-second pan (centering on a listed workout).
    pub fn animated() -> Self {
        Self {
            animate: true,
            pan_duration_secs: 1.0,
        }
    }
}

/// Popup options for a workout marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerStyle {
    pub max_width: u32,
    pub min_width: u32,
    pub auto_close: bool,
    pub close_on_click: bool,
    pub class_name: String,
}

impl MarkerStyle {
    pub fn for_type(kind: WorkoutType) -> Self {
        Self {
            max_width: 250,
            min_width: 100,
            auto_close: false,
            close_on_click: false,
            class_name: kind.popup_class(),
        }
    }
}

/// Map widget.
pub trait MapView {
    fn set_view(&mut self, coords: Coordinates, zoom: u8, options: ViewOptions);

    fn place_marker(&mut self, coords: Coordinates, popup: &str, style: MarkerStyle);
}

/// Form and workout list.
pub trait WorkoutView {
    /// Reveal the input form with the distance field focused.
    fn show_form(&mut self);

    /// Clear every input and hide the form.
    fn hide_form(&mut self);

    /// Show the extra input matching `current` (cadence for running, elevation for cycling).
    fn toggle_extra_field(&mut self, current: WorkoutType);

    fn render_workout(&mut self, record: &WorkoutRecord);

    fn alert(&mut self, message: &str);
}

/// One-shot position lookup: either coordinates or a terminal failure.
pub trait Geolocation {
    fn current_position(&self) -> Result<Coordinates, GeolocationError>;
}
