#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutType {
    Running,
    Cycling,
}

impl WorkoutType {
    /// Lowercase name, also used as the persisted `type` discriminator.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::Running => "running",
            WorkoutType::Cycling => "cycling",
        }
    }

    /// Convert stored discriminator → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "running" => Some(WorkoutType::Running),
            "cycling" => Some(WorkoutType::Cycling),
            _ => None,
        }
    }

    /// Helper: convert user input (any case, surrounding spaces allowed)
    pub fn from_input(s: &str) -> Option<Self> {
        Self::from_db_str(&s.trim().to_lowercase())
    }

    /// "Running" / "Cycling"
    pub fn capitalized(&self) -> &'static str {
        match self {
            WorkoutType::Running => "Running",
            WorkoutType::Cycling => "Cycling",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            WorkoutType::Running => "🏃‍♂️",
            WorkoutType::Cycling => "🚴‍♀️",
        }
    }

    /// CSS-like class attached to the map popup.
    pub fn popup_class(&self) -> String {
        format!("{}-popup", self.as_str())
    }
}
