use clap::{Parser, Subcommand};

/// Command-line interface definition for rWorkoutlog
/// CLI application to log running and cycling workouts with SQLite
#[derive(Parser)]
#[command(
    name = "rworkoutlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple workout logging CLI: pin running and cycling sessions on a map and keep them in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Current position as LAT,LNG (overrides `home_position` from the config)
    #[arg(global = true, long = "here", allow_hyphen_values = true)]
    pub here: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Log a workout at a map location
    Add {
        /// Workout type: running or cycling
        workout_type: String,

        /// Location of the workout (LAT,LNG)
        #[arg(long = "at", allow_hyphen_values = true, help = "Workout location as LAT,LNG")]
        at: String,

        /// Distance in km
        #[arg(long = "distance", short = 'd', allow_hyphen_values = true)]
        distance: String,

        /// Duration in minutes
        #[arg(long = "duration", short = 't', allow_hyphen_values = true)]
        duration: String,

        /// Cadence in steps/min (running)
        #[arg(long = "cadence", allow_hyphen_values = true)]
        cadence: Option<String>,

        /// Elevation gain in meters (cycling)
        #[arg(long = "elevation", allow_hyphen_values = true)]
        elevation: Option<String>,
    },

    /// List logged workouts
    List {
        #[arg(long = "map", help = "Also locate the map and place a marker per workout")]
        map: bool,

        #[arg(long = "json", help = "Print the stored workout data as JSON")]
        json: bool,
    },

    /// Center the map on a logged workout
    Show {
        /// Workout id as shown by `list`
        id: String,
    },

    /// Interactive session: pick locations, fill the form, click list entries
    Session,

    /// Remove every stored workout (hard reset)
    Reset {
        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },
}
