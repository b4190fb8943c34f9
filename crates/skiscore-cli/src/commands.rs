//! Main commands enum and primary subcommands.

use chrono::NaiveDate;
use clap::{Args, Subcommand};

use skiscore_core::SkiResort;

use crate::config_commands::ConfigCommand;

/// A place given by coordinates, optionally named.
#[derive(Args, Debug, Clone)]
pub struct ResortArgs {
    /// Latitude in degrees
    #[arg(allow_negative_numbers = true)]
    pub lat: f64,
    /// Longitude in degrees
    #[arg(allow_negative_numbers = true)]
    pub lon: f64,
    /// Resort name shown in output and stored with favourites
    #[arg(long)]
    pub name: Option<String>,
    /// Country shown next to the name
    #[arg(long)]
    pub country: Option<String>,
}

impl ResortArgs {
    /// Resort named after the coordinates when no name was given.
    pub fn to_resort(&self) -> SkiResort {
        let name = self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map_or_else(|| format!("{:.4}, {:.4}", self.lat, self.lon), str::to_string);
        SkiResort::new(name, self.country.clone(), self.lat, self.lon)
    }
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Show resolved paths for the data directory, database and .env file
    Paths,

    /// Search places by name
    Search {
        /// Place name (e.g. "Cortina")
        query: String,
        /// Maximum number of matches (defaults to the configured count)
        #[arg(short, long)]
        count: Option<u32>,
    },

    /// Current conditions and skiability score at a location
    Weather {
        #[command(flatten)]
        resort: ResortArgs,
    },

    /// Five-day forecast with a score per day
    Forecast {
        #[command(flatten)]
        resort: ResortArgs,
    },

    /// Three-hour forecast slots for one day
    Hourly {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        /// Day to show, YYYY-MM-DD
        date: NaiveDate,
    },

    /// Manage favourite resorts
    Favorites {
        #[command(subcommand)]
        command: FavoritesCommand,
    },

    /// List known webcams for a resort
    Webcams {
        /// Resort name (e.g. "Cortina d'Ampezzo")
        #[arg(required = true, num_args = 1..)]
        resort: Vec<String>,
    },

    /// Record a ski session from a CSV track of GPS fixes
    Track {
        /// CSV file with `timestamp_ms,lat,lon,altitude_m[,speed_mps]` lines, or `-` for stdin
        file: String,
        /// Print live statistics while the track is processed
        #[arg(short, long)]
        follow: bool,
        /// Use the wall clock for elapsed time instead of fix timestamps
        #[arg(long)]
        live: bool,
        /// Do not store the session in the diary
        #[arg(long)]
        no_save: bool,
    },

    /// Show the session diary and season statistics
    Diary {
        #[command(subcommand)]
        command: Option<DiaryCommand>,
        /// Show only the most recent N sessions
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Print an emergency message with the last known position
    Sos {
        /// Track file whose last fix is the known position
        #[arg(long)]
        file: Option<String>,
    },

    /// Manage API key and application settings
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Favourite resort commands.
#[derive(Subcommand)]
pub enum FavoritesCommand {
    /// List favourites with their current score
    List,
    /// Add a favourite
    Add {
        #[command(flatten)]
        resort: ResortArgs,
    },
    /// Remove a favourite
    Remove {
        #[command(flatten)]
        resort: ResortArgs,
    },
    /// Add the resort if absent, remove it otherwise
    Toggle {
        #[command(flatten)]
        resort: ResortArgs,
    },
}

/// Session diary commands.
#[derive(Subcommand)]
pub enum DiaryCommand {
    /// Delete a session by ID
    Delete {
        id: i64,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}
