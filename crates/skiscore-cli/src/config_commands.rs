//! Configuration management subcommands.

use clap::Subcommand;

/// Configuration management commands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show API key status and application settings
    Show,
    /// Store the OpenWeatherMap API key in the data directory's .env file
    SetApiKey {
        /// API key from your OpenWeatherMap account
        key: String,
    },
    /// View or change application settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommand,
    },
}

/// Settings command variants.
#[derive(Subcommand)]
pub enum SettingsCommand {
    /// Show all current application settings
    Show,
    /// Update application settings
    Set {
        /// Two-letter language for descriptions and place names (e.g. "it", "en")
        #[arg(long)]
        language: Option<String>,
        /// Default number of search matches (1-100)
        #[arg(long)]
        search_result_count: Option<u32>,
        /// Display units: metric, imperial or standard
        #[arg(long)]
        units: Option<String>,
    },
    /// Reset all settings to defaults
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}
