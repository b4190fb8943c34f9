//! Root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Ski conditions, forecasts and session tracking from the terminal.
#[derive(Parser)]
#[command(name = "skiscore")]
#[command(about = "Ski resort conditions, skiability score and session diary")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// HTTP timeout for weather requests, in seconds
    #[arg(long, global = true, env = "SKISCORE_HTTP_TIMEOUT", value_name = "SECS")]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
