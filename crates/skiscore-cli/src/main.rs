//! CLI entry point - the composition root.
//!
//! Commands that need storage or the weather provider go through
//! `bootstrap`. `paths`, `webcams`, `sos` and `config set-api-key` run
//! without opening the database.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use skiscore_cli::handlers::{self, track::TrackOptions};
use skiscore_cli::{Cli, CliConfig, CliError, Commands, ConfigCommand, bootstrap};
use skiscore_core::paths::env_file_path;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbose);
    load_env_files();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = CliError::classify(&err).exit_code();
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the data directory's `.env` first so it wins over a local one.
fn load_env_files() {
    if let Ok(path) = env_file_path() {
        if path.exists() {
            if let Err(e) = dotenvy::from_path(&path) {
                tracing::warn!(path = %path.display(), error = %e, "failed to load env file");
            }
        }
    }
    dotenvy::dotenv().ok();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    // Commands that do not need the application context
    match command {
        Commands::Paths => return handlers::paths::execute(),
        Commands::Webcams { resort } => return handlers::webcams::execute(&resort.join(" ")),
        Commands::Sos { file } => return handlers::sos::execute(file.as_deref()).await,
        Commands::Config {
            command: ConfigCommand::SetApiKey { key },
        } => return handlers::config::set_api_key(&key),
        command => {
            let config = CliConfig::from_env().with_timeout_secs(cli.timeout);
            dispatch(command, config).await
        }
    }
}

async fn dispatch(command: Commands, config: CliConfig) -> anyhow::Result<()> {
    let ctx = bootstrap(config).await?;

    match command {
        Commands::Search { query, count } => handlers::search::execute(&ctx, &query, count).await,
        Commands::Weather { resort } => handlers::weather::execute(&ctx, &resort).await,
        Commands::Forecast { resort } => handlers::forecast::execute_daily(&ctx, &resort).await,
        Commands::Hourly { lat, lon, date } => {
            handlers::forecast::execute_hourly(&ctx, lat, lon, date).await
        }
        Commands::Favorites { command } => handlers::favorites::execute(&ctx, command).await,
        Commands::Track {
            file,
            follow,
            live,
            no_save,
        } => {
            let options = TrackOptions {
                follow,
                live,
                no_save,
            };
            handlers::track::execute(&ctx, &file, options).await
        }
        Commands::Diary { command, limit } => handlers::diary::execute(&ctx, command, limit).await,
        Commands::Config { command } => handlers::config::execute(&ctx, command).await,
        Commands::Paths | Commands::Webcams { .. } | Commands::Sos { .. } => {
            anyhow::bail!("command runs without the application context")
        }
    }
}
