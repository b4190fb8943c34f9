//! CLI-specific error types and mappings.
//!
//! Maps `CoreError` to exit codes and user-facing messages.

use skiscore_core::{CoreError, PathError, RepositoryError, WeatherPortError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Clone, Error)]
pub enum CliError {
    /// Core domain error.
    #[error("{0}")]
    Core(String),

    /// Argument or input validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Requested item does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error (missing or rejected API key, bad settings).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),

    /// Weather service unreachable or misbehaving.
    #[error("Weather service error: {0}")]
    Service(String),
}

impl CliError {
    /// Map error to an exit code following sysexits.h where one fits.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Core(_) => 1,
            Self::Arguments(_) => 2,  // EX_USAGE
            Self::NotFound(_) => 66,  // EX_NOINPUT
            Self::Service(_) => 69,   // EX_UNAVAILABLE
            Self::Database(_) => 73,  // EX_CANTCREAT (closest fit)
            Self::Io(_) => 74,        // EX_IOERR
            Self::Config(_) => 78,    // EX_CONFIG
        }
    }

    /// Like `From<CoreError>` without consuming the error.
    pub fn from_core(err: &CoreError) -> Self {
        match err {
            CoreError::Repository(RepositoryError::NotFound(what)) => Self::NotFound(what.clone()),
            CoreError::Repository(repo_err) => Self::Database(repo_err.to_string()),
            CoreError::Weather(
                weather_err @ (WeatherPortError::Unauthorized | WeatherPortError::Configuration { .. }),
            ) => Self::Config(format!(
                "{weather_err}. Run 'skiscore config set-api-key <key>' or set SKISCORE_OWM_API_KEY"
            )),
            CoreError::Weather(WeatherPortError::NotFound { message }) => Self::NotFound(message.clone()),
            CoreError::Weather(weather_err) => Self::Service(weather_err.to_string()),
            CoreError::Settings(settings_err) => Self::Config(settings_err.to_string()),
            CoreError::Validation(msg) => Self::Arguments(msg.clone()),
            CoreError::Tracker(e) => Self::Core(e.to_string()),
            CoreError::Internal(msg) => Self::Core(msg.clone()),
        }
    }

    /// Classify an error bubbled up to `main`.
    pub fn classify(err: &anyhow::Error) -> Self {
        if let Some(cli) = err.downcast_ref::<Self>() {
            return cli.clone();
        }
        if let Some(core) = err.downcast_ref::<CoreError>() {
            return Self::from_core(core);
        }
        if let Some(path) = err.downcast_ref::<PathError>() {
            return Self::Config(path.to_string());
        }
        if let Some(io) = err.downcast_ref::<std::io::Error>() {
            return Self::Io(io.to_string());
        }
        Self::Core(format!("{err:#}"))
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        Self::from_core(&err)
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
