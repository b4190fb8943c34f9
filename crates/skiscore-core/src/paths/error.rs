//! Path-related error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from path resolution and config file access.
#[derive(Debug, Error)]
pub enum PathError {
    /// Could not determine the system data directory.
    #[error("Cannot determine system data directory")]
    NoDataDir,

    #[error("Failed to create directory {path}: {reason}")]
    CreateFailed { path: PathBuf, reason: String },

    #[error("Failed to access env file {path}: {reason}")]
    EnvFileError { path: PathBuf, reason: String },

    /// A key or value that cannot be written to the env file.
    #[error("Invalid env entry '{key}': {reason}")]
    InvalidEnvEntry { key: String, reason: String },
}
