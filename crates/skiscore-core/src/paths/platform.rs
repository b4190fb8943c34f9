//! Data root resolution.

use std::env;
use std::fs;
use std::path::PathBuf;

use super::error::PathError;

/// Environment variable overriding the data root.
pub const DATA_DIR_ENV: &str = "SKISCORE_DATA_DIR";

/// Directory name under the platform data directory.
pub const APP_DIR_NAME: &str = "skiscore";

/// Root directory for application data (database, `.env`).
///
/// Resolution order:
/// 1. `SKISCORE_DATA_DIR`
/// 2. Platform local data directory, e.g. `~/.local/share/skiscore`
///
/// The directory is created if missing.
pub fn data_root() -> Result<PathBuf, PathError> {
    let root = match env::var(DATA_DIR_ENV) {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => dirs::data_local_dir()
            .ok_or(PathError::NoDataDir)?
            .join(APP_DIR_NAME),
    };

    if !root.exists() {
        fs::create_dir_all(&root).map_err(|e| PathError::CreateFailed {
            path: root.clone(),
            reason: e.to_string(),
        })?;
    }

    Ok(root)
}
