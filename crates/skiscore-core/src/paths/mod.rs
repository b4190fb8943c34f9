//! Path utilities for SkiScore data directories.
//!
//! - Data root (overridable with `SKISCORE_DATA_DIR`)
//! - Database location
//! - `.env` file holding user overrides such as the API key
//!
//! Functions return `PathBuf` and `PathError`; no terminal I/O happens here.

mod config;
mod database;
mod error;
mod platform;

#[cfg(test)]
mod test_utils;

pub use config::{API_KEY_ENV, env_file_path, persist_api_key, persist_env_value};
pub use database::{DATABASE_FILE, database_path};
pub use error::PathError;
pub use platform::{APP_DIR_NAME, DATA_DIR_ENV, data_root};

use std::path::PathBuf;

/// All resolved locations, for display.
#[derive(Debug, Clone)]
pub struct ResolvedPaths {
    pub data_root: PathBuf,
    pub database: PathBuf,
    pub env_file: PathBuf,
    /// Whether `SKISCORE_DATA_DIR` chose the data root.
    pub from_env: bool,
}

impl ResolvedPaths {
    pub fn resolve() -> Result<Self, PathError> {
        Ok(Self {
            data_root: data_root()?,
            database: database_path()?,
            env_file: env_file_path()?,
            from_env: std::env::var_os(DATA_DIR_ENV).is_some(),
        })
    }
}

impl std::fmt::Display for ResolvedPaths {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let source = if self.from_env { DATA_DIR_ENV } else { "default" };
        writeln!(f, "data_root = {} ({source})", self.data_root.display())?;
        writeln!(f, "database  = {}", self.database.display())?;
        write!(f, "env_file  = {}", self.env_file.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::test_utils::{ENV_LOCK, EnvVarGuard};

    #[test]
    fn resolve_under_override() {
        let _lock = ENV_LOCK.lock().unwrap();
        let temp = tempfile::tempdir().unwrap();
        let _env = EnvVarGuard::set(DATA_DIR_ENV, temp.path().to_string_lossy().as_ref());

        let paths = ResolvedPaths::resolve().unwrap();
        assert!(paths.from_env);
        assert_eq!(paths.data_root, temp.path());
        assert_eq!(paths.database, temp.path().join("data").join(DATABASE_FILE));
        assert_eq!(paths.env_file, temp.path().join(".env"));

        let shown = paths.to_string();
        assert!(shown.contains("(SKISCORE_DATA_DIR)"));
        assert!(shown.lines().any(|l| l.starts_with("database  = ")));
    }
}
