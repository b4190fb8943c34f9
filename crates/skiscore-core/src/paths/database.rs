//! Database path resolution.

use std::fs;
use std::path::PathBuf;

use super::error::PathError;
use super::platform::data_root;

pub const DATABASE_FILE: &str = "skiscore.db";

/// Path to the `SQLite` database, `<data root>/data/skiscore.db`.
///
/// The `data/` subdirectory is created if it doesn't exist.
pub fn database_path() -> Result<PathBuf, PathError> {
    let data_dir = data_root()?.join("data");

    fs::create_dir_all(&data_dir).map_err(|e| PathError::CreateFailed {
        path: data_dir.clone(),
        reason: e.to_string(),
    })?;

    Ok(data_dir.join(DATABASE_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::DATA_DIR_ENV;
    use crate::paths::test_utils::{ENV_LOCK, EnvVarGuard};

    #[test]
    fn database_lives_in_data_subdir() {
        let _lock = ENV_LOCK.lock().unwrap();
        let temp = tempfile::tempdir().unwrap();
        let _env = EnvVarGuard::set(DATA_DIR_ENV, temp.path().to_string_lossy().as_ref());

        let path = database_path().unwrap();
        assert!(path.ends_with("data/skiscore.db"));
        assert!(temp.path().join("data").is_dir());
    }
}
