//! `.env` file holding user configuration overrides.

use std::fs;
use std::path::PathBuf;

use super::error::PathError;
use super::platform::data_root;

/// Environment variable holding the OpenWeatherMap API key.
pub const API_KEY_ENV: &str = "SKISCORE_OWM_API_KEY";

/// Location of the `.env` file in the data root.
pub fn env_file_path() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join(".env"))
}

/// Set `key=value` in the `.env` file, replacing an existing entry.
///
/// Other lines (comments, unrelated keys) are preserved.
pub fn persist_env_value(key: &str, value: &str) -> Result<(), PathError> {
    if key.is_empty() || key.contains(['=', '\n', ' ']) {
        return Err(PathError::InvalidEnvEntry {
            key: key.to_string(),
            reason: "keys must be non-empty without '=', spaces or newlines".into(),
        });
    }
    if value.contains('\n') {
        return Err(PathError::InvalidEnvEntry {
            key: key.to_string(),
            reason: "values cannot span lines".into(),
        });
    }

    let env_path = env_file_path()?;
    let io_err = |e: std::io::Error| PathError::EnvFileError {
        path: env_path.clone(),
        reason: e.to_string(),
    };

    let existing = if env_path.exists() {
        fs::read_to_string(&env_path).map_err(io_err)?
    } else {
        String::new()
    };

    let entry = format!("{key}={value}");
    let mut replaced = false;
    let mut lines: Vec<String> = Vec::new();
    for line in existing.lines() {
        match line.split_once('=') {
            Some((lhs, _)) if lhs.trim() == key => {
                if !replaced {
                    lines.push(entry.clone());
                    replaced = true;
                }
            }
            _ => lines.push(line.to_string()),
        }
    }
    if !replaced {
        lines.push(entry);
    }

    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(&env_path, content).map_err(io_err)?;
    tracing::debug!(key, path = %env_path.display(), "persisted env value");
    Ok(())
}

/// Store the weather API key in the `.env` file.
pub fn persist_api_key(api_key: &str) -> Result<(), PathError> {
    persist_env_value(API_KEY_ENV, api_key.trim())
}
