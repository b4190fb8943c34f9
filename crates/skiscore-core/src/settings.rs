//! Settings domain types and validation.
//!
//! Settings are stored as a whole by the settings repository. Fields are
//! optional so older stored blobs and partial updates fall back to defaults.

use serde::{Deserialize, Serialize};

/// Default language for condition descriptions and place names.
pub const DEFAULT_LANGUAGE: &str = "it";

/// Default number of matches returned by a place search.
pub const DEFAULT_SEARCH_RESULT_COUNT: u32 = 8;

/// Default unit system for weather requests.
pub const DEFAULT_UNITS: &str = "metric";

/// Unit systems accepted by the weather provider.
pub const SUPPORTED_UNITS: &[&str] = &["metric", "imperial", "standard"];

/// Application settings structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Two-letter language code sent to the weather and geocoding APIs.
    pub language: Option<String>,

    /// Maximum number of place search matches (1-100).
    pub search_result_count: Option<u32>,

    /// Unit system requested from the weather API.
    pub units: Option<String>,
}

impl Settings {
    /// Create settings with defaults filled in.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            language: Some(DEFAULT_LANGUAGE.to_string()),
            search_result_count: Some(DEFAULT_SEARCH_RESULT_COUNT),
            units: Some(DEFAULT_UNITS.to_string()),
        }
    }

    #[must_use]
    pub fn effective_language(&self) -> &str {
        self.language.as_deref().unwrap_or(DEFAULT_LANGUAGE)
    }

    #[must_use]
    pub const fn effective_search_result_count(&self) -> u32 {
        match self.search_result_count {
            Some(count) => count,
            None => DEFAULT_SEARCH_RESULT_COUNT,
        }
    }

    #[must_use]
    pub fn effective_units(&self) -> &str {
        self.units.as_deref().unwrap_or(DEFAULT_UNITS)
    }

    /// Apply a partial update, only touching fields that are `Some`.
    pub fn merge(&mut self, other: &SettingsUpdate) {
        if let Some(ref language) = other.language {
            self.language.clone_from(language);
        }
        if let Some(count) = other.search_result_count {
            self.search_result_count = count;
        }
        if let Some(ref units) = other.units {
            self.units.clone_from(units);
        }
    }
}

/// Partial settings update.
///
/// `None` leaves a field unchanged, `Some(None)` resets it to its default and
/// `Some(Some(v))` sets it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsUpdate {
    pub language: Option<Option<String>>,
    pub search_result_count: Option<Option<u32>>,
    pub units: Option<Option<String>>,
}

impl SettingsUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.language.is_none() && self.search_result_count.is_none() && self.units.is_none()
    }
}

/// Settings validation error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsError {
    #[error("Language must be a two-letter code, got '{0}'")]
    InvalidLanguage(String),

    #[error("Search result count must be between 1 and 100, got {0}")]
    InvalidResultCount(u32),

    #[error("Units must be one of metric, imperial, standard, got '{0}'")]
    InvalidUnits(String),
}

/// Validate settings values.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    if let Some(ref language) = settings.language {
        if language.len() != 2 || !language.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(SettingsError::InvalidLanguage(language.clone()));
        }
    }

    if let Some(count) = settings.search_result_count {
        if !(1..=100).contains(&count) {
            return Err(SettingsError::InvalidResultCount(count));
        }
    }

    if let Some(ref units) = settings.units {
        if !SUPPORTED_UNITS.contains(&units.as_str()) {
            return Err(SettingsError::InvalidUnits(units.clone()));
        }
    }

    Ok(())
}
