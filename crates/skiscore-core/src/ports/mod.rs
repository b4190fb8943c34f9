//! Port definitions (trait abstractions) for external systems.
//!
//! Ports use only domain types. Storage and HTTP details stay in the
//! adapter crates (`skiscore-db`, `skiscore-owm`).

use std::sync::Arc;

use thiserror::Error;

mod favorites_repository;
mod session_repository;
mod settings_repository;
mod weather;

pub use favorites_repository::FavoritesRepository;
pub use session_repository::SessionRepository;
pub use settings_repository::SettingsRepository;
pub use weather::{WeatherPort, WeatherPortError, WeatherPortResult};

/// Container for all repository trait objects.
///
/// Built by `skiscore_db::CoreFactory::build_repos` and handed to
/// [`AppCore`](crate::services::AppCore).
#[derive(Clone)]
pub struct Repos {
    pub sessions: Arc<dyn SessionRepository>,
    pub favorites: Arc<dyn FavoritesRepository>,
    pub settings: Arc<dyn SettingsRepository>,
}

impl Repos {
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        favorites: Arc<dyn FavoritesRepository>,
        settings: Arc<dyn SettingsRepository>,
    ) -> Self {
        Self {
            sessions,
            favorites,
            settings,
        }
    }
}

/// Domain-specific errors for repository operations.
///
/// Storage implementation details (e.g. sqlx errors) are flattened into
/// these variants.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An entity with the same identifier already exists.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Weather(#[from] WeatherPortError),

    #[error(transparent)]
    Settings(#[from] crate::settings::SettingsError),

    #[error(transparent)]
    Tracker(#[from] crate::tracker::TrackerError),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error (unexpected condition).
    #[error("Internal error: {0}")]
    Internal(String),
}
