//! Session diary repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewSkiSession, SkiSession};

/// Persistence for recorded ski sessions.
///
/// Aggregates return 0 on an empty diary.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Store a session and return it with its assigned id.
    async fn insert(&self, session: &NewSkiSession) -> Result<SkiSession, RepositoryError>;

    /// All sessions, newest first.
    async fn list(&self) -> Result<Vec<SkiSession>, RepositoryError>;

    /// Sum of distance over all sessions, km.
    async fn total_distance_km(&self) -> Result<f64, RepositoryError>;

    /// Highest max speed over all sessions, km/h.
    async fn max_speed_kmh(&self) -> Result<f64, RepositoryError>;

    /// Number of distinct UTC days with at least one session.
    async fn days_skied(&self) -> Result<i64, RepositoryError>;

    /// Delete a session.
    ///
    /// Returns `RepositoryError::NotFound` if no session has this id.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
