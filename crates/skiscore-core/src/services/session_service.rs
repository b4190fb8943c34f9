//! Session diary.

use std::sync::Arc;

use crate::domain::{NewSkiSession, SeasonStats, SkiSession};
use crate::ports::{CoreError, SessionRepository};

pub struct SessionService {
    repo: Arc<dyn SessionRepository>,
}

impl SessionService {
    pub fn new(repo: Arc<dyn SessionRepository>) -> Self {
        Self { repo }
    }

    /// Store a finished session.
    pub async fn record(&self, session: &NewSkiSession) -> Result<SkiSession, CoreError> {
        if let Some(field) = session.invalid_field() {
            return Err(CoreError::Validation(format!(
                "session {field} must be a non-negative number"
            )));
        }
        let stored = self.repo.insert(session).await?;
        tracing::info!(id = stored.id, distance_km = stored.distance_km, "session recorded");
        Ok(stored)
    }

    /// Sessions newest first, optionally capped at `limit`.
    pub async fn list(&self, limit: Option<usize>) -> Result<Vec<SkiSession>, CoreError> {
        let mut sessions = self.repo.list().await?;
        if let Some(limit) = limit {
            sessions.truncate(limit);
        }
        Ok(sessions)
    }

    pub async fn season_stats(&self) -> Result<SeasonStats, CoreError> {
        Ok(SeasonStats {
            total_distance_km: self.repo.total_distance_km().await?,
            max_speed_kmh: self.repo.max_speed_kmh().await?,
            days_skied: self.repo.days_skied().await?,
        })
    }

    pub async fn delete(&self, id: i64) -> Result<(), CoreError> {
        self.repo.delete(id).await?;
        tracing::info!(id, "session deleted");
        Ok(())
    }
}
