//! Composition utilities for building `AppCore` with `SQLite` backends.
//!
//! Construction only. No domain logic lives here.

use sqlx::SqlitePool;
use std::sync::Arc;

use skiscore_core::ports::WeatherPort;
use skiscore_core::services::AppCore;
use skiscore_core::Repos;

use crate::repositories::{
    SqliteFavoritesRepository, SqliteSessionRepository, SqliteSettingsRepository,
};

/// Factory for creating repository instances with `SQLite` backends.
pub struct CoreFactory;

impl CoreFactory {
    /// Build all `SQLite` repositories from a pool.
    pub fn build_repos(pool: SqlitePool) -> Repos {
        Repos::new(
            Arc::new(SqliteSessionRepository::new(pool.clone())),
            Arc::new(SqliteFavoritesRepository::new(pool.clone())),
            Arc::new(SqliteSettingsRepository::new(pool)),
        )
    }

    /// Build a complete `AppCore` from a pool and a weather provider.
    ///
    /// ```ignore
    /// use skiscore_db::{CoreFactory, setup_database};
    /// use skiscore_owm::{DefaultOwmClient, OwmClientConfig};
    ///
    /// let pool = setup_database(&db_path).await?;
    /// let weather = Arc::new(DefaultOwmClient::new(&OwmClientConfig::new())?);
    /// let core = CoreFactory::build_app_core(pool, weather);
    /// ```
    pub fn build_app_core(pool: SqlitePool, weather: Arc<dyn WeatherPort>) -> AppCore {
        AppCore::new(Self::build_repos(pool), weather)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;
    use skiscore_core::{NewSkiSession, SkiResort};

    #[tokio::test]
    async fn test_build_repos_share_pool() {
        let pool = setup_test_database().await.unwrap();
        let repos = CoreFactory::build_repos(pool);

        let resort = SkiResort::new("Cervinia", None, 45.93, 7.63);
        assert!(repos.favorites.add(&resort).await.unwrap());

        repos
            .sessions
            .insert(&NewSkiSession {
                recorded_at: chrono::Utc::now(),
                duration_ms: 60_000,
                max_speed_kmh: 40.0,
                avg_speed_kmh: 20.0,
                distance_km: 0.3,
                vertical_drop_m: 50.0,
            })
            .await
            .unwrap();

        assert_eq!(repos.favorites.list().await.unwrap().len(), 1);
        assert_eq!(repos.sessions.list().await.unwrap().len(), 1);
        assert_eq!(
            repos.settings.load().await.unwrap(),
            skiscore_core::Settings::with_defaults()
        );
    }
}
