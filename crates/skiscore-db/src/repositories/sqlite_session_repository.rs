//! `SQLite` implementation of the `SessionRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use skiscore_core::{NewSkiSession, RepositoryError, SessionRepository, SkiSession};

use super::row_mappers::{SESSION_SELECT_COLUMNS, format_datetime, row_to_session};

/// Session diary stored in the `ski_sessions` table.
pub struct SqliteSessionRepository {
    pool: SqlitePool,
}

impl SqliteSessionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for SqliteSessionRepository {
    async fn insert(&self, session: &NewSkiSession) -> Result<SkiSession, RepositoryError> {
        let result = sqlx::query(
            r#"INSERT INTO ski_sessions (
                recorded_at, duration_ms, max_speed_kmh, avg_speed_kmh, distance_km, vertical_drop_m
            ) VALUES (?, ?, ?, ?, ?, ?)"#,
        )
        .bind(format_datetime(&session.recorded_at))
        .bind(session.duration_ms)
        .bind(session.max_speed_kmh)
        .bind(session.avg_speed_kmh)
        .bind(session.distance_km)
        .bind(session.vertical_drop_m)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        let id = result.last_insert_rowid();
        tracing::debug!(id, distance_km = session.distance_km, "session stored");

        Ok(SkiSession {
            id,
            recorded_at: session.recorded_at,
            duration_ms: session.duration_ms,
            max_speed_kmh: session.max_speed_kmh,
            avg_speed_kmh: session.avg_speed_kmh,
            distance_km: session.distance_km,
            vertical_drop_m: session.vertical_drop_m,
        })
    }

    async fn list(&self) -> Result<Vec<SkiSession>, RepositoryError> {
        let query = format!(
            "SELECT {SESSION_SELECT_COLUMNS} FROM ski_sessions ORDER BY recorded_at DESC, id DESC"
        );

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        rows.iter().map(row_to_session).collect()
    }

    async fn total_distance_km(&self) -> Result<f64, RepositoryError> {
        let (total,): (f64,) =
            sqlx::query_as("SELECT COALESCE(SUM(distance_km), 0.0) FROM ski_sessions")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| RepositoryError::Storage(e.to_string()))?;
        Ok(total)
    }

    async fn max_speed_kmh(&self) -> Result<f64, RepositoryError> {
        let (max,): (f64,) =
            sqlx::query_as("SELECT COALESCE(MAX(max_speed_kmh), 0.0) FROM ski_sessions")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| RepositoryError::Storage(e.to_string()))?;
        Ok(max)
    }

    async fn days_skied(&self) -> Result<i64, RepositoryError> {
        let (days,): (i64,) =
            sqlx::query_as("SELECT COUNT(DISTINCT date(recorded_at)) FROM ski_sessions")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| RepositoryError::Storage(e.to_string()))?;
        Ok(days)
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM ski_sessions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Session with ID {id}")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;
    use chrono::{DateTime, TimeZone, Utc};

    async fn repo() -> SqliteSessionRepository {
        SqliteSessionRepository::new(setup_test_database().await.unwrap())
    }

    fn at(ts: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(ts).unwrap().with_timezone(&Utc)
    }

    fn session(recorded_at: DateTime<Utc>, distance_km: f64, max_speed_kmh: f64) -> NewSkiSession {
        NewSkiSession {
            recorded_at,
            duration_ms: 5_400_000,
            max_speed_kmh,
            avg_speed_kmh: 24.0,
            distance_km,
            vertical_drop_m: 1200.0,
        }
    }

    #[tokio::test]
    async fn test_empty_diary_aggregates_are_zero() {
        let repo = repo().await;
        assert!(repo.list().await.unwrap().is_empty());
        assert!(repo.total_distance_km().await.unwrap().abs() < f64::EPSILON);
        assert!(repo.max_speed_kmh().await.unwrap().abs() < f64::EPSILON);
        assert_eq!(repo.days_skied().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_insert_and_list_newest_first() {
        let repo = repo().await;
        let first = repo
            .insert(&session(at("2026-01-10T09:00:00Z"), 12.5, 61.0))
            .await
            .unwrap();
        let second = repo
            .insert(&session(at("2026-01-12T10:30:00Z"), 8.0, 70.2))
            .await
            .unwrap();
        assert!(second.id > first.id);

        let listed = repo.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0], second);
        assert_eq!(listed[1], first);
    }

    #[tokio::test]
    async fn test_season_aggregates() {
        let repo = repo().await;
        repo.insert(&session(at("2026-01-10T09:00:00Z"), 12.5, 61.0)).await.unwrap();
        repo.insert(&session(at("2026-01-10T14:00:00Z"), 4.5, 48.0)).await.unwrap();
        repo.insert(&session(at("2026-01-12T10:30:00Z"), 8.0, 70.2)).await.unwrap();

        assert!((repo.total_distance_km().await.unwrap() - 25.0).abs() < 1e-9);
        assert!((repo.max_speed_kmh().await.unwrap() - 70.2).abs() < 1e-9);
        assert_eq!(repo.days_skied().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_recorded_at_keeps_millis() {
        let repo = repo().await;
        let recorded_at = Utc.timestamp_millis_opt(1_768_035_600_123).unwrap();
        repo.insert(&session(recorded_at, 1.0, 10.0)).await.unwrap();
        assert_eq!(repo.list().await.unwrap()[0].recorded_at, recorded_at);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = repo().await;
        let stored = repo
            .insert(&session(at("2026-01-10T09:00:00Z"), 12.5, 61.0))
            .await
            .unwrap();

        repo.delete(stored.id).await.unwrap();
        assert!(repo.list().await.unwrap().is_empty());
        assert!(matches!(
            repo.delete(stored.id).await,
            Err(RepositoryError::NotFound(_))
        ));
    }
}
