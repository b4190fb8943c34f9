//! `SQLite` implementation of the `FavoritesRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use skiscore_core::{FavoritesRepository, RepositoryError, SkiResort};

use super::row_mappers::{FAVORITE_SELECT_COLUMNS, format_datetime, row_to_resort};

/// Favourite resorts keyed by [`SkiResort::key`].
pub struct SqliteFavoritesRepository {
    pool: SqlitePool,
}

impl SqliteFavoritesRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FavoritesRepository for SqliteFavoritesRepository {
    async fn list(&self) -> Result<Vec<SkiResort>, RepositoryError> {
        let query = format!("SELECT {FAVORITE_SELECT_COLUMNS} FROM favorites ORDER BY id ASC");

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        rows.iter().map(row_to_resort).collect()
    }

    async fn add(&self, resort: &SkiResort) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"INSERT INTO favorites (resort_key, name, country, latitude, longitude, added_at)
            VALUES (?, ?, ?, ?, ?, ?)
            ON CONFLICT(resort_key) DO NOTHING"#,
        )
        .bind(resort.key())
        .bind(&resort.name)
        .bind(&resort.country)
        .bind(resort.latitude)
        .bind(resort.longitude)
        .bind(format_datetime(&chrono::Utc::now()))
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn remove(&self, key: &str) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM favorites WHERE resort_key = ?")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn contains(&self, key: &str) -> Result<bool, RepositoryError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM favorites WHERE resort_key = ?")
            .bind(key)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        Ok(count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;

    async fn repo() -> SqliteFavoritesRepository {
        SqliteFavoritesRepository::new(setup_test_database().await.unwrap())
    }

    #[tokio::test]
    async fn test_add_list_in_insertion_order() {
        let repo = repo().await;
        let cortina = SkiResort::new("Cortina d'Ampezzo", Some("Italia".into()), 46.536, 12.139);
        let livigno = SkiResort::new("Livigno", None, 46.538, 10.135);

        assert!(repo.add(&cortina).await.unwrap());
        assert!(repo.add(&livigno).await.unwrap());

        let listed = repo.list().await.unwrap();
        assert_eq!(listed, vec![cortina.clone(), livigno]);
        assert_eq!(listed[0].country.as_deref(), Some("Italia"));
    }

    #[tokio::test]
    async fn test_duplicate_add_is_noop() {
        let repo = repo().await;
        let resort = SkiResort::new("Livigno", None, 46.538, 10.135);
        assert!(repo.add(&resort).await.unwrap());
        assert!(!repo.add(&resort).await.unwrap());
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_remove_and_contains() {
        let repo = repo().await;
        let resort = SkiResort::new("Livigno", None, 46.538, 10.135);
        repo.add(&resort).await.unwrap();
        assert!(repo.contains(&resort.key()).await.unwrap());

        assert!(repo.remove(&resort.key()).await.unwrap());
        assert!(!repo.contains(&resort.key()).await.unwrap());
        assert!(!repo.remove(&resort.key()).await.unwrap());
    }

    #[tokio::test]
    async fn test_same_name_different_coordinates_are_distinct() {
        let repo = repo().await;
        repo.add(&SkiResort::new("San Martino", None, 46.26, 11.80)).await.unwrap();
        repo.add(&SkiResort::new("San Martino", None, 45.10, 7.40)).await.unwrap();
        assert_eq!(repo.list().await.unwrap().len(), 2);
    }
}
