//! Favourite resorts.

use std::sync::Arc;

use crate::domain::SkiResort;
use crate::ports::{CoreError, FavoritesRepository};

pub struct FavoritesService {
    repo: Arc<dyn FavoritesRepository>,
}

impl FavoritesService {
    pub fn new(repo: Arc<dyn FavoritesRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<SkiResort>, CoreError> {
        Ok(self.repo.list().await?)
    }

    /// Add a favourite. Returns `false` if it was already a favourite.
    pub async fn add(&self, resort: &SkiResort) -> Result<bool, CoreError> {
        validate_resort(resort)?;
        let added = self.repo.add(resort).await?;
        if added {
            tracing::info!(key = %resort.key(), "favourite added");
        }
        Ok(added)
    }

    /// Remove a favourite by key. Returns `false` if it was not stored.
    pub async fn remove(&self, key: &str) -> Result<bool, CoreError> {
        let removed = self.repo.remove(key).await?;
        if removed {
            tracing::info!(key, "favourite removed");
        }
        Ok(removed)
    }

    pub async fn is_favorite(&self, key: &str) -> Result<bool, CoreError> {
        Ok(self.repo.contains(key).await?)
    }

    /// Flip the favourite state and return the new state.
    pub async fn toggle(&self, resort: &SkiResort) -> Result<bool, CoreError> {
        let key = resort.key();
        if self.repo.contains(&key).await? {
            self.remove(&key).await?;
            Ok(false)
        } else {
            self.add(resort).await?;
            Ok(true)
        }
    }
}

pub(crate) fn validate_resort(resort: &SkiResort) -> Result<(), CoreError> {
    if resort.name.trim().is_empty() {
        return Err(CoreError::Validation("resort name cannot be empty".into()));
    }
    validate_coordinates(resort.latitude, resort.longitude)
}

pub(crate) fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), CoreError> {
    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return Err(CoreError::Validation(format!(
            "coordinates out of range: {latitude}, {longitude}"
        )));
    }
    Ok(())
}
