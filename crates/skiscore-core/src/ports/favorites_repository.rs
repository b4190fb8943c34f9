//! Favourite resorts repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::SkiResort;

/// Persistence for favourite resorts, keyed by [`SkiResort::key`].
#[async_trait]
pub trait FavoritesRepository: Send + Sync {
    /// Favourites in the order they were added.
    async fn list(&self) -> Result<Vec<SkiResort>, RepositoryError>;

    /// Add a favourite. Returns `false` if the key was already stored.
    async fn add(&self, resort: &SkiResort) -> Result<bool, RepositoryError>;

    /// Remove by key. Returns `false` if nothing was stored under it.
    async fn remove(&self, key: &str) -> Result<bool, RepositoryError>;

    async fn contains(&self, key: &str) -> Result<bool, RepositoryError>;
}
