//! Settings service - orchestrates settings operations.

use std::sync::Arc;

use crate::ports::{CoreError, SettingsRepository};
use crate::settings::{Settings, SettingsUpdate, validate_settings};

/// Service for settings operations.
pub struct SettingsService {
    repo: Arc<dyn SettingsRepository>,
}

impl SettingsService {
    pub fn new(repo: Arc<dyn SettingsRepository>) -> Self {
        Self { repo }
    }

    /// Current settings (defaults when nothing is stored).
    pub async fn get(&self) -> Result<Settings, CoreError> {
        self.repo.load().await.map_err(CoreError::from)
    }

    /// Apply a partial update. Nothing is saved if the result is invalid.
    pub async fn update(&self, update: SettingsUpdate) -> Result<Settings, CoreError> {
        let mut current = self.repo.load().await?;
        current.merge(&update);
        validate_settings(&current)?;
        self.repo.save(&current).await?;
        tracing::debug!(?current, "settings updated");
        Ok(current)
    }
}
