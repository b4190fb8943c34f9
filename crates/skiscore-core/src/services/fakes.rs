//! In-memory repositories for service tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{NewSkiSession, SkiResort, SkiSession};
use crate::ports::{FavoritesRepository, RepositoryError, SessionRepository, SettingsRepository};
use crate::settings::Settings;

#[derive(Default)]
pub struct InMemoryFavorites {
    items: Mutex<Vec<SkiResort>>,
}

impl InMemoryFavorites {
    pub fn with(resorts: Vec<SkiResort>) -> Self {
        Self {
            items: Mutex::new(resorts),
        }
    }
}

#[async_trait]
impl FavoritesRepository for InMemoryFavorites {
    async fn list(&self) -> Result<Vec<SkiResort>, RepositoryError> {
        Ok(self.items.lock().unwrap().clone())
    }

    async fn add(&self, resort: &SkiResort) -> Result<bool, RepositoryError> {
        let mut items = self.items.lock().unwrap();
        if items.iter().any(|r| r.key() == resort.key()) {
            return Ok(false);
        }
        items.push(resort.clone());
        Ok(true)
    }

    async fn remove(&self, key: &str) -> Result<bool, RepositoryError> {
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|r| r.key() != key);
        Ok(items.len() != before)
    }

    async fn contains(&self, key: &str) -> Result<bool, RepositoryError> {
        Ok(self.items.lock().unwrap().iter().any(|r| r.key() == key))
    }
}

#[derive(Default)]
pub struct InMemorySessions {
    items: Mutex<Vec<SkiSession>>,
}

#[async_trait]
impl SessionRepository for InMemorySessions {
    async fn insert(&self, session: &NewSkiSession) -> Result<SkiSession, RepositoryError> {
        let mut items = self.items.lock().unwrap();
        let stored = SkiSession {
            id: i64::try_from(items.len()).unwrap() + 1,
            recorded_at: session.recorded_at,
            duration_ms: session.duration_ms,
            max_speed_kmh: session.max_speed_kmh,
            avg_speed_kmh: session.avg_speed_kmh,
            distance_km: session.distance_km,
            vertical_drop_m: session.vertical_drop_m,
        };
        items.push(stored.clone());
        Ok(stored)
    }

    async fn list(&self) -> Result<Vec<SkiSession>, RepositoryError> {
        let mut items = self.items.lock().unwrap().clone();
        items.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
        Ok(items)
    }

    async fn total_distance_km(&self) -> Result<f64, RepositoryError> {
        Ok(self.items.lock().unwrap().iter().map(|s| s.distance_km).sum())
    }

    async fn max_speed_kmh(&self) -> Result<f64, RepositoryError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .map(|s| s.max_speed_kmh)
            .fold(0.0, f64::max))
    }

    async fn days_skied(&self) -> Result<i64, RepositoryError> {
        let mut days: Vec<_> = self
            .items
            .lock()
            .unwrap()
            .iter()
            .map(|s| s.recorded_at.date_naive())
            .collect();
        days.sort_unstable();
        days.dedup();
        Ok(i64::try_from(days.len()).unwrap())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|s| s.id != id);
        if items.len() == before {
            return Err(RepositoryError::NotFound(format!("session {id}")));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemorySettings {
    settings: Mutex<Option<Settings>>,
}

#[async_trait]
impl SettingsRepository for InMemorySettings {
    async fn load(&self) -> Result<Settings, RepositoryError> {
        Ok(self
            .settings
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(Settings::with_defaults))
    }

    async fn save(&self, settings: &Settings) -> Result<(), RepositoryError> {
        *self.settings.lock().unwrap() = Some(settings.clone());
        Ok(())
    }
}
