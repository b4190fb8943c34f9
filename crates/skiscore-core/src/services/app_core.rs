//! `AppCore` - the primary application facade.
//!
//! Adapters receive an `AppCore` built at their composition root and reach
//! every core service through it.

use std::sync::Arc;

use super::{FavoritesService, ResortService, SessionService, SettingsService};
use crate::ports::{Repos, WeatherPort};
use crate::tracker::{TrackerConfig, TrackerService};

pub struct AppCore {
    resorts: ResortService,
    favorites: FavoritesService,
    sessions: SessionService,
    settings: SettingsService,
}

impl AppCore {
    /// Wire the services from repositories and a weather provider.
    pub fn new(repos: Repos, weather: Arc<dyn WeatherPort>) -> Self {
        Self {
            resorts: ResortService::new(
                weather,
                Arc::clone(&repos.favorites),
                Arc::clone(&repos.settings),
            ),
            favorites: FavoritesService::new(repos.favorites),
            sessions: SessionService::new(repos.sessions),
            settings: SettingsService::new(repos.settings),
        }
    }

    pub const fn resorts(&self) -> &ResortService {
        &self.resorts
    }

    pub const fn favorites(&self) -> &FavoritesService {
        &self.favorites
    }

    pub const fn sessions(&self) -> &SessionService {
        &self.sessions
    }

    pub const fn settings(&self) -> &SettingsService {
        &self.settings
    }

    /// Start a tracking session. Must be called within a tokio runtime.
    #[must_use]
    pub fn start_tracking(&self, config: TrackerConfig) -> TrackerService {
        TrackerService::start(config)
    }
}
