//! CLI bootstrap - the composition root.
//!
//! The only place where concrete adapters are instantiated:
//! - Database pool and repositories (via skiscore-db)
//! - Weather client (via skiscore-owm)
//! - Core services (via skiscore-core)

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use skiscore_core::paths::{API_KEY_ENV, database_path};
use skiscore_core::ports::{Repos, WeatherPort};
use skiscore_core::services::AppCore;
use skiscore_db::{CoreFactory, setup_database};
use skiscore_owm::{DefaultOwmClient, OwmClientConfig};

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// OpenWeatherMap API key. Weather commands fail without one.
    pub api_key: Option<String>,
    /// HTTP timeout override.
    pub timeout: Option<Duration>,
}

impl CliConfig {
    /// Read the API key from the environment (after `.env` files are loaded).
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var(API_KEY_ENV).ok(),
            timeout: None,
        }
    }

    /// Override the HTTP timeout. Zero or `None` keeps the client default.
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: Option<u64>) -> Self {
        self.timeout = secs.filter(|s| *s > 0).map(Duration::from_secs);
        self
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    pub app: AppCore,
}

impl CliContext {
    pub const fn app(&self) -> &AppCore {
        &self.app
    }
}

/// Bootstrap the CLI application.
///
/// 1. Opens the database with full schema setup
/// 2. Builds the weather client using the stored language setting
/// 3. Assembles the `AppCore`
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    let db_path = database_path()?;
    let pool = setup_database(&db_path).await?;
    let repos = CoreFactory::build_repos(pool);

    let settings = repos.settings.load().await?;
    let mut client_config = OwmClientConfig::new()
        .with_optional_api_key(config.api_key)
        .with_language(settings.effective_language());
    if let Some(timeout) = config.timeout {
        client_config = client_config.with_timeout(timeout);
    }
    let weather: Arc<dyn WeatherPort> = Arc::new(DefaultOwmClient::new(&client_config)?);

    Ok(bootstrap_with(repos, weather))
}

/// Bootstrap with custom repos and weather provider (for testing).
pub fn bootstrap_with(repos: Repos, weather: Arc<dyn WeatherPort>) -> CliContext {
    CliContext {
        app: AppCore::new(repos, weather),
    }
}
