//! Public configuration for the weather client.
//!
//! The internal config (parsed URLs) is derived from this when the client
//! is built.

use std::time::Duration;

pub const DEFAULT_WEATHER_BASE_URL: &str = "https://api.openweathermap.org";
pub const DEFAULT_GEOCODING_BASE_URL: &str = "https://geocoding-api.open-meteo.com";

/// Configuration for the weather client.
///
/// # Example
///
/// ```
/// use skiscore_owm::OwmClientConfig;
/// use std::time::Duration;
///
/// let config = OwmClientConfig::new()
///     .with_api_key("0123456789abcdef")
///     .with_language("en")
///     .with_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct OwmClientConfig {
    pub(crate) weather_base_url: String,
    pub(crate) geocoding_base_url: String,
    /// Checked when a weather request is made, not when the client is built.
    pub(crate) api_key: Option<String>,
    /// Unit system; scoring expects `metric`.
    pub(crate) units: String,
    pub(crate) language: String,
    pub(crate) user_agent: String,
    pub(crate) timeout: Duration,
    pub(crate) max_retries: u8,
    pub(crate) retry_base_delay: Duration,
}

impl Default for OwmClientConfig {
    fn default() -> Self {
        Self {
            weather_base_url: DEFAULT_WEATHER_BASE_URL.to_string(),
            geocoding_base_url: DEFAULT_GEOCODING_BASE_URL.to_string(),
            api_key: None,
            units: "metric".to_string(),
            language: "it".to_string(),
            user_agent: concat!("skiscore/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(15),
            max_retries: 3,
            retry_base_delay: Duration::from_millis(500),
        }
    }
}

impl OwmClientConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Base URL for current weather and forecasts.
    #[must_use]
    pub fn with_weather_base_url(mut self, url: impl Into<String>) -> Self {
        self.weather_base_url = url.into();
        self
    }

    /// Base URL for place search.
    #[must_use]
    pub fn with_geocoding_base_url(mut self, url: impl Into<String>) -> Self {
        self.geocoding_base_url = url.into();
        self
    }

    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the API key if one is available. Blank keys count as missing.
    #[must_use]
    pub fn with_optional_api_key(mut self, key: Option<String>) -> Self {
        self.api_key = key.filter(|k| !k.trim().is_empty());
        self
    }

    #[must_use]
    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = units.into();
        self
    }

    /// Language for condition descriptions and place names.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Request timeout. Defaults to 15 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Retry attempts for transient errors. Defaults to 3.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u8) -> Self {
        self.max_retries = retries;
        self
    }

    /// Base delay for exponential backoff. Defaults to 500ms.
    #[must_use]
    pub const fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}
