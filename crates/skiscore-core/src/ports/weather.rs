//! Weather provider port.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{CurrentWeather, ForecastSlot, LocationMatch};

/// Errors from weather provider operations.
///
/// Implementation-specific errors (HTTP, JSON) are mapped to these.
#[derive(Debug, Error)]
pub enum WeatherPortError {
    /// Nothing is known about the requested location.
    #[error("Location not found: {message}")]
    NotFound { message: String },

    /// The API key was rejected or is missing.
    #[error("Weather API rejected the API key")]
    Unauthorized,

    #[error("Rate limit exceeded, try again later")]
    RateLimited,

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Invalid API response: {message}")]
    InvalidResponse { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

pub type WeatherPortResult<T> = Result<T, WeatherPortError>;

/// Port for current weather, forecasts and place search.
///
/// Coordinates are WGS84 degrees. The implementation lives in `skiscore-owm`.
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Current conditions at a location.
    async fn current(&self, latitude: f64, longitude: f64) -> WeatherPortResult<CurrentWeather>;

    /// 3-hour forecast slots for the next five days, in time order.
    async fn forecast(&self, latitude: f64, longitude: f64) -> WeatherPortResult<Vec<ForecastSlot>>;

    /// Places matching a name. No match is an empty list, not an error.
    async fn search_locations(&self, query: &str, count: u32) -> WeatherPortResult<Vec<LocationMatch>>;
}
