//! `WeatherPort` implementation for `OwmClient`.

use async_trait::async_trait;
use skiscore_core::{
    CurrentWeather, ForecastSlot, LocationMatch, WeatherPort, WeatherPortError, WeatherPortResult,
};

use crate::client::OwmClient;
use crate::error::OwmError;
use crate::http::HttpBackend;

/// Convert internal `OwmError` to core `WeatherPortError`.
fn map_error(err: OwmError) -> WeatherPortError {
    match err {
        OwmError::ApiRequestFailed { status, url } => match status {
            401 | 403 => WeatherPortError::Unauthorized,
            404 => WeatherPortError::NotFound { message: url },
            429 => WeatherPortError::RateLimited,
            _ => WeatherPortError::Network {
                message: format!("API request failed with status {status}: {url}"),
            },
        },
        OwmError::MissingApiKey => WeatherPortError::Configuration {
            message: OwmError::MissingApiKey.to_string(),
        },
        OwmError::InvalidResponse { message } => WeatherPortError::InvalidResponse { message },
        OwmError::Network(e) => WeatherPortError::Network {
            message: e.to_string(),
        },
        OwmError::InvalidUrl(e) => WeatherPortError::Configuration {
            message: e.to_string(),
        },
        OwmError::JsonParse(e) => WeatherPortError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

#[async_trait]
impl<B: HttpBackend + 'static> WeatherPort for OwmClient<B> {
    async fn current(&self, latitude: f64, longitude: f64) -> WeatherPortResult<CurrentWeather> {
        self.fetch_current(latitude, longitude).await.map_err(map_error)
    }

    async fn forecast(&self, latitude: f64, longitude: f64) -> WeatherPortResult<Vec<ForecastSlot>> {
        self.fetch_forecast(latitude, longitude).await.map_err(map_error)
    }

    async fn search_locations(&self, query: &str, count: u32) -> WeatherPortResult<Vec<LocationMatch>> {
        self.search(query, count).await.map_err(map_error)
    }
}
