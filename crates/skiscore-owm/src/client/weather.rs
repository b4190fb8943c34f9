//! Current conditions and the 5-day/3-hour forecast.

use skiscore_core::{CurrentWeather, ForecastSlot};

use super::OwmClient;
use crate::error::OwmResult;
use crate::http::HttpBackend;
use crate::mapping::{to_current_weather, to_forecast_slots};
use crate::models::{CurrentWeatherResponse, ForecastResponse};
use crate::url::{build_current_url, build_forecast_url};

impl<B: HttpBackend> OwmClient<B> {
    pub(crate) async fn fetch_current(&self, latitude: f64, longitude: f64) -> OwmResult<CurrentWeather> {
        let url = build_current_url(&self.config, latitude, longitude)?;
        let response: CurrentWeatherResponse = self.backend.get_json(&url).await?;
        to_current_weather(response)
    }

    pub(crate) async fn fetch_forecast(&self, latitude: f64, longitude: f64) -> OwmResult<Vec<ForecastSlot>> {
        let url = build_forecast_url(&self.config, latitude, longitude)?;
        let response: ForecastResponse = self.backend.get_json(&url).await?;
        Ok(to_forecast_slots(response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OwmError;
    use crate::http::testing::FakeBackend;
    use crate::models::OwmConfig;
    use serde_json::json;
    use skiscore_core::WeatherCondition;

    #[tokio::test]
    async fn test_fetch_current() {
        let backend = FakeBackend::new().with_json(
            "data/2.5/weather",
            json!({
                "weather": [{"id": 800, "main": "Clear", "description": "cielo sereno", "icon": "01d"}],
                "main": {"temp": -6.5, "temp_min": -8.0, "temp_max": -5.0},
                "wind": {"speed": 1.5},
                "visibility": 10000
            }),
        );
        let client = OwmClient::with_backend(OwmConfig::default(), backend);

        let weather = client.fetch_current(46.5, 10.2).await.unwrap();
        assert_eq!(weather.condition, Some(WeatherCondition::Clear));
        assert_eq!(weather.visibility, Some(10_000));

        let requests = client.backend.requests();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].contains("lat=46.5&lon=10.2"));
    }

    #[tokio::test]
    async fn test_fetch_current_without_key_makes_no_request() {
        let config = OwmConfig {
            api_key: None,
            ..OwmConfig::default()
        };
        let client = OwmClient::with_backend(config, FakeBackend::new());
        assert!(matches!(
            client.fetch_current(46.5, 10.2).await,
            Err(OwmError::MissingApiKey)
        ));
        assert!(client.backend.requests().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_forecast() {
        let backend = FakeBackend::new().with_json(
            "data/2.5/forecast",
            json!({
                "list": [
                    {"main": {"temp": -1.0}, "weather": [{"main": "Snow"}], "dt_txt": "2026-01-10 09:00:00"},
                    {"main": {"temp": 0.0}, "weather": [{"main": "Clouds"}], "dt_txt": "2026-01-10 12:00:00"}
                ]
            }),
        );
        let client = OwmClient::with_backend(OwmConfig::default(), backend);
        let slots = client.fetch_forecast(46.5, 10.2).await.unwrap();
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[1].condition, Some(WeatherCondition::Clouds));
    }
}
