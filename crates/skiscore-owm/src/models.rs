//! Internal configuration and wire types for the weather APIs.
//!
//! DTOs mirror the JSON closely. Nested blocks the APIs omit when empty
//! (`snow`, `rain`, `wind`) are optional.

use serde::Deserialize;
use url::Url;

use crate::config::OwmClientConfig;
use crate::error::OwmResult;

/// Internal client configuration with validated URLs.
#[derive(Debug, Clone)]
pub struct OwmConfig {
    pub weather_base_url: Url,
    pub geocoding_base_url: Url,
    pub api_key: Option<String>,
    pub units: String,
    pub language: String,
}

impl OwmConfig {
    pub fn from_public(config: &OwmClientConfig) -> OwmResult<Self> {
        Ok(Self {
            weather_base_url: Url::parse(&config.weather_base_url)?,
            geocoding_base_url: Url::parse(&config.geocoding_base_url)?,
            api_key: config.api_key.clone(),
            units: config.units.clone(),
            language: config.language.clone(),
        })
    }
}

#[cfg(test)]
impl Default for OwmConfig {
    fn default() -> Self {
        Self {
            weather_base_url: Url::parse("https://api.openweathermap.org").unwrap(),
            geocoding_base_url: Url::parse("https://geocoding-api.open-meteo.com").unwrap(),
            api_key: Some("test-key".to_string()),
            units: "metric".to_string(),
            language: "it".to_string(),
        }
    }
}

// ============================================================================
// OpenWeatherMap
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherDto {
    pub id: Option<i32>,
    pub main: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MainDto {
    pub temp: f64,
    pub feels_like: Option<f64>,
    pub temp_min: Option<f64>,
    pub temp_max: Option<f64>,
    pub humidity: Option<u8>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WindDto {
    pub speed: Option<f64>,
    pub gust: Option<f64>,
}

/// Precipitation volume over the last 1h / 3h, in mm.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PrecipitationDto {
    #[serde(rename = "1h")]
    pub one_hour: Option<f64>,
    #[serde(rename = "3h")]
    pub three_hours: Option<f64>,
}

/// `GET /data/2.5/weather`
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeatherResponse {
    #[serde(default)]
    pub weather: Vec<WeatherDto>,
    pub main: Option<MainDto>,
    pub wind: Option<WindDto>,
    pub snow: Option<PrecipitationDto>,
    pub visibility: Option<u32>,
    pub dt: Option<i64>,
}

/// One entry of the forecast `list`.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastItemDto {
    pub dt: Option<i64>,
    pub main: Option<MainDto>,
    #[serde(default)]
    pub weather: Vec<WeatherDto>,
    pub wind: Option<WindDto>,
    pub snow: Option<PrecipitationDto>,
    pub rain: Option<PrecipitationDto>,
    pub visibility: Option<u32>,
    /// Slot start, `YYYY-MM-DD HH:MM:SS`.
    pub dt_txt: Option<String>,
}

/// `GET /data/2.5/forecast`
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub list: Vec<ForecastItemDto>,
}

// ============================================================================
// Open-Meteo geocoding
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingResultDto {
    pub id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: Option<f64>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub admin1: Option<String>,
}

/// `GET /v1/search`. `results` is absent when nothing matches.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingResponse {
    pub results: Option<Vec<GeocodingResultDto>>,
}
