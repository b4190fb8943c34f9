//! URL construction for the weather and geocoding APIs.

use url::Url;

use crate::error::{OwmError, OwmResult};
use crate::models::OwmConfig;

const CURRENT_PATH: &str = "/data/2.5/weather";
const FORECAST_PATH: &str = "/data/2.5/forecast";
const SEARCH_PATH: &str = "/v1/search";

fn owm_url(config: &OwmConfig, path: &str, latitude: f64, longitude: f64) -> OwmResult<Url> {
    let api_key = config.api_key.as_deref().ok_or(OwmError::MissingApiKey)?;
    let mut url = config.weather_base_url.join(path)?;
    url.query_pairs_mut()
        .append_pair("lat", &latitude.to_string())
        .append_pair("lon", &longitude.to_string())
        .append_pair("appid", api_key)
        .append_pair("units", &config.units)
        .append_pair("lang", &config.language);
    Ok(url)
}

/// Current conditions URL. Fails without an API key.
pub fn build_current_url(config: &OwmConfig, latitude: f64, longitude: f64) -> OwmResult<Url> {
    owm_url(config, CURRENT_PATH, latitude, longitude)
}

/// 5-day/3-hour forecast URL. Fails without an API key.
pub fn build_forecast_url(config: &OwmConfig, latitude: f64, longitude: f64) -> OwmResult<Url> {
    owm_url(config, FORECAST_PATH, latitude, longitude)
}

/// Place search URL.
pub fn build_search_url(config: &OwmConfig, name: &str, count: u32) -> OwmResult<Url> {
    let mut url = config.geocoding_base_url.join(SEARCH_PATH)?;
    let query = format!(
        "name={}&count={}&language={}&format=json",
        urlencoding::encode(name.trim()),
        count.clamp(1, 100),
        urlencoding::encode(&config.language),
    );
    url.set_query(Some(&query));
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_url() {
        let url = build_current_url(&OwmConfig::default(), 46.5, 10.25).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.openweathermap.org/data/2.5/weather?lat=46.5&lon=10.25&appid=test-key&units=metric&lang=it"
        );
    }

    #[test]
    fn test_forecast_url_path() {
        let url = build_forecast_url(&OwmConfig::default(), -33.0, 70.1).unwrap();
        assert_eq!(url.path(), "/data/2.5/forecast");
        assert!(url.query().unwrap().contains("lat=-33&lon=70.1"));
    }

    #[test]
    fn test_missing_key_fails() {
        let config = OwmConfig {
            api_key: None,
            ..OwmConfig::default()
        };
        assert!(matches!(
            build_current_url(&config, 0.0, 0.0),
            Err(OwmError::MissingApiKey)
        ));
    }

    #[test]
    fn test_search_url_encodes_name() {
        let url = build_search_url(&OwmConfig::default(), " Cortina d'Ampezzo ", 8).unwrap();
        assert_eq!(
            url.as_str(),
            "https://geocoding-api.open-meteo.com/v1/search?name=Cortina%20d%27Ampezzo&count=8&language=it&format=json"
        );
    }

    #[test]
    fn test_search_url_clamps_count() {
        let url = build_search_url(&OwmConfig::default(), "Livigno", 500).unwrap();
        assert!(url.query().unwrap().contains("count=100"));
    }

    #[test]
    fn test_search_does_not_need_key() {
        let config = OwmConfig {
            api_key: None,
            ..OwmConfig::default()
        };
        assert!(build_search_url(&config, "Livigno", 8).is_ok());
    }
}
