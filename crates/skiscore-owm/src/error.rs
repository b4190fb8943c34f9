//! Internal error types for weather client operations.
//!
//! Mapped to `WeatherPortError` at the port boundary.

use thiserror::Error;

pub type OwmResult<T> = Result<T, OwmError>;

#[derive(Debug, Error)]
pub enum OwmError {
    /// The API answered with a non-success status. `url` has the key redacted.
    #[error("Weather API request failed with status {status}: {url}")]
    ApiRequestFailed { status: u16, url: String },

    #[error("No OpenWeatherMap API key configured (set SKISCORE_OWM_API_KEY)")]
    MissingApiKey,

    #[error("Invalid response from weather API: {message}")]
    InvalidResponse { message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// Replace the `appid` query value so keys never reach logs or errors.
pub fn redact_url(url: &::url::Url) -> String {
    if !url.query_pairs().any(|(k, _)| k == "appid") {
        return url.to_string();
    }
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "appid" { "***".to_string() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
