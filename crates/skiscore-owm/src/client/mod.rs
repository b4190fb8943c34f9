//! Weather client for current conditions, forecasts and place search.

mod geocoding;
mod weather;

use crate::config::OwmClientConfig;
use crate::error::OwmResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::OwmConfig;

/// Default client using the reqwest HTTP backend.
pub type DefaultOwmClient = OwmClient<ReqwestBackend>;

/// Client generic over its HTTP backend so tests can serve canned JSON.
///
/// External code uses [`DefaultOwmClient::new`].
pub struct OwmClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: OwmConfig,
}

impl DefaultOwmClient {
    /// Build a client. Fails on malformed base URLs, not on a missing key.
    pub fn new(config: &OwmClientConfig) -> OwmResult<Self> {
        let internal = OwmConfig::from_public(config)?;
        let backend = ReqwestBackend::new(config)?;
        if internal.api_key.is_none() {
            tracing::warn!("no OpenWeatherMap API key configured, weather requests will fail");
        }
        Ok(Self {
            backend,
            config: internal,
        })
    }
}

impl<B: HttpBackend> OwmClient<B> {
    #[cfg(test)]
    pub(crate) const fn with_backend(config: OwmConfig, backend: B) -> Self {
        Self { backend, config }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_client_creation() {
        let config = OwmClientConfig::new().with_api_key("k");
        assert!(DefaultOwmClient::new(&config).is_ok());
    }

    #[test]
    fn test_client_without_key_still_builds() {
        assert!(DefaultOwmClient::new(&OwmClientConfig::new()).is_ok());
    }

    #[test]
    fn test_bad_base_url_is_rejected() {
        let config = OwmClientConfig::new().with_weather_base_url("not a url");
        assert!(matches!(
            DefaultOwmClient::new(&config),
            Err(crate::error::OwmError::InvalidUrl(_))
        ));
    }
}
