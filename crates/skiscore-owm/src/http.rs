//! HTTP backend abstraction.
//!
//! The production backend uses reqwest with retries for transient errors;
//! tests swap in a fake backend serving canned JSON.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::OwmClientConfig;
use crate::error::{OwmError, OwmResult, redact_url};

/// Fetches JSON from a URL.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> OwmResult<T>;
}

/// reqwest backend with exponential backoff for 5xx and network errors.
///
/// 4xx responses fail immediately.
pub struct ReqwestBackend {
    client: reqwest::Client,
    max_retries: u8,
    retry_base_delay_ms: u64,
}

impl ReqwestBackend {
    pub fn new(config: &OwmClientConfig) -> OwmResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            max_retries: config.max_retries,
            retry_base_delay_ms: u64::try_from(config.retry_base_delay.as_millis()).unwrap_or(u64::MAX),
        })
    }

    fn backoff(&self, attempt: u8) -> Duration {
        Duration::from_millis(
            self.retry_base_delay_ms
                .saturating_mul(2u64.saturating_pow(u32::from(attempt) - 1)),
        )
    }

    async fn fetch_with_retry(&self, url: &Url) -> OwmResult<reqwest::Response> {
        let mut last_error: Option<OwmError> = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let delay = self.backoff(attempt);
                tracing::debug!(attempt, ?delay, url = %redact_url(url), "retrying weather request");
                tokio::time::sleep(delay).await;
            }

            match self.client.get(url.as_str()).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return Ok(response);
                    }

                    let error = OwmError::ApiRequestFailed {
                        status: status.as_u16(),
                        url: redact_url(url),
                    };
                    if status.is_server_error() && attempt < self.max_retries {
                        last_error = Some(error);
                        continue;
                    }
                    return Err(error);
                }
                Err(e) => {
                    // Strip the URL: it carries the API key.
                    let e = e.without_url();
                    if attempt < self.max_retries {
                        tracing::warn!(attempt, error = %e, "weather request failed");
                        last_error = Some(e.into());
                        continue;
                    }
                    return Err(e.into());
                }
            }
        }

        Err(last_error.unwrap_or_else(|| OwmError::InvalidResponse {
            message: "Unknown error during fetch".to_string(),
        }))
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> OwmResult<T> {
        let response = self.fetch_with_retry(url).await?;
        let bytes = response.bytes().await.map_err(reqwest::Error::without_url)?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
