//! HTTP client for the forecast endpoint.
//!
//! Works both natively and in the browser: on `wasm32` reqwest goes through
//! the page's `fetch`. No timeout and no retries are configured.

use crate::config::ApiConfig;
use crate::error::FetchError;
use crate::model::ForecastEntry;
use log::{debug, warn};
use reqwest::Client;

/// Fetches the forecast list from the configured backend.
#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
    config: ApiConfig,
}

impl ForecastClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `GET {base}/api/WeatherForecast` and decode the body.
    ///
    /// A non-2xx status fails with [`FetchError::Request`] without touching the
    /// body. Entries are returned in the order the backend sent them.
    pub async fn fetch_forecasts(&self) -> Result<Vec<ForecastEntry>, FetchError> {
        let url = self.config.request_url()?;
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("Forecast request failed with status {}", status);
            return Err(FetchError::Request(status.as_u16()));
        }

        let forecasts: Vec<ForecastEntry> = response.json().await?;
        debug!("Received {} forecast entries", forecasts.len());
        Ok(forecasts)
    }
}
