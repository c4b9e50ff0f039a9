//! Backend address configuration.
//!
//! The base URL is fixed at build time (see `forecast-app/build.rs`). An empty
//! base means same-origin: the app is served behind a reverse proxy that
//! forwards `/api/*` to the backend.

use crate::error::FetchError;
use crate::model::FORECAST_PATH;
use reqwest::Url;

/// Where the forecast backend lives.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// The configured prefix, verbatim (possibly empty).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/api/WeatherForecast`, as shown in the error panel.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, FORECAST_PATH)
    }

    /// Absolute URL for the request.
    ///
    /// An absolute endpoint is used as-is. Otherwise it is resolved against the
    /// current page location, the same way a browser resolves a relative fetch.
    /// Outside a browser there is no page to resolve against.
    pub fn request_url(&self) -> Result<Url, FetchError> {
        let endpoint = self.endpoint();
        if let Ok(url) = Url::parse(&endpoint) {
            return Ok(url);
        }

        let location = page_location().ok_or_else(|| {
            FetchError::Network(format!("relative URL without a base: {endpoint}"))
        })?;

        Url::parse(&location)
            .and_then(|base| base.join(&endpoint))
            .map_err(|e| FetchError::Network(e.to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
fn page_location() -> Option<String> {
    web_sys::window()?.location().href().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_location() -> Option<String> {
    None
}
