//! Application state managed via Dioxus context.
//!
//! `AppState` is provided once by `ForecastView` with `use_context_provider`.
//! Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use wfc_forecast::{ApiConfig, ForecastClient, ViewState};

/// Shared state for the forecast page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Counter, forecasts, loading flag and error message
    pub view: Signal<ViewState>,
    /// HTTP client bound to the configured backend
    pub client: Signal<ForecastClient>,
}

impl AppState {
    /// Create a new AppState for the given backend.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            view: Signal::new(ViewState::new()),
            client: Signal::new(ForecastClient::new(config)),
        }
    }

    pub fn increment_counter(&mut self) {
        self.view.write().increment_counter();
    }

    /// `{base}/api/WeatherForecast`, for the diagnostics line.
    pub fn endpoint(&self) -> String {
        self.client.read().config().endpoint()
    }
}
