//! Weather Forecast App
//!
//! Single page that lists the backend's weather forecast next to a click
//! counter.
//!
//! Data flow:
//! 1. `build.rs` reads `WEATHER_API_URL` and bakes it in as `FORECAST_API_URL`
//!    (empty means same-origin).
//! 2. On mount, `ForecastView` issues `GET {base}/api/WeatherForecast`.
//! 3. The page shows the error panel, the loading line, the card grid or the
//!    "no data" line, depending on the outcome. The refresh button reloads.

use dioxus::prelude::*;
use dioxus_logger::tracing::{info, Level};
use wfc_forecast::ApiConfig;
use wfc_ui::components::ForecastView;

/// Backend base URL, fixed at build time.
const API_URL: &str = env!("FORECAST_API_URL");

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("Starting Weather Forecast App (API URL: {:?})", API_URL);
    launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        div {
            class: "App",
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif; text-align: center;",
            ForecastView { config: ApiConfig::new(API_URL) }
        }
    }
}
