//! Core types for the weather forecast app.
//!
//! - `model`: `ForecastEntry`, as decoded from the backend JSON
//! - `client`: `ForecastClient`, the single `GET /api/WeatherForecast` call
//! - `state`: `ViewState` and the render branch selection
//! - `format`: `ru-RU` date and temperature display helpers

pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod state;

pub use client::ForecastClient;
pub use config::ApiConfig;
pub use error::FetchError;
pub use model::ForecastEntry;
pub use state::{ViewBranch, ViewState};
