//! Dioxus layer for the weather forecast app.
//!
//! This crate provides:
//! - `state`: `AppState`, the reactive wrapper around `ViewState`
//! - `fetch`: the `load_forecasts` routine run on mount and on refresh
//! - `components`: RSX components for the counter, the refresh button and the
//!   four forecast branches

pub mod components;
pub mod fetch;
pub mod state;
