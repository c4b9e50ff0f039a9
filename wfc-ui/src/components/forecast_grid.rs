//! Grid of forecast cards.

use super::ForecastCard;
use crate::state::AppState;
use dioxus::prelude::*;

/// One card per entry, in the order the backend sent them.
#[component]
pub fn ForecastGrid() -> Element {
    let state = use_context::<AppState>();
    let forecasts = state.view.read().forecasts.clone();

    rsx! {
        div {
            class: "weather-grid",
            style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(160px, 1fr)); gap: 12px; margin-top: 12px;",
            for (index, entry) in forecasts.into_iter().enumerate() {
                ForecastCard { key: "{index}", entry }
            }
        }
    }
}
