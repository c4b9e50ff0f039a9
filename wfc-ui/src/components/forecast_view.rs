//! The forecast page: counter card plus the weather section.

use super::{CounterButton, ErrorDisplay, ForecastGrid, LoadingSpinner, NoData, RefreshButton};
use crate::fetch::load_forecasts;
use crate::state::AppState;
use dioxus::prelude::*;
use wfc_forecast::{ApiConfig, ViewBranch};

#[derive(Props, Clone, PartialEq)]
pub struct ForecastViewProps {
    /// Backend address, fixed for the lifetime of the view
    pub config: ApiConfig,
}

/// Owns the `AppState` and loads the forecasts once on mount.
///
/// The load task is scoped to this component; if the view unmounts mid-flight
/// the task is dropped and never writes to the state.
#[component]
pub fn ForecastView(props: ForecastViewProps) -> Element {
    let config = props.config.clone();
    let state = use_context_provider(move || AppState::new(config));

    // ─── Initial load on mount ───
    use_effect(move || {
        spawn(load_forecasts(state));
    });

    let branch = state.view.read().branch();
    let section = match branch {
        ViewBranch::Error(message) => rsx! {
            ErrorDisplay { message, endpoint: state.endpoint() }
        },
        ViewBranch::Loading => rsx! { LoadingSpinner {} },
        ViewBranch::Populated => rsx! { ForecastGrid {} },
        ViewBranch::Empty => rsx! { NoData {} },
    };

    rsx! {
        header {
            class: "App-header",
            h1 { "Weather Forecast App" }

            CounterButton {}

            div {
                class: "weather-section",
                h2 { "Weather Forecast" }
                RefreshButton {}
                {section}
            }
        }
    }
}
