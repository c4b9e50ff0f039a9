//! The forecast load routine.

use crate::state::AppState;
use dioxus::prelude::*;

/// Load the forecast list into `state`.
///
/// Sets the loading flag and clears the error, performs the request, then
/// settles the state. There is no guard against overlapping calls: each call
/// settles on its own and the last one to finish wins.
pub async fn load_forecasts(mut state: AppState) {
    state.view.write().begin_load();

    // Clone out so no signal borrow is held across the await.
    let client = state.client.cloned();
    let outcome = client.fetch_forecasts().await;

    if let Err(e) = &outcome {
        log::error!("Error fetching weather data: {}", e);
    }
    state.view.write().settle(outcome);
}
