//! Manual refresh control.

use crate::fetch::load_forecasts;
use crate::state::AppState;
use dioxus::prelude::*;

/// Reloads the forecast list. Disabled while a load is outstanding.
#[component]
pub fn RefreshButton() -> Element {
    let state = use_context::<AppState>();
    let loading = state.view.read().is_loading;

    rsx! {
        button {
            disabled: loading,
            onclick: move |_| {
                spawn(load_forecasts(state));
            },
            if loading { "Загрузка..." } else { "Обновить данные" }
        }
    }
}
