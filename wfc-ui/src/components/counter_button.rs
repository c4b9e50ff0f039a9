//! Click counter, independent of the forecast data.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn CounterButton() -> Element {
    let mut state = use_context::<AppState>();
    let count = state.view.read().counter;

    rsx! {
        div {
            class: "card",
            style: "padding: 16px;",
            button {
                onclick: move |_| state.increment_counter(),
                "count is {count}"
            }
        }
    }
}
