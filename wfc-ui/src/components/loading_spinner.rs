//! Loading indicator component.

use dioxus::prelude::*;

/// Shown while a forecast load is outstanding.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        p {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "Загрузка данных о погоде..."
        }
    }
}
