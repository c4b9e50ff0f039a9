use dioxus::prelude::*;

/// Shown when the last load succeeded with an empty list.
#[component]
pub fn NoData() -> Element {
    rsx! {
        p {
            style: "padding: 40px; text-align: center; color: #666;",
            "Нет данных о погоде"
        }
    }
}
