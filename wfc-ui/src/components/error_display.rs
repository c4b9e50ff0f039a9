//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Request URL shown for diagnostics
    pub endpoint: String,
}

/// Displays the load error and the URL that was requested.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            class: "error",
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            p {
                style: "margin: 0 0 4px 0;",
                "❌ Ошибка: {props.message}"
            }
            p {
                style: "margin: 0; font-size: 0.9em; color: #999;",
                "API URL: {props.endpoint}"
            }
        }
    }
}
