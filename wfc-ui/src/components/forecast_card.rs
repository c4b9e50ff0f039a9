//! A single forecast day.

use dioxus::prelude::*;
use wfc_forecast::format::{localize_date, summary_text, temperature_label};
use wfc_forecast::ForecastEntry;

#[derive(Props, Clone, PartialEq)]
pub struct ForecastCardProps {
    pub entry: ForecastEntry,
}

/// Card with the localized date, both temperatures and the summary.
#[component]
pub fn ForecastCard(props: ForecastCardProps) -> Element {
    let date = localize_date(props.entry.date.as_deref());
    let temperature = temperature_label(&props.entry);
    let summary = summary_text(&props.entry);

    rsx! {
        div {
            class: "weather-card",
            style: "padding: 12px; border: 1px solid #e0e0e0; border-radius: 8px; text-align: center;",
            div {
                class: "date",
                style: "font-size: 13px; color: #666;",
                "{date}"
            }
            div {
                class: "temperature",
                style: "font-size: 20px; font-weight: bold; margin: 6px 0;",
                "{temperature}"
            }
            div {
                class: "summary",
                "{summary}"
            }
        }
    }
}
