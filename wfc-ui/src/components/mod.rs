//! Reusable Dioxus RSX components for the forecast page.

mod counter_button;
mod error_display;
mod forecast_card;
mod forecast_grid;
mod forecast_view;
mod loading_spinner;
mod no_data;
mod refresh_button;

pub use counter_button::CounterButton;
pub use error_display::ErrorDisplay;
pub use forecast_card::ForecastCard;
pub use forecast_grid::ForecastGrid;
pub use forecast_view::ForecastView;
pub use loading_spinner::LoadingSpinner;
pub use no_data::NoData;
pub use refresh_button::RefreshButton;
