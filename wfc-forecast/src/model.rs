use serde::{Deserialize, Serialize};

/// Path of the forecast endpoint, appended to the configured base URL.
pub const FORECAST_PATH: &str = "/api/WeatherForecast";

/// One day's weather prediction, as returned by the backend.
///
/// Fields are taken verbatim: nothing is defaulted, recomputed or
/// cross-checked. A field missing from the payload stays `None` and is
/// rendered as empty text. Unknown fields are ignored.
#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastEntry {
    /// ISO-8601 date or date-time (e.g., "2024-01-01")
    #[serde(default)]
    pub date: Option<String>,
    /// Temperature in degrees Celsius
    #[serde(default)]
    pub temperature_c: Option<i64>,
    /// Temperature in degrees Fahrenheit, not validated against `temperature_c`
    #[serde(default)]
    pub temperature_f: Option<i64>,
    /// Free-text summary (e.g., "Mild")
    #[serde(default)]
    pub summary: Option<String>,
}
