//! Display formatting for forecast cards, using the `ru-RU` conventions.

use crate::model::ForecastEntry;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use std::fmt::Display;

/// Short date in the `ru-RU` locale: "31.12.2024".
pub const RU_DATE_FORMAT: &str = "%d.%m.%Y";

/// Shown when the entry has no usable date.
pub const INVALID_DATE: &str = "Invalid Date";

/// Format a backend date string for display in the viewer's timezone.
///
/// Date-only values are calendar days and are shown unchanged. Date-times with
/// an offset are converted to local time first. Naive date-times are taken as
/// local time already.
pub fn localize_date(date: Option<&str>) -> String {
    date.and_then(parse_local_date)
        .map(|d| d.format(RU_DATE_FORMAT).to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

fn parse_local_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local).date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
}

/// "20°C / 68°F". Absent temperatures are left blank.
pub fn temperature_label(entry: &ForecastEntry) -> String {
    format!(
        "{}°C / {}°F",
        or_blank(entry.temperature_c.as_ref()),
        or_blank(entry.temperature_f.as_ref())
    )
}

/// Summary text, blank when absent.
pub fn summary_text(entry: &ForecastEntry) -> String {
    or_blank(entry.summary.as_ref())
}

fn or_blank<T: Display>(value: Option<&T>) -> String {
    value.map(ToString::to_string).unwrap_or_default()
}
