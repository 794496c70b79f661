//! Date/time display helpers

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};

/// Turn a stored `YYYY-MM-DD` date into the display form `DD.MM.YYYY`.
/// Falls back to the input when it does not split into three parts.
pub fn format_date_tr(date: &str) -> String {
    let parts: Vec<&str> = date.split('-').collect();
    if parts.len() == 3 {
        format!("{}.{}.{}", parts[2], parts[1], parts[0])
    } else {
        date.to_string()
    }
}

/// Turkish weekday name of a stored date.
pub fn weekday_name_tr(date: &str) -> Option<&'static str> {
    let day = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    Some(match day.weekday() {
        Weekday::Mon => "Pazartesi",
        Weekday::Tue => "Salı",
        Weekday::Wed => "Çarşamba",
        Weekday::Thu => "Perşembe",
        Weekday::Fri => "Cuma",
        Weekday::Sat => "Cumartesi",
        Weekday::Sun => "Pazar",
    })
}

/// Timestamp label for the print header (`19.02.2026 17:45:03`).
pub fn printed_at_label(now: NaiveDateTime) -> String {
    now.format("%d.%m.%Y %H:%M:%S").to_string()
}
