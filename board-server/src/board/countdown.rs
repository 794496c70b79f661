//! Iftar countdown
//!
//! Purely presentational: recomputed from the wall clock against the
//! selected day's iftar time, affects no other component.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use shared::catalog;

/// Target instant for a date's iftar, from the calendar with the fixed
/// fallback time. `None` only for unparsable dates.
pub fn iftar_target(date: &str) -> Option<NaiveDateTime> {
    let day = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let time = NaiveTime::parse_from_str(catalog::iftar_time(date), "%H:%M").ok()?;
    Some(day.and_time(time))
}

/// Remaining-time label shown next to the clock:
/// `İFTAR VAKTİ!` at or past the target, `Ng Ss Mdk` while a full day or
/// more remains, `HH:MM:SS` under a day.
pub fn remaining_label(now: NaiveDateTime, target: NaiveDateTime) -> String {
    let diff = target - now;
    if diff.num_seconds() <= 0 {
        return "İFTAR VAKTİ!".to_string();
    }
    let days = diff.num_days();
    let hours = diff.num_hours() % 24;
    let minutes = diff.num_minutes() % 60;
    let seconds = diff.num_seconds() % 60;
    if days > 0 {
        format!("{days}g {hours}s {minutes}dk")
    } else {
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(date: &str, time: &str) -> NaiveDateTime {
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .unwrap()
            .and_time(NaiveTime::parse_from_str(time, "%H:%M:%S").unwrap())
    }

    #[test]
    fn test_target_uses_calendar_then_fallback() {
        assert_eq!(iftar_target("2026-02-19"), Some(at("2026-02-19", "18:33:00")));
        assert_eq!(iftar_target("2027-01-01"), Some(at("2027-01-01", "18:45:00")));
        assert_eq!(iftar_target("bugün"), None);
    }

    #[test]
    fn test_label_same_day() {
        let target = at("2026-02-19", "18:33:00");
        let now = at("2026-02-19", "16:30:15");
        assert_eq!(remaining_label(now, target), "02:02:45");
    }

    #[test]
    fn test_label_days_ahead() {
        let target = at("2026-02-21", "18:35:00");
        let now = at("2026-02-19", "12:00:00");
        assert_eq!(remaining_label(now, target), "2g 6s 35dk");
    }

    #[test]
    fn test_label_at_or_past_target() {
        let target = at("2026-02-19", "18:33:00");
        assert_eq!(remaining_label(target, target), "İFTAR VAKTİ!");
        let later = at("2026-02-19", "19:00:00");
        assert_eq!(remaining_label(later, target), "İFTAR VAKTİ!");
    }
}
