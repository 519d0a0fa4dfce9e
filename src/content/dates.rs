//! Display dates for update and chronicle cards (en-US long form).

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const INVALID: &str = "Invalid Date";

/// Render an ISO-8601 date or date-time as `January 15, 2024`.
/// The calendar date is taken as written; no timezone shifting.
pub fn format_display_date(iso: &str) -> String {
    match parse_calendar_date(iso.trim()) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => INVALID.to_string(),
    }
}

fn parse_calendar_date(s: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    // Minute precision with an offset, which RFC 3339 does not allow.
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M%#z") {
        return Some(dt.date_naive());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%MZ"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    for fmt in ["%Y-%m-%d", "%Y%m%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Some(date);
        }
    }
    // `YYYY-MM` names the first of the month.
    if s.len() == 7 {
        return NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d").ok();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_dates() {
        assert_eq!(format_display_date("2024-01-15"), "January 15, 2024");
        assert_eq!(format_display_date("2023-12-05"), "December 5, 2023");
    }

    #[test]
    fn date_times_keep_written_day() {
        assert_eq!(format_display_date("2024-02-29T23:30:00Z"), "February 29, 2024");
        assert_eq!(format_display_date("2024-07-04T08:15:00"), "July 4, 2024");
        assert_eq!(format_display_date("2024-07-04T08:15:00+09:00"), "July 4, 2024");
        assert_eq!(format_display_date("2024-01-15T10:00:00.000Z"), "January 15, 2024");
        assert_eq!(format_display_date("2024-01-15T10:00Z"), "January 15, 2024");
        assert_eq!(format_display_date("2024-01-15T10:00+02:00"), "January 15, 2024");
    }

    #[test]
    fn reduced_and_basic_forms() {
        assert_eq!(format_display_date("2024-01"), "January 1, 2024");
        assert_eq!(format_display_date("20240115"), "January 15, 2024");
        assert_eq!(format_display_date("2024-13"), "Invalid Date");
    }

    #[test]
    fn garbage_is_invalid_date() {
        assert_eq!(format_display_date("soon"), "Invalid Date");
        assert_eq!(format_display_date("2024-13-01"), "Invalid Date");
    }
}
