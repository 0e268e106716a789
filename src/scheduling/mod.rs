mod availability;

pub use availability::{compute_available_slots, BusinessHours, BusyInterval, SchedulingError};

use time::Date;

/// Fallback appointment length when the requested service cannot be
/// resolved to a duration.
pub const DEFAULT_SERVICE_DURATION_MINUTES: u16 = 60;

/// Parses a zero-padded or unpadded "HH:MM" string into minutes since
/// midnight. Returns None for anything that is not a valid time of day.
pub fn parse_hhmm(value: &str) -> Option<u16> {
    let (hours, minutes) = value.split_once(':')?;
    let hours: u16 = hours.parse().ok()?;
    let minutes: u16 = minutes.parse().ok()?;
    if hours >= 24 || minutes >= 60 {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Formats minutes since midnight as a zero-padded 24-hour "HH:MM" string.
pub fn format_hhmm(minutes: u16) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Whether a requested booking date has already passed. "Today" is passed
/// in by the caller so the check stays a pure function.
pub fn is_past_date(date: Date, today: Date) -> bool {
    date < today
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn parses_padded_and_unpadded_times() {
        assert_eq!(parse_hhmm("09:30"), Some(570));
        assert_eq!(parse_hhmm("9:30"), Some(570));
        assert_eq!(parse_hhmm("00:00"), Some(0));
        assert_eq!(parse_hhmm("23:59"), Some(1439));
    }

    #[test]
    fn rejects_out_of_range_and_malformed_times() {
        assert_eq!(parse_hhmm("24:00"), None);
        assert_eq!(parse_hhmm("12:60"), None);
        assert_eq!(parse_hhmm("noon"), None);
        assert_eq!(parse_hhmm("1230"), None);
        assert_eq!(parse_hhmm(""), None);
    }

    #[test]
    fn formats_zero_padded() {
        assert_eq!(format_hhmm(570), "09:30");
        assert_eq!(format_hhmm(0), "00:00");
        assert_eq!(format_hhmm(1020), "17:00");
    }

    #[test]
    fn hhmm_round_trips() {
        for minutes in [0u16, 1, 59, 60, 540, 1020, 1439] {
            assert_eq!(parse_hhmm(&format_hhmm(minutes)), Some(minutes));
        }
    }

    #[test]
    fn past_date_check_is_strict() {
        let today = date!(2024 - 06 - 15);
        assert!(is_past_date(date!(2024 - 06 - 14), today));
        assert!(!is_past_date(today, today));
        assert!(!is_past_date(date!(2024 - 06 - 16), today));
    }
}
