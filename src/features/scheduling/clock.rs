//! Date/time input parsing and UTC normalization
//!
//! Users supply a wall-clock time as `YYYY-MM-DD HH:MM` plus a numeric GMT
//! offset in hours (fractional allowed, e.g. `+3.5`). Scheduling works in UTC
//! throughout; listings render UTC and label it GMT.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};

/// Input and display format for scheduled times
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parse a `YYYY-MM-DD HH:MM` wall-clock time
pub fn parse_local_datetime(input: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(input.trim(), DATE_TIME_FORMAT).ok()
}

/// Parse a signed decimal GMT offset in hours (`+0`, `-5`, `3.5`)
///
/// Rejects non-numeric input, non-finite values, and offsets of 24 hours or
/// more in either direction.
pub fn parse_offset_hours(input: &str) -> Option<FixedOffset> {
    let hours: f64 = input.trim().parse().ok()?;
    if !hours.is_finite() {
        return None;
    }
    FixedOffset::east_opt((hours * 3600.0).round() as i32)
}

/// Convert a wall-clock time at the given offset to UTC
///
/// The result is `local - offset`: noon at `+3` is 09:00 UTC.
pub fn to_utc(local: NaiveDateTime, offset: FixedOffset) -> DateTime<Utc> {
    DateTime::from_naive_utc_and_offset(local - offset, Utc)
}

/// Whether a scheduled time is strictly in the future
pub fn is_future(scheduled: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    scheduled > now
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn local(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_local_datetime_valid() {
        assert_eq!(
            parse_local_datetime("2030-01-01 12:00"),
            Some(local(2030, 1, 1, 12, 0))
        );
        // Surrounding whitespace is tolerated
        assert_eq!(
            parse_local_datetime("  2030-01-01 12:00  "),
            Some(local(2030, 1, 1, 12, 0))
        );
    }

    #[test]
    fn test_parse_local_datetime_invalid() {
        assert_eq!(parse_local_datetime("tomorrow at noon"), None);
        assert_eq!(parse_local_datetime("2030-01-01"), None);
        assert_eq!(parse_local_datetime("2030-13-01 12:00"), None);
        assert_eq!(parse_local_datetime("12:00 2030-01-01"), None);
        assert_eq!(parse_local_datetime(""), None);
    }

    #[test]
    fn test_parse_offset_hours() {
        assert_eq!(parse_offset_hours("+0"), FixedOffset::east_opt(0));
        assert_eq!(parse_offset_hours("-5"), FixedOffset::east_opt(-5 * 3600));
        assert_eq!(parse_offset_hours("+3.5"), FixedOffset::east_opt(12600));
        assert_eq!(parse_offset_hours("3.5"), FixedOffset::east_opt(12600));
    }

    #[test]
    fn test_parse_offset_hours_invalid() {
        assert_eq!(parse_offset_hours("EST"), None);
        assert_eq!(parse_offset_hours(""), None);
        assert_eq!(parse_offset_hours("nan"), None);
        assert_eq!(parse_offset_hours("inf"), None);
        // Out of the +/-24h range a fixed offset can express
        assert_eq!(parse_offset_hours("24"), None);
        assert_eq!(parse_offset_hours("-30"), None);
    }

    #[test]
    fn test_to_utc_zero_offset() {
        let utc = to_utc(local(2030, 1, 1, 12, 0), FixedOffset::east_opt(0).unwrap());
        assert_eq!(utc, Utc.with_ymd_and_hms(2030, 1, 1, 12, 0, 0).unwrap());
    }

    #[test]
    fn test_to_utc_negative_offset() {
        // Noon at -5 is 17:00 UTC
        let utc = to_utc(
            local(2030, 1, 1, 12, 0),
            FixedOffset::east_opt(-5 * 3600).unwrap(),
        );
        assert_eq!(utc, Utc.with_ymd_and_hms(2030, 1, 1, 17, 0, 0).unwrap());
    }

    #[test]
    fn test_to_utc_fractional_offset() {
        // Noon at +3.5 is 08:30 UTC
        let utc = to_utc(
            local(2030, 1, 1, 12, 0),
            parse_offset_hours("+3.5").unwrap(),
        );
        assert_eq!(utc, Utc.with_ymd_and_hms(2030, 1, 1, 8, 30, 0).unwrap());
    }

    #[test]
    fn test_is_future() {
        let now = Utc.with_ymd_and_hms(2026, 8, 26, 0, 0, 0).unwrap();
        let past = to_utc(local(2000, 1, 1, 0, 0), FixedOffset::east_opt(0).unwrap());
        let future = to_utc(local(2030, 1, 1, 0, 0), FixedOffset::east_opt(0).unwrap());

        assert!(!is_future(past, now));
        assert!(!is_future(now, now));
        assert!(is_future(future, now));
    }
}
