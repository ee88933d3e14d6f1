//! Loose date-string parsing
//!
//! Separator normalization first, component parsing second: `-` becomes `/`,
//! the first `T` becomes a space, a fractional-seconds suffix starting at the
//! first `.` is stripped, and `Z` becomes a ` UTC` marker. The normalized
//! string must then read as `Y/M/D[ H:I[:S]][ UTC]`. Instants are naive
//! wall-clock values, so a trailing `UTC` marker is accepted and ignored.

use crate::error::DateError;
use quickkit_core::QuickDateTime;

/// Convert a loosely-formatted date string into a canonical date value
pub fn parse(input: &str) -> Result<QuickDateTime, DateError> {
    let normalized = normalize(input);
    parse_normalized(&normalized).ok_or_else(|| DateError::InvalidDateString(input.to_string()))
}

fn normalize(s: &str) -> String {
    let mut out = s.trim().replace('-', "/").replacen('T', " ", 1);
    if let Some(dot) = out.find('.') {
        out.truncate(dot);
    }
    out.replacen('Z', " UTC", 1)
}

fn parse_normalized(s: &str) -> Option<QuickDateTime> {
    let mut parts = s.split_whitespace();
    let date_part = parts.next()?;
    let mut time_part = parts.next();
    if time_part == Some("UTC") {
        time_part = None;
    } else if let Some(tail) = parts.next() {
        if tail != "UTC" {
            return None;
        }
    }
    if parts.next().is_some() {
        return None;
    }

    let mut fields = date_part.split('/');
    let year: i32 = fields.next()?.parse().ok()?;
    let month: u32 = fields.next()?.parse().ok()?;
    let day: u32 = match fields.next() {
        Some(v) => v.parse().ok()?,
        None => 1,
    };
    if fields.next().is_some() {
        return None;
    }

    let (hour, minute, second) = match time_part {
        Some(t) => {
            let mut fields = t.split(':');
            let hour: u32 = fields.next()?.parse().ok()?;
            let minute: u32 = fields.next()?.parse().ok()?;
            let second: u32 = match fields.next() {
                Some(v) => v.parse().ok()?,
                None => 0,
            };
            if fields.next().is_some() {
                return None;
            }
            (hour, minute, second)
        }
        None => (0, 0, 0),
    };

    QuickDateTime::from_ymd_hms(year, month, day, hour, minute, second).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dashed_date() {
        let dt = parse("2021-01-01").unwrap();
        assert_eq!(dt.to_ymd(), (2021, 1, 1));
        assert_eq!(dt.hour(), 0);
    }

    #[test]
    fn test_parse_slashed_datetime() {
        let dt = parse("2021/06/15 08:30:45").unwrap();
        assert_eq!(dt.to_ymd(), (2021, 6, 15));
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (8, 30, 45));
    }

    #[test]
    fn test_parse_iso_t_separator() {
        let dt = parse("2021-06-15T08:30:45").unwrap();
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (8, 30, 45));
    }

    #[test]
    fn test_parse_strips_fraction_and_zone() {
        let dt = parse("2021-06-15T08:30:45.123Z").unwrap();
        assert_eq!(dt.to_ymd(), (2021, 6, 15));
        assert_eq!(dt.second(), 45);
        assert_eq!(dt.millisecond(), 0);
    }

    #[test]
    fn test_parse_z_suffix_without_fraction() {
        let dt = parse("2021-06-15T08:30:45Z").unwrap();
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (8, 30, 45));
    }

    #[test]
    fn test_parse_missing_time_fields_default() {
        let dt = parse("2021-06").unwrap();
        assert_eq!(dt.to_ymd(), (2021, 6, 1));

        let dt = parse("2021/06/15 08:30").unwrap();
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (8, 30, 0));
    }

    #[test]
    fn test_parse_rejects_invalid() {
        assert!(parse("invalid date").is_err());
        assert!(parse("2021-13-01").is_err());
        assert!(parse("2021-02-30").is_err());
        assert!(parse("2021-01-01 25:00:00").is_err());
        assert!(parse("2021/01/01/01").is_err());
    }

    #[test]
    fn test_parse_error_carries_input() {
        let err = parse("not a date").unwrap_err();
        assert_eq!(err, DateError::InvalidDateString("not a date".to_string()));
    }
}
