//! Flexible date input and the `auto` normalizer

use crate::error::DateError;
use crate::parse::parse;
use quickkit_core::QuickDateTime;

/// The accepted external representations of a point in time
///
/// `Now` (also produced by `None` and the empty string) means "current instant
/// at call time". A digit-only string is treated as epoch milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DateInput {
    #[default]
    Now,
    DateTime(QuickDateTime),
    Millis(i64),
    Text(String),
}

impl From<QuickDateTime> for DateInput {
    fn from(dt: QuickDateTime) -> Self {
        DateInput::DateTime(dt)
    }
}

impl From<i64> for DateInput {
    fn from(millis: i64) -> Self {
        DateInput::Millis(millis)
    }
}

impl From<&str> for DateInput {
    fn from(s: &str) -> Self {
        DateInput::Text(s.to_string())
    }
}

impl From<String> for DateInput {
    fn from(s: String) -> Self {
        DateInput::Text(s)
    }
}

impl<T: Into<DateInput>> From<Option<T>> for DateInput {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => DateInput::Now,
        }
    }
}

/// Normalize any flexible input into a canonical date value
///
/// First match wins: an already-canonical value is returned as an independent
/// copy; the now-sentinel (and empty strings) yield the current instant; a
/// digit-only string is parsed as epoch milliseconds; any other string is
/// handed to [`parse`].
pub fn auto(input: impl Into<DateInput>) -> Result<QuickDateTime, DateError> {
    match input.into() {
        DateInput::Now => Ok(QuickDateTime::now()),
        DateInput::DateTime(dt) => Ok(dt),
        DateInput::Millis(millis) => Ok(QuickDateTime::from_unix_millis(millis)),
        DateInput::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(QuickDateTime::now());
            }
            if trimmed.bytes().all(|b| b.is_ascii_digit()) {
                return trimmed
                    .parse::<i64>()
                    .map(QuickDateTime::from_unix_millis)
                    .map_err(|_| DateError::InvalidInput(s.clone()));
            }
            parse(trimmed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_passes_through_datetime() {
        let dt = QuickDateTime::from_ymd(2021, 1, 1).unwrap();
        let result = auto(dt).unwrap();
        assert_eq!(result, dt);
    }

    #[test]
    fn test_auto_timestamp_round_trip() {
        let timestamp = 1_609_459_200_000i64; // 2021-01-01
        let result = auto(timestamp).unwrap();
        assert_eq!(result.as_unix_millis(), timestamp);
    }

    #[test]
    fn test_auto_digit_string_is_timestamp() {
        let result = auto("1609459200000").unwrap();
        assert_eq!(result.as_unix_millis(), 1_609_459_200_000);
    }

    #[test]
    fn test_auto_none_and_empty_mean_now() {
        let before = QuickDateTime::now().as_unix_millis();
        let from_none = auto(None::<i64>).unwrap().as_unix_millis();
        let from_empty = auto("").unwrap().as_unix_millis();
        let after = QuickDateTime::now().as_unix_millis();
        assert!((before..=after).contains(&from_none));
        assert!((before..=after).contains(&from_empty));
    }

    #[test]
    fn test_auto_date_string() {
        let result = auto("2021-01-01").unwrap();
        assert_eq!(result.to_ymd(), (2021, 1, 1));
    }

    #[test]
    fn test_auto_rejects_garbage() {
        let err = auto("invalid date").unwrap_err();
        assert!(matches!(err, DateError::InvalidDateString(_)));
    }

    #[test]
    fn test_auto_idempotent() {
        let first = auto("2021-06-15 08:30:00").unwrap();
        let second = auto(first).unwrap();
        assert_eq!(first, second);
    }
}
