//! Relative-time phrasing and day differences

use crate::error::DateError;
use crate::format::{render, DEFAULT_TEMPLATE};
use crate::input::{auto, DateInput};
use quickkit_core::{QuickDateTime, MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE};

/// Fallback invoked by [`ago_with`] past the day limit:
/// `(a, b, max_days, delta_millis, symbol)`
pub type AgoFallback<'a> = &'a dyn Fn(QuickDateTime, QuickDateTime, i64, i64, &str) -> String;

/// Relative phrase for `a` against now, capped at 365 days
pub fn ago(a: impl Into<DateInput>) -> Result<String, DateError> {
    ago_with(a, DateInput::Now, 365, None)
}

/// Relative phrase for `a` against `b`
///
/// `a` earlier than `b` reads as 前 (ago), later as 后 (from now). Past
/// `max_days` the fallback decides the phrasing; without one the date itself
/// is rendered through the default template.
pub fn ago_with(
    a: impl Into<DateInput>,
    b: impl Into<DateInput>,
    max_days: i64,
    fallback: Option<AgoFallback>,
) -> Result<String, DateError> {
    let a = auto(a)?;
    let b = auto(b)?;
    let delta = a.as_unix_millis() - b.as_unix_millis();
    let s = delta.abs();
    let symbol = if delta < 0 { "前" } else { "后" };

    if s < 5 * 1000 {
        return Ok(if symbol == "前" { "刚刚" } else { "即将" }.to_string());
    }
    if s < 60 * 1000 {
        return Ok(format!("1分钟{symbol}"));
    }
    if s < MILLIS_PER_HOUR {
        return Ok(format!("{}分钟{symbol}", s / MILLIS_PER_MINUTE));
    }
    if s < MILLIS_PER_DAY {
        return Ok(format!("{}小时{symbol}", s / MILLIS_PER_HOUR));
    }
    if s < max_days * MILLIS_PER_DAY {
        return Ok(format!("{}天{symbol}", s / MILLIS_PER_DAY));
    }
    if let Some(callback) = fallback {
        return Ok(callback(a, b, max_days, s, symbol));
    }
    Ok(render(&a, DEFAULT_TEMPLATE))
}

/// Absolute whole-day difference, both dates truncated to start of day first
pub fn diff_days(a: impl Into<DateInput>, b: impl Into<DateInput>) -> Result<i64, DateError> {
    let a = auto(a)?.start_of_day().as_unix_millis();
    let b = auto(b)?.start_of_day().as_unix_millis();
    Ok((a - b).abs() / MILLIS_PER_DAY)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(millis: i64) -> QuickDateTime {
        QuickDateTime::from_unix_millis(millis)
    }

    #[test]
    fn test_ago_just_now_and_about_to() {
        let b = at(1_000_000_000);
        assert_eq!(ago_with(at(999_998_000), b, 365, None).unwrap(), "刚刚");
        assert_eq!(ago_with(at(1_000_002_000), b, 365, None).unwrap(), "即将");
    }

    #[test]
    fn test_ago_under_a_minute() {
        let b = at(1_000_000_000);
        assert_eq!(ago_with(at(1_000_000_000 - 30_000), b, 365, None).unwrap(), "1分钟前");
        assert_eq!(ago_with(at(1_000_000_000 + 30_000), b, 365, None).unwrap(), "1分钟后");
    }

    #[test]
    fn test_ago_minutes_and_hours() {
        let b = at(0);
        assert_eq!(ago_with(at(-5 * MILLIS_PER_MINUTE), b, 365, None).unwrap(), "5分钟前");
        assert_eq!(ago_with(at(3 * MILLIS_PER_HOUR), b, 365, None).unwrap(), "3小时后");
    }

    #[test]
    fn test_ago_days() {
        let b = at(0);
        assert_eq!(ago_with(at(-3 * MILLIS_PER_DAY), b, 365, None).unwrap(), "3天前");
    }

    #[test]
    fn test_ago_past_limit_renders_date() {
        let a = QuickDateTime::from_ymd_hms(2000, 1, 1, 12, 0, 0).unwrap();
        let b = QuickDateTime::from_ymd(2021, 1, 1).unwrap();
        assert_eq!(ago_with(a, b, 365, None).unwrap(), "2000/01/01 12:00:00");
    }

    #[test]
    fn test_ago_past_limit_invokes_fallback() {
        let a = QuickDateTime::from_ymd(2000, 1, 1).unwrap();
        let b = QuickDateTime::from_ymd(2021, 1, 1).unwrap();
        let phrase = ago_with(
            a,
            b,
            365,
            Some(&|_, _, max_days, _, symbol| format!("超过{max_days}天{symbol}")),
        )
        .unwrap();
        assert_eq!(phrase, "超过365天前");
    }

    #[test]
    fn test_diff_days_reflexive() {
        let d = QuickDateTime::from_ymd_hms(2021, 6, 15, 23, 59, 59).unwrap();
        assert_eq!(diff_days(d, d).unwrap(), 0);
    }

    #[test]
    fn test_diff_days_ignores_time_of_day() {
        let a = QuickDateTime::from_ymd_hms(2021, 6, 15, 23, 0, 0).unwrap();
        let b = QuickDateTime::from_ymd_hms(2021, 6, 16, 1, 0, 0).unwrap();
        assert_eq!(diff_days(a, b).unwrap(), 1);
        assert_eq!(diff_days(b, a).unwrap(), 1);
    }

    #[test]
    fn test_diff_days_across_months() {
        let a = QuickDateTime::from_ymd(2024, 2, 28).unwrap();
        let b = QuickDateTime::from_ymd(2024, 3, 1).unwrap();
        assert_eq!(diff_days(a, b).unwrap(), 2); // 2024 is a leap year
    }
}
