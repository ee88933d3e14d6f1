//! Range queries, boundary helpers and unit-offset arithmetic

use crate::error::DateError;
use crate::input::{auto, DateInput};
use quickkit_core::{is_leap_year, QuickDateTime};

/// Which end of the day to clamp to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayBound {
    #[default]
    Start,
    End,
}

/// Clamp a date to 00:00:00.000 or 23:59:59.999 of its day
pub fn get_date_fixed(
    input: impl Into<DateInput>,
    bound: DayBound,
) -> Result<QuickDateTime, DateError> {
    let date = auto(input)?;
    Ok(match bound {
        DayBound::Start => date.start_of_day(),
        DayBound::End => date.end_of_day(),
    })
}

/// Same as [`get_date_fixed`] but as an epoch-millisecond timestamp
pub fn get_time_fixed(input: impl Into<DateInput>, bound: DayBound) -> Result<i64, DateError> {
    Ok(get_date_fixed(input, bound)?.as_unix_millis())
}

/// Start instant of the month containing the given date
pub fn get_first_day_of_month(input: impl Into<DateInput>) -> Result<QuickDateTime, DateError> {
    Ok(auto(input)?.start_of_month())
}

/// End instant of the given month (`month` is 1-12)
pub fn get_last_day_of_month(year: i32, month: u32) -> Result<QuickDateTime, DateError> {
    let first = QuickDateTime::from_ymd(year, month, 1)
        .map_err(|e| DateError::InvalidInput(e.to_string()))?;
    Ok(first.end_of_month())
}

/// End instant of the month containing the given date, as epoch milliseconds
pub fn get_last_day_of_month_time(input: impl Into<DateInput>) -> Result<i64, DateError> {
    Ok(auto(input)?.end_of_month().as_unix_millis())
}

/// Calendar quarter of the given date (1-4)
pub fn get_current_quarter(input: impl Into<DateInput>) -> Result<u32, DateError> {
    let date = auto(input)?;
    Ok((date.month() - 1) / 3 + 1)
}

/// Date offset by a signed number of days
pub fn get_some_days_date(
    num: i64,
    input: impl Into<DateInput>,
) -> Result<QuickDateTime, DateError> {
    Ok(auto(input)?.add_days(num))
}

/// Date offset by a signed number of months (day clamped at month end)
pub fn get_some_months_date(
    num: i32,
    input: impl Into<DateInput>,
) -> Result<QuickDateTime, DateError> {
    Ok(auto(input)?.add_months(num))
}

/// Date offset by a signed number of hours
pub fn get_some_hours_date(
    num: i64,
    input: impl Into<DateInput>,
) -> Result<QuickDateTime, DateError> {
    Ok(auto(input)?.add_hours(num))
}

/// Date offset by a signed number of minutes
pub fn get_some_minutes_date(
    num: i64,
    input: impl Into<DateInput>,
) -> Result<QuickDateTime, DateError> {
    Ok(auto(input)?.add_minutes(num))
}

/// Date offset by a signed number of seconds
pub fn get_some_seconds_date(
    num: i64,
    input: impl Into<DateInput>,
) -> Result<QuickDateTime, DateError> {
    Ok(auto(input)?.add_seconds(num))
}

/// Whether the given date falls in a leap year (canonical Gregorian rule)
pub fn leap_year(input: impl Into<DateInput>) -> Result<bool, DateError> {
    Ok(is_leap_year(auto(input)?.year()))
}
