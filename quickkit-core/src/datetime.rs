//! The canonical date value used across quickkit
//!
//! `QuickDateTime` stores milliseconds since the Unix epoch and exposes
//! calendar-field accessors over the Gregorian proleptic calendar.
//!
//! Design principles:
//! - No external datetime crates (keeps quickkit-core minimal)
//! - Naive wall-clock instants: no timezone field, `now()` reads the system
//!   clock in UTC
//! - `Copy` semantics: every operation returns a new value, so a caller's
//!   instance can never be mutated behind its back

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ============================================================================
// Constants
// ============================================================================

pub const MILLIS_PER_SECOND: i64 = 1_000;
pub const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
pub const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
pub const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Days in each month (non-leap year)
const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Days from year 0 to 1970-01-01
const UNIX_EPOCH_DAYS: i64 = 719_468;

// ============================================================================
// Errors
// ============================================================================

/// Errors raised when constructing a datetime from invalid components
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateTimeError {
    #[error("invalid month: {0} (must be 1-12)")]
    InvalidMonth(u32),

    #[error("invalid day: {day} for {month}/{year}")]
    InvalidDay { day: u32, month: u32, year: i32 },

    #[error("invalid hour: {0} (must be 0-23)")]
    InvalidHour(u32),

    #[error("invalid minute: {0} (must be 0-59)")]
    InvalidMinute(u32),

    #[error("invalid second: {0} (must be 0-59)")]
    InvalidSecond(u32),

    #[error("invalid millisecond: {0} (must be 0-999)")]
    InvalidMilli(u32),
}

// ============================================================================
// QuickDateTime
// ============================================================================

/// A datetime with millisecond precision
///
/// Internally stores milliseconds since the Unix epoch (negative for pre-1970
/// instants). Cheap to copy; all arithmetic returns a new value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct QuickDateTime {
    millis: i64,
}

impl QuickDateTime {
    // ========== Construction ==========

    /// Create a datetime from milliseconds since the Unix epoch
    pub fn from_unix_millis(millis: i64) -> Self {
        Self { millis }
    }

    /// Create a date (time = 00:00:00.000)
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateTimeError> {
        Self::from_ymd_hms_milli(year, month, day, 0, 0, 0, 0)
    }

    /// Create a datetime from components (milliseconds = 0)
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, DateTimeError> {
        Self::from_ymd_hms_milli(year, month, day, hour, minute, second, 0)
    }

    /// Create a datetime from all components
    pub fn from_ymd_hms_milli(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        milli: u32,
    ) -> Result<Self, DateTimeError> {
        if !(1..=12).contains(&month) {
            return Err(DateTimeError::InvalidMonth(month));
        }
        let max_day = days_in_month(year, month);
        if day < 1 || day > max_day {
            return Err(DateTimeError::InvalidDay { day, month, year });
        }
        if hour > 23 {
            return Err(DateTimeError::InvalidHour(hour));
        }
        if minute > 59 {
            return Err(DateTimeError::InvalidMinute(minute));
        }
        if second > 59 {
            return Err(DateTimeError::InvalidSecond(second));
        }
        if milli > 999 {
            return Err(DateTimeError::InvalidMilli(milli));
        }

        let days = days_from_civil(year, month, day);
        let time_millis = (hour as i64) * MILLIS_PER_HOUR
            + (minute as i64) * MILLIS_PER_MINUTE
            + (second as i64) * MILLIS_PER_SECOND
            + (milli as i64);

        Ok(Self {
            millis: days * MILLIS_PER_DAY + time_millis,
        })
    }

    /// Current instant from the system clock
    pub fn now() -> Self {
        let duration = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default();
        Self {
            millis: duration.as_millis() as i64,
        }
    }

    // ========== Accessors ==========

    /// Milliseconds since the Unix epoch
    pub fn as_unix_millis(&self) -> i64 {
        self.millis
    }

    /// Year component
    pub fn year(&self) -> i32 {
        let (y, _, _) = self.to_ymd();
        y
    }

    /// Month component (1-12)
    pub fn month(&self) -> u32 {
        let (_, m, _) = self.to_ymd();
        m
    }

    /// Day-of-month component (1-31)
    pub fn day(&self) -> u32 {
        let (_, _, d) = self.to_ymd();
        d
    }

    /// Hour component (0-23)
    pub fn hour(&self) -> u32 {
        (self.day_millis() / MILLIS_PER_HOUR) as u32
    }

    /// Minute component (0-59)
    pub fn minute(&self) -> u32 {
        ((self.day_millis() % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE) as u32
    }

    /// Second component (0-59)
    pub fn second(&self) -> u32 {
        ((self.day_millis() % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND) as u32
    }

    /// Millisecond component (0-999)
    pub fn millisecond(&self) -> u32 {
        (self.day_millis() % MILLIS_PER_SECOND) as u32
    }

    /// Day of week (1=Monday .. 7=Sunday)
    pub fn weekday(&self) -> u32 {
        let days = self.millis.div_euclid(MILLIS_PER_DAY);
        // 1970-01-01 was a Thursday (4)
        let dow = (days + 4).rem_euclid(7);
        if dow == 0 {
            7
        } else {
            dow as u32
        }
    }

    /// Decompose into year, month, day
    pub fn to_ymd(&self) -> (i32, u32, u32) {
        civil_from_days(self.millis.div_euclid(MILLIS_PER_DAY))
    }

    fn day_millis(&self) -> i64 {
        self.millis.rem_euclid(MILLIS_PER_DAY)
    }

    // ========== Field replacement ==========

    /// Replace the time-of-day components
    pub fn with_time(
        &self,
        hour: u32,
        minute: u32,
        second: u32,
        milli: u32,
    ) -> Result<Self, DateTimeError> {
        let (year, month, day) = self.to_ymd();
        Self::from_ymd_hms_milli(year, month, day, hour, minute, second, milli)
    }

    /// Replace the day-of-month, keeping the time of day
    pub fn with_day(&self, day: u32) -> Result<Self, DateTimeError> {
        let (year, month, _) = self.to_ymd();
        let days = days_from_civil_checked(year, month, day)?;
        Ok(Self {
            millis: days * MILLIS_PER_DAY + self.day_millis(),
        })
    }

    /// Replace the month, clamping the day to the target month's length
    pub fn with_month(&self, month: u32) -> Result<Self, DateTimeError> {
        if !(1..=12).contains(&month) {
            return Err(DateTimeError::InvalidMonth(month));
        }
        let (year, _, day) = self.to_ymd();
        let day = day.min(days_in_month(year, month));
        Ok(Self {
            millis: days_from_civil(year, month, day) * MILLIS_PER_DAY + self.day_millis(),
        })
    }

    // ========== Arithmetic ==========

    /// Add days (negative subtracts)
    pub fn add_days(&self, days: i64) -> Self {
        Self {
            millis: self.millis + days * MILLIS_PER_DAY,
        }
    }

    /// Add months, clamping the day to the end of the target month
    pub fn add_months(&self, months: i32) -> Self {
        let (year, month, day) = self.to_ymd();

        let total_months = (year as i64) * 12 + (month as i64 - 1) + (months as i64);
        let year = total_months.div_euclid(12) as i32;
        let month = (total_months.rem_euclid(12) + 1) as u32;
        let day = day.min(days_in_month(year, month));

        Self {
            millis: days_from_civil(year, month, day) * MILLIS_PER_DAY + self.day_millis(),
        }
    }

    /// Add hours (negative subtracts)
    pub fn add_hours(&self, hours: i64) -> Self {
        Self {
            millis: self.millis + hours * MILLIS_PER_HOUR,
        }
    }

    /// Add minutes (negative subtracts)
    pub fn add_minutes(&self, minutes: i64) -> Self {
        Self {
            millis: self.millis + minutes * MILLIS_PER_MINUTE,
        }
    }

    /// Add seconds (negative subtracts)
    pub fn add_seconds(&self, seconds: i64) -> Self {
        Self {
            millis: self.millis + seconds * MILLIS_PER_SECOND,
        }
    }

    // ========== Boundaries ==========

    /// Start of day (00:00:00.000)
    pub fn start_of_day(&self) -> Self {
        Self {
            millis: self.millis.div_euclid(MILLIS_PER_DAY) * MILLIS_PER_DAY,
        }
    }

    /// End of day (23:59:59.999)
    pub fn end_of_day(&self) -> Self {
        Self {
            millis: (self.millis.div_euclid(MILLIS_PER_DAY) + 1) * MILLIS_PER_DAY - 1,
        }
    }

    /// First day of the month at 00:00:00.000
    pub fn start_of_month(&self) -> Self {
        let (year, month, _) = self.to_ymd();
        Self {
            millis: days_from_civil(year, month, 1) * MILLIS_PER_DAY,
        }
    }

    /// Last day of the month at 23:59:59.999
    pub fn end_of_month(&self) -> Self {
        let (year, month, _) = self.to_ymd();
        let last = days_in_month(year, month);
        Self {
            millis: (days_from_civil(year, month, last) + 1) * MILLIS_PER_DAY - 1,
        }
    }
}

impl fmt::Display for QuickDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, month, day) = self.to_ymd();
        write!(
            f,
            "{:04}/{:02}/{:02} {:02}:{:02}:{:02}",
            year,
            month,
            day,
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}

// ============================================================================
// Calendar utilities (Gregorian proleptic)
// ============================================================================

/// Check if a year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Days in a month (0 for an out-of-range month)
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        m if (1..=12).contains(&m) => DAYS_IN_MONTH[(m - 1) as usize],
        _ => 0,
    }
}

fn days_from_civil_checked(year: i32, month: u32, day: u32) -> Result<i64, DateTimeError> {
    if !(1..=12).contains(&month) {
        return Err(DateTimeError::InvalidMonth(month));
    }
    if day < 1 || day > days_in_month(year, month) {
        return Err(DateTimeError::InvalidDay { day, month, year });
    }
    Ok(days_from_civil(year, month, day))
}

/// Convert a civil date to days since the Unix epoch
/// Algorithm from Howard Hinnant: http://howardhinnant.github.io/date_algorithms.html
fn days_from_civil(year: i32, month: u32, day: u32) -> i64 {
    let y = if month <= 2 { year - 1 } else { year } as i64;
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = (y - era * 400) as i64; // [0, 399]
    let m = month as i64;
    let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + day as i64 - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
    era * 146097 + doe - UNIX_EPOCH_DAYS
}

/// Convert days since the Unix epoch to a civil date
/// Algorithm from Howard Hinnant: http://howardhinnant.github.io/date_algorithms.html
fn civil_from_days(days: i64) -> (i32, u32, u32) {
    let z = days + UNIX_EPOCH_DAYS;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = (z - era * 146097) as u64; // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365; // [0, 399]
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let d = (doy - (153 * mp + 2) / 5 + 1) as u32; // [1, 31]
    let m = if mp < 10 { mp + 3 } else { mp - 9 } as u32; // [1, 12]
    let year = if m <= 2 { y + 1 } else { y };
    (year as i32, m, d)
}

// ============================================================================
// Tests
// ============================================================================
