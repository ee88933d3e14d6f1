//! quickkit core - the canonical date value
//!
//! This crate provides `QuickDateTime`, the normalized instant every other
//! quickkit date operation works on, plus the Gregorian calendar utilities
//! (`is_leap_year`, `days_in_month`) it is built from.

mod datetime;

pub use datetime::{
    days_in_month, is_leap_year, DateTimeError, QuickDateTime, MILLIS_PER_DAY, MILLIS_PER_HOUR,
    MILLIS_PER_MINUTE, MILLIS_PER_SECOND,
};
