//! quickkit date engine
//!
//! Normalizes heterogeneous date inputs (canonical values, epoch-millisecond
//! numbers, digit strings, loosely-formatted date strings, "now" sentinels)
//! into a [`QuickDateTime`], renders dates through token templates, and
//! provides relative-time phrasing plus range and boundary helpers.
//!
//! Only [`auto`] and [`parse`] can fail; every operation downstream of a valid
//! `QuickDateTime` is infallible.

mod error;
mod format;
mod input;
mod parse;
mod range;
mod relative;

pub use error::DateError;
pub use format::{
    auto_year_format, format, format_template, render, Separator, DATE_TEMPLATE, DEFAULT_TEMPLATE,
};
pub use input::{auto, DateInput};
pub use parse::parse;
pub use range::{
    get_current_quarter, get_date_fixed, get_first_day_of_month, get_last_day_of_month,
    get_last_day_of_month_time, get_some_days_date, get_some_hours_date, get_some_minutes_date,
    get_some_months_date, get_some_seconds_date, get_time_fixed, leap_year, DayBound,
};
pub use relative::{ago, ago_with, diff_days, AgoFallback};

pub use quickkit_core::QuickDateTime;
