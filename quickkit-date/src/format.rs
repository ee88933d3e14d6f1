//! Template-driven date rendering
//!
//! Supported tokens (case-insensitive; anything else passes through):
//! - `yyyy` / `yy`: full year / last two digits
//! - `m` / `mm`: month, plain / zero-padded
//! - `d` / `dd`: day, plain / zero-padded
//! - `h` / `hh`: hour (0-23), plain / zero-padded
//! - `i` / `ii`: minute, plain / zero-padded
//! - `s` / `ss`: second, plain / zero-padded
//! - `ms` / `mss`: millisecond, plain / three-digit
//! - `w` / `ww`: weekday 1-7 (Sunday=7), plain / zero-padded
//! - `wz`: weekday as a single Chinese character, Sunday first
//!
//! Substitution is a single pass over one longest-token-first alternation,
//! compiled once, so `mm` can never be clobbered by a prior `m` replacement.

use crate::error::DateError;
use crate::input::{auto, DateInput};
use quickkit_core::QuickDateTime;
use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Template used when the caller supplies none
pub const DEFAULT_TEMPLATE: &str = "yyyy/mm/dd hh:ii:ss";

/// Floor template for date-only rendering (empty template falls back here)
pub const DATE_TEMPLATE: &str = "yyyy/mm/dd";

/// Weekday characters, Sunday first
const WEEKDAY_ZH: [&str; 7] = ["日", "一", "二", "三", "四", "五", "六"];

fn token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // Longer tokens before shorter overlapping ones
        Regex::new(r"(?i)yyyy|yy|mss|ms|mm|m|dd|d|hh|h|ii|i|ss|s|wz|ww|w")
            .unwrap_or_else(|e| unreachable!("token pattern is valid: {e}"))
    })
}

/// Render a canonical date value through a token template
pub fn render(date: &QuickDateTime, tpl: &str) -> String {
    let tpl = if tpl.is_empty() { DATE_TEMPLATE } else { tpl };
    let weekday = date.weekday(); // 1=Monday .. 7=Sunday
    token_regex()
        .replace_all(tpl, |caps: &Captures| {
            match caps[0].to_ascii_lowercase().as_str() {
                "yyyy" => date.year().to_string(),
                "yy" => format!("{:02}", date.year().rem_euclid(100)),
                "m" => date.month().to_string(),
                "mm" => format!("{:02}", date.month()),
                "d" => date.day().to_string(),
                "dd" => format!("{:02}", date.day()),
                "h" => date.hour().to_string(),
                "hh" => format!("{:02}", date.hour()),
                "i" => date.minute().to_string(),
                "ii" => format!("{:02}", date.minute()),
                "s" => date.second().to_string(),
                "ss" => format!("{:02}", date.second()),
                "ms" => date.millisecond().to_string(),
                "mss" => format!("{:03}", date.millisecond()),
                "w" => weekday.to_string(),
                "ww" => format!("{:02}", weekday),
                "wz" => WEEKDAY_ZH[(weekday % 7) as usize].to_string(),
                other => other.to_string(),
            }
        })
        .into_owned()
}

/// Format any flexible date input; `None` means [`DEFAULT_TEMPLATE`]
pub fn format(input: impl Into<DateInput>, tpl: Option<&str>) -> Result<String, DateError> {
    let date = auto(input)?;
    Ok(render(&date, tpl.unwrap_or(DEFAULT_TEMPLATE)))
}

// ============================================================================
// Separator-driven templates
// ============================================================================

/// Separator specification for [`format_template`]
///
/// A single string is used between all components; a list supplies one
/// separator per boundary in order; the record form names the suffix after
/// each of year, month and day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Separator {
    Uniform(String),
    PerBoundary(Vec<String>),
    Fields { y: String, m: String, d: String },
}

impl Default for Separator {
    fn default() -> Self {
        Separator::Uniform("/".to_string())
    }
}

impl From<&str> for Separator {
    fn from(s: &str) -> Self {
        Separator::Uniform(s.to_string())
    }
}

/// Derive a date template from a separator specification
pub fn format_template(separator: &Separator, with_year: bool) -> String {
    match separator {
        Separator::Uniform(s) => {
            if with_year {
                format!("yyyy{s}mm{s}dd")
            } else {
                format!("mm{s}dd")
            }
        }
        Separator::PerBoundary(seps) => {
            let tokens: &[&str] = if with_year {
                &["yyyy", "mm", "dd"]
            } else {
                &["mm", "dd"]
            };
            tokens
                .iter()
                .enumerate()
                .map(|(i, token)| {
                    let sep = seps.get(i).map(String::as_str).unwrap_or("");
                    format!("{token}{sep}")
                })
                .collect()
        }
        Separator::Fields { y, m, d } => {
            if with_year {
                format!("yyyy{y}mm{m}dd{d}")
            } else {
                format!("mm{m}dd{d}")
            }
        }
    }
}

/// Format a date, omitting the year when it falls in the current calendar year
pub fn auto_year_format(
    separator: &Separator,
    input: impl Into<DateInput>,
) -> Result<String, DateError> {
    let date = auto(input)?;
    let with_year = date.year() != QuickDateTime::now().year();
    Ok(render(&date, &format_template(separator, with_year)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> QuickDateTime {
        QuickDateTime::from_ymd_hms_milli(2021, 6, 5, 8, 9, 7, 42).unwrap()
    }

    #[test]
    fn test_render_default_template() {
        assert_eq!(render(&sample(), DEFAULT_TEMPLATE), "2021/06/05 08:09:07");
    }

    #[test]
    fn test_render_date_only() {
        let x = QuickDateTime::from_ymd(2000, 1, 1).unwrap();
        assert_eq!(render(&x, "yyyy/mm/dd"), "2000/01/01");
    }

    #[test]
    fn test_render_empty_template_falls_back() {
        assert_eq!(render(&sample(), ""), "2021/06/05");
    }

    #[test]
    fn test_render_variable_width_tokens() {
        assert_eq!(render(&sample(), "m-d h:i:s"), "6-5 8:9:7");
        assert_eq!(render(&sample(), "yy"), "21");
    }

    #[test]
    fn test_render_milliseconds() {
        assert_eq!(render(&sample(), "ms"), "42");
        assert_eq!(render(&sample(), "mss"), "042");
    }

    #[test]
    fn test_render_weekday_tokens() {
        // 2021-06-05 is a Saturday
        assert_eq!(render(&sample(), "w"), "6");
        assert_eq!(render(&sample(), "ww"), "06");
        assert_eq!(render(&sample(), "wz"), "六");

        // 2021-06-06 is a Sunday
        let sunday = QuickDateTime::from_ymd(2021, 6, 6).unwrap();
        assert_eq!(render(&sunday, "w"), "7");
        assert_eq!(render(&sunday, "wz"), "日");
    }

    #[test]
    fn test_render_case_insensitive() {
        assert_eq!(render(&sample(), "YYYY/MM/DD"), "2021/06/05");
    }

    #[test]
    fn test_render_passes_literals_through() {
        let x = QuickDateTime::from_ymd(2021, 6, 5).unwrap();
        assert_eq!(render(&x, "yyyy年!"), "2021年!");
    }

    #[test]
    fn test_format_from_input() {
        assert_eq!(
            format("2000-01-01", Some("yyyy/mm/dd")).unwrap(),
            "2000/01/01"
        );
        assert_eq!(format("2000-01-01", None).unwrap(), "2000/01/01 00:00:00");
    }

    #[test]
    fn test_format_round_trip_truncates_to_seconds() {
        let d = sample();
        let restored = auto(format(d, None).unwrap().as_str()).unwrap();
        assert_eq!(restored, d.with_time(8, 9, 7, 0).unwrap());
    }

    #[test]
    fn test_format_template_uniform() {
        assert_eq!(format_template(&"/".into(), false), "mm/dd");
        assert_eq!(format_template(&"/".into(), true), "yyyy/mm/dd");
    }

    #[test]
    fn test_format_template_per_boundary() {
        let sep = Separator::PerBoundary(vec!["年".into(), "月".into(), "日".into()]);
        assert_eq!(format_template(&sep, true), "yyyy年mm月dd日");
        assert_eq!(format_template(&sep, false), "mm年dd月");

        // Missing separators render as nothing
        let sparse = Separator::PerBoundary(vec!["-".into()]);
        assert_eq!(format_template(&sparse, true), "yyyy-mmdd");
    }

    #[test]
    fn test_format_template_fields() {
        let sep = Separator::Fields {
            y: "年".into(),
            m: "月".into(),
            d: "日".into(),
        };
        assert_eq!(format_template(&sep, true), "yyyy年mm月dd日");
        assert_eq!(format_template(&sep, false), "mm月dd日");
    }

    #[test]
    fn test_auto_year_format() {
        let this_year = QuickDateTime::now();
        let rendered = auto_year_format(&Separator::default(), this_year).unwrap();
        assert_eq!(rendered, render(&this_year, "mm/dd"));

        let other_year = QuickDateTime::from_ymd(2000, 1, 2).unwrap();
        assert_eq!(
            auto_year_format(&Separator::default(), other_year).unwrap(),
            "2000/01/02"
        );
    }
}
