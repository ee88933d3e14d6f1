//! Mobile-number format check

use regex::Regex;
use std::sync::OnceLock;

fn mobile_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^1\d{10}$").unwrap_or_else(|e| unreachable!("mobile pattern is valid: {e}"))
    })
}

/// Validate an 11-digit mainland mobile number (leading 1)
pub fn mobile_valid(val: &str) -> bool {
    let s = val.trim();
    s.len() == 11 && mobile_regex().is_match(s)
}
