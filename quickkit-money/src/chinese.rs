//! Chinese numeral transcription of monetary amounts
//!
//! Amounts are rendered to two decimal places, the integer part is grouped
//! into four-digit levels (万, 亿), runs of 零 collapse to a single 零, and
//! whole amounts get the 整 suffix. Amounts below one yuan render as the
//! empty string.

use crate::error::MoneyError;

/// Largest amount [`number_to_chinese`] will transcribe
pub const MAX_CHINESE_AMOUNT: f64 = 999_999_999_999.99;

/// Numeral style for the transcription
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DigitCase {
    Lower,
    #[default]
    Upper,
}

const DIGITS_LOWER: [&str; 10] = ["零", "一", "二", "三", "四", "五", "六", "七", "八", "九"];
const DIGITS_UPPER: [&str; 10] = ["零", "壹", "贰", "叁", "肆", "伍", "陆", "柒", "捌", "玖"];
const UNITS_LOWER: [&str; 4] = ["", "十", "百", "千"];
const UNITS_UPPER: [&str; 4] = ["", "拾", "佰", "仟"];
const LEVELS: [&str; 3] = ["", "万", "亿"];
const DECIMAL_UNITS: [&str; 2] = ["角", "分"];

/// Transcribe a yuan amount into Chinese numerals
pub fn number_to_chinese(amount: f64, case: DigitCase) -> Result<String, MoneyError> {
    if !(0.0..=MAX_CHINESE_AMOUNT).contains(&amount) {
        return Err(MoneyError::AmountOutOfRange { amount });
    }

    let (digits, units) = match case {
        DigitCase::Lower => (&DIGITS_LOWER, &UNITS_LOWER),
        DigitCase::Upper => (&DIGITS_UPPER, &UNITS_UPPER),
    };

    let rendered = format!("{amount:.2}");
    let (int_part, dec_part) = rendered
        .split_once('.')
        .unwrap_or((rendered.as_str(), "00"));

    // Four-digit levels, least significant first while collecting.
    let int_digits: Vec<usize> = int_part
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as usize)
        .collect();
    let mut levels: Vec<Vec<String>> = Vec::new();
    for (idx, d) in int_digits.iter().rev().enumerate() {
        if idx % 4 == 0 {
            levels.push(Vec::new());
        }
        let piece = if *d == 0 {
            digits[0].to_string()
        } else {
            format!("{}{}", digits[*d], units[idx % 4])
        };
        if let Some(level) = levels.last_mut() {
            level.insert(0, piece);
        }
    }
    levels.reverse();

    let level_count = levels.len();
    let mut integer = String::new();
    for (idx, level) in levels.iter().enumerate() {
        let mut joined = collapse_zeros(&level.concat());
        let mut suffix = LEVELS[level_count - idx - 1];
        if joined == digits[0] {
            // a level of nothing but zeros disappears with its suffix
            joined.clear();
            suffix = "";
        } else if joined.ends_with(digits[0]) {
            joined.truncate(joined.len() - digits[0].len());
        }
        integer.push_str(&joined);
        integer.push_str(suffix);
    }

    let mut decimal = String::new();
    if dec_part.parse::<u32>().unwrap_or(0) != 0 {
        for (idx, c) in dec_part.chars().enumerate() {
            let d = c.to_digit(10).unwrap_or(0) as usize;
            decimal.push_str(digits[d]);
            if d != 0 {
                decimal.push_str(DECIMAL_UNITS[idx]);
            }
        }
        if decimal.ends_with(digits[0]) {
            decimal.truncate(decimal.len() - digits[0].len());
        }
    }

    if integer.is_empty() {
        return Ok(String::new());
    }
    if decimal.is_empty() {
        decimal.push_str("整");
    }
    Ok(format!("{integer}元{decimal}"))
}

fn collapse_zeros(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_zero = false;
    for c in s.chars() {
        let is_zero = c == '零';
        if !(is_zero && prev_zero) {
            out.push(c);
        }
        prev_zero = is_zero;
    }
    out
}
