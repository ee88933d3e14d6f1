//! Mainland-China resident ID validation
//!
//! 18-character IDs: 6-digit region code, 8-digit birth date, 3-digit
//! sequence, 1 checksum character. The checksum is ∑(ai × Wi) mod 11 over the
//! first 17 digits against a fixed parity table.

use regex::Regex;
use std::sync::OnceLock;

/// Region-code prefixes and their names
const REGIONS: [(&str, &str); 35] = [
    ("11", "北京"),
    ("12", "天津"),
    ("13", "河北"),
    ("14", "山西"),
    ("15", "内蒙古"),
    ("21", "辽宁"),
    ("22", "吉林"),
    ("23", "黑龙江"),
    ("31", "上海"),
    ("32", "江苏"),
    ("33", "浙江"),
    ("34", "安徽"),
    ("35", "福建"),
    ("36", "江西"),
    ("37", "山东"),
    ("41", "河南"),
    ("42", "湖北"),
    ("43", "湖南"),
    ("44", "广东"),
    ("45", "广西"),
    ("46", "海南"),
    ("50", "重庆"),
    ("51", "四川"),
    ("52", "贵州"),
    ("53", "云南"),
    ("54", "西藏"),
    ("61", "陕西"),
    ("62", "甘肃"),
    ("63", "青海"),
    ("64", "宁夏"),
    ("65", "新疆"),
    ("71", "台湾"),
    ("81", "香港"),
    ("82", "澳门"),
    ("91", "国外"),
];

/// Weights for the first 17 digits
const FACTOR: [u32; 17] = [7, 9, 10, 5, 8, 4, 2, 1, 6, 3, 7, 9, 10, 5, 8, 4, 2];

/// Checksum characters indexed by the weighted sum mod 11
const PARITY: [u8; 11] = [b'1', b'0', b'X', b'9', b'8', b'7', b'6', b'5', b'4', b'3', b'2'];

fn format_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\d{6}(18|19|20)\d{2}(0[1-9]|1[0-2])(0[1-9]|[12]\d|3[01])\d{3}(\d|X)$")
            .unwrap_or_else(|e| unreachable!("id pattern is valid: {e}"))
    })
}

/// Province name for a two-digit region prefix
pub fn region_name(code: &str) -> Option<&'static str> {
    REGIONS
        .iter()
        .find(|(prefix, _)| *prefix == code)
        .map(|(_, name)| *name)
}

/// Validate an 18-character resident ID number
pub fn id_card_valid(val: &str) -> bool {
    let s = val.trim().to_ascii_uppercase();
    if s.len() != 18 {
        return false;
    }
    if !format_regex().is_match(&s) {
        return false;
    }
    if region_name(&s[..2]).is_none() {
        return false;
    }

    let bytes = s.as_bytes();
    let sum: u32 = bytes[..17]
        .iter()
        .zip(FACTOR)
        .map(|(b, w)| (b - b'0') as u32 * w)
        .sum();
    PARITY[(sum % 11) as usize] == bytes[17]
}
