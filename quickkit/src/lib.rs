//! quickkit - small utilities for dates, key paths, validation, and money
//!
//! A facade over the member crates. Each member stays usable on its own;
//! this crate re-exports them under stable module names plus a [`prelude`]
//! for the common call sites.

pub use quickkit_core as core;
pub use quickkit_date as date;
pub use quickkit_mapping as mapping;
pub use quickkit_money as money;
pub use quickkit_validate as validate;

/// The usual imports in one line
pub mod prelude {
    pub use quickkit_core::QuickDateTime;
    pub use quickkit_date::{ago, auto, diff_days, format, parse, DateError, DateInput};
    pub use quickkit_mapping::{each, get, mapping, KeyMap};
    pub use quickkit_money::{
        number_to_chinese, sum, to_fen, to_wan, to_yuan, DigitCase, MoneyUnit,
    };
    pub use quickkit_validate::{id_card_valid, is_empty, mobile_valid, normal_money_valid};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use serde_json::json;

    #[test]
    fn test_parse_then_format() {
        let dt = auto("2024-02-29T08:05:00").unwrap();
        assert_eq!(
            format(dt, Some("yyyy/mm/dd hh:ii:ss")).unwrap(),
            "2024/02/29 08:05:00"
        );
    }

    #[test]
    fn test_resolve_then_sum() {
        let data = json!({"order": {"lines": [{"price": 0.1}, {"price": 0.2}]}});
        let a = mapping(&data, "order.lines[0].price").unwrap();
        let b = mapping(&data, "order.lines[1].price").unwrap();
        assert_eq!(sum(&[a.clone(), b.clone()]), 0.3);
    }

    #[test]
    fn test_validate_then_transcribe() {
        assert!(normal_money_valid("1234.56"));
        assert_eq!(
            number_to_chinese(1234.56, DigitCase::Upper).unwrap(),
            "壹仟贰佰叁拾肆元伍角陆分"
        );
    }

    #[test]
    fn test_projection() {
        let tpl: KeyMap =
            serde_json::from_value(json!({"who": "user.name", "city": "user.address.city"}))
                .unwrap();
        let data = json!({"user": {"name": "li", "address": {"city": "苏州"}}});
        let out = each(&tpl, &data).unwrap();
        assert_eq!(out["who"], json!("li"));
        assert_eq!(out["city"], json!("苏州"));
    }

    #[test]
    fn test_fen_round_trip() {
        let fen = to_fen(19.99);
        assert_eq!(fen, 1999);
        assert_eq!(to_yuan(fen), 19.99);
    }
}
