//! Fen/yuan conversion and 万 abbreviation

/// Unit of a raw amount handed to the 万 formatters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MoneyUnit {
    #[default]
    Yuan,
    Fen,
}

/// Convert a yuan amount to integer fen
///
/// Scales by 1000 and rounds before the final division so float noise like
/// `19.99 * 100 == 1998.9999…` cannot lose a fen.
pub fn to_fen(yuan: f64) -> i64 {
    ((yuan * 1000.0).round() / 10.0).floor() as i64
}

/// Convert integer fen to a yuan amount
pub fn to_yuan(fen: i64) -> f64 {
    fen as f64 / 100.0
}

/// Render fen as a yuan string using only integer arithmetic
///
/// Trailing zero cents are dropped. `grouped` adds thousands separators to
/// the integer part.
pub fn to_yuan_string(fen: i64, grouped: bool) -> String {
    let sign = if fen < 0 { "-" } else { "" };
    let abs = fen.unsigned_abs();
    let whole = abs / 100;
    let cents = abs % 100;

    let int_part = if grouped {
        group_thousands(whole)
    } else {
        whole.to_string()
    };

    if cents == 0 {
        format!("{sign}{int_part}")
    } else if cents % 10 == 0 {
        format!("{sign}{int_part}.{}", cents / 10)
    } else {
        format!("{sign}{int_part}.{cents:02}")
    }
}

/// Abbreviate an amount with the 万 suffix once it reaches 10 000 yuan
///
/// `fixed` bounds the decimal places; trailing zeros are trimmed. With
/// `fixed == 0` the 万 value is rounded to a whole number and grouped.
pub fn to_wan(num: f64, fixed: usize, unit: MoneyUnit) -> String {
    let sign = if num < 0.0 { "-" } else { "" };
    let n = match unit {
        MoneyUnit::Fen => (num / 100.0).abs(),
        MoneyUnit::Yuan => num.abs(),
    };

    if n >= 10_000.0 {
        let wan = n / 10_000.0;
        if fixed == 0 {
            return format!("{sign}{}万", group_thousands(wan.round() as u64));
        }
        return format!("{sign}{}万", format_trimmed(wan, fixed));
    }

    format!("{sign}{}", format_trimmed(n, fixed))
}

/// 万 abbreviation that keeps every digit below the 10 000 threshold
pub fn auto_to_wan(num: f64, fixed: usize, unit: MoneyUnit) -> String {
    to_wan(num, fixed, unit)
}

fn format_trimmed(value: f64, places: usize) -> String {
    let s = format!("{value:.places$}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
