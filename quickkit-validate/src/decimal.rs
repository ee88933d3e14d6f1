//! Decimal-place-count validation

/// Whether a numeric string fits within `fixed` decimal places
///
/// The value must parse as a finite number, carry at most one decimal point
/// not in the leading position, and its fractional part must be at most
/// `fixed` digits long.
pub fn number_to_fixed_valid(val: &str, fixed: usize) -> bool {
    let s = val.trim();
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => {}
        _ => return false,
    }

    let dot = s.find('.');
    if dot == Some(0) || dot != s.rfind('.') {
        return false;
    }
    match dot {
        Some(i) => s.len() - i < fixed + 2,
        None => true,
    }
}

/// Common money check: at most two decimal places
pub fn normal_money_valid(val: &str) -> bool {
    number_to_fixed_valid(val, 2)
}
