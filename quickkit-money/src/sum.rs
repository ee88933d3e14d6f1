//! Decimal-safe summation over loosely typed inputs

use serde_json::Value;

/// Sum numbers and numeric strings, ignoring everything else
///
/// Each addition is scaled by the addend's decimal factor so binary float
/// noise (`0.1 + 0.2`) does not leak into the total. Returns `0.0` when no
/// entry is numeric.
pub fn sum(values: &[Value]) -> f64 {
    let nums: Vec<f64> = values.iter().filter_map(as_number).collect();

    if nums.is_empty() {
        return 0.0;
    }
    if nums.len() == 1 {
        return nums[0];
    }

    nums.into_iter()
        .fold(0.0, |total, num| match decimal_factor(num) {
            Some(factor) => ((total * factor) + (num * factor)).round() / factor,
            None => total + num,
        })
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            s.parse().ok()
        }
        _ => None,
    }
}

/// Scaling factor for the fractional digits of `num`, if it has any
fn decimal_factor(num: f64) -> Option<f64> {
    let rendered = num.to_string();
    if rendered.contains('e') || rendered.contains('E') {
        return None;
    }
    let (_, frac) = rendered.split_once('.')?;
    Some(10f64.powi(frac.len() as i32))
}
