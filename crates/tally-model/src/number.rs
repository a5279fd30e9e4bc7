//! Text rendering for numeric values and absent fields.

use std::fmt;

/// Placeholder rendered in place of a missing field.
pub const ABSENT_VALUE: &str = "undefined";

/// Display adapter that renders an `f64` in report notation.
///
/// - integral values have no fractional part (`100`, not `100.0`)
/// - NaN renders as `NaN`, infinities as `Infinity` / `-Infinity`
/// - negative zero renders as `0`
/// - magnitudes at or above `1e21` or below `1e-6` use exponent form with
///   an explicit sign (`1e+21`, `1.5e-7`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number(pub f64);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            return f.write_str("NaN");
        }
        if value.is_infinite() {
            return f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
        }
        if value == 0.0 {
            return f.write_str("0");
        }
        let magnitude = value.abs();
        if (1e-6..1e21).contains(&magnitude) {
            return write!(f, "{value}");
        }
        let exponent = format!("{value:e}");
        match exponent.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => write!(f, "{mantissa}e+{exp}"),
            _ => f.write_str(&exponent),
        }
    }
}

/// Render a number in report notation.
pub fn format_number(value: f64) -> String {
    Number(value).to_string()
}
