//! Pure arithmetic and number text conversion.

use super::state::Operator;

/// Display token for a result that is not a number.
pub const NAN_TOKEN: &str = "NaN";

/// Apply `op` to `a` and `b`.
///
/// Division by zero yields NaN instead of an error. With no operator the
/// right operand is returned unchanged.
///
/// # Example
///
/// ```rust
/// use calcpad::core::{compute, Operator};
///
/// assert_eq!(compute(6.0, 3.0, Some(Operator::Divide)), 2.0);
/// assert!(compute(6.0, 0.0, Some(Operator::Divide)).is_nan());
/// assert_eq!(compute(6.0, 3.0, None), 3.0);
/// ```
pub fn compute(a: f64, b: f64, op: Option<Operator>) -> f64 {
    match op {
        Some(Operator::Add) => a + b,
        Some(Operator::Subtract) => a - b,
        Some(Operator::Multiply) => a * b,
        Some(Operator::Divide) => {
            if b == 0.0 {
                f64::NAN
            } else {
                a / b
            }
        }
        None => b,
    }
}

/// Shortest round-trip decimal text for `value`.
///
/// Whole numbers print without a fraction and negative zero prints as `"0"`.
/// Decimal exponents of 21 and above, or -7 and below, switch to exponential
/// form with an explicit exponent sign (`"1e+21"`, `"1.5e-7"`).
///
/// # Example
///
/// ```rust
/// use calcpad::core::format_number;
///
/// assert_eq!(format_number(3.0), "3");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(f64::NAN), "NaN");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return NAN_TOKEN.to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let scientific = format!("{value:e}");
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if (-7 < exponent) && (exponent < 21) {
        format!("{value}")
    } else if exponent < 0 {
        format!("{mantissa}e{exponent}")
    } else {
        format!("{mantissa}e+{exponent}")
    }
}

/// Numeric value of display text.
///
/// Empty text is zero. Anything that does not read as a number, such as a
/// lone minus sign, is NaN.
pub fn parse_display(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }
    match text {
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ if text.chars().all(is_numeric_char) => text.parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
}
