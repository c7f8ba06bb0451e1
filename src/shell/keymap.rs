//! Keyboard mapping.
//!
//! Keys are named the way keyboard events name them: single characters for
//! printable keys, `Backspace` and `Enter` for the rest.

use crate::core::{Digit, Input, Operator};

/// Input for a named key, or `None` if the key does nothing.
///
/// # Example
///
/// ```rust
/// use calcpad::core::{Input, Operator};
/// use calcpad::shell::input_for_key;
///
/// assert_eq!(input_for_key("Enter"), Some(Input::Equals));
/// assert_eq!(input_for_key("*"), Some(Input::Operator(Operator::Multiply)));
/// assert_eq!(input_for_key("Shift"), None);
/// ```
pub fn input_for_key(key: &str) -> Option<Input> {
    match key {
        "Backspace" => Some(Input::Backspace),
        "Enter" => Some(Input::Equals),
        _ => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => input_for_char(c),
                _ => None,
            }
        }
    }
}

/// Input for a single printable key.
pub fn input_for_char(c: char) -> Option<Input> {
    if let Some(digit) = Digit::new(c) {
        return Some(Input::Digit(digit));
    }
    if let Some(op) = Operator::from_symbol(c) {
        return Some(Input::Operator(op));
    }
    match c {
        'c' | 'C' => Some(Input::Clear),
        _ => None,
    }
}
