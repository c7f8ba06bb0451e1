//! Keypad button surface.

use crate::core::{Digit, Input, Operator};
use std::fmt;

/// Button labels, row by row.
pub const LAYOUT: [[&str; 4]; 5] = [
    ["AC", "±", "%", "÷"],
    ["7", "8", "9", "×"],
    ["4", "5", "6", "−"],
    ["1", "2", "3", "+"],
    ["√", "0", ".", "="],
];

/// One keypad button.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Button {
    AllClear,
    ToggleSign,
    Percent,
    SquareRoot,
    Digit(Digit),
    Operator(Operator),
    Equals,
}

impl Button {
    /// Find the button printed with `label`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "AC" => Some(Self::AllClear),
            "±" => Some(Self::ToggleSign),
            "%" => Some(Self::Percent),
            "√" => Some(Self::SquareRoot),
            "=" => Some(Self::Equals),
            _ => {
                if let Some(op) = Operator::from_label(label) {
                    return Some(Self::Operator(op));
                }
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Digit::new(c).map(Self::Digit),
                    _ => None,
                }
            }
        }
    }

    /// Input sent to the calculator when the button is pressed.
    pub fn input(&self) -> Input {
        match self {
            Self::AllClear => Input::Clear,
            Self::ToggleSign => Input::ToggleSign,
            Self::Percent => Input::Percent,
            Self::SquareRoot => Input::SquareRoot,
            Self::Digit(d) => Input::Digit(*d),
            Self::Operator(op) => Input::Operator(*op),
            Self::Equals => Input::Equals,
        }
    }

    /// All buttons in layout order.
    pub fn grid() -> Vec<Vec<Button>> {
        LAYOUT
            .iter()
            .map(|row| row.iter().filter_map(|label| Self::from_label(label)).collect())
            .collect()
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::AllClear => "AC",
            Self::ToggleSign => "±",
            Self::Percent => "%",
            Self::SquareRoot => "√",
            Self::Equals => "=",
            Self::Operator(op) => op.label(),
            Self::Digit(d) => return fmt::Display::fmt(d, f),
        };
        f.pad(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_layout_label_is_a_button() {
        let grid = Button::grid();
        assert_eq!(grid.len(), 5);
        assert!(grid.iter().all(|row| row.len() == 4));
    }

    #[test]
    fn labels_round_trip() {
        for row in LAYOUT {
            for label in row {
                let button = Button::from_label(label).unwrap();
                assert_eq!(button.to_string(), label);
            }
        }
    }

    #[test]
    fn buttons_send_expected_inputs() {
        assert_eq!(Button::AllClear.input(), Input::Clear);
        assert_eq!(Button::from_label("±").unwrap().input(), Input::ToggleSign);
        assert_eq!(Button::from_label("√").unwrap().input(), Input::SquareRoot);
        assert_eq!(
            Button::from_label("−").unwrap().input(),
            Input::Operator(Operator::Subtract)
        );
        assert_eq!(
            Button::from_label("7").unwrap().input(),
            Input::Digit(Digit::new('7').unwrap())
        );
    }

    #[test]
    fn unknown_labels_are_rejected() {
        assert_eq!(Button::from_label("MC"), None);
        assert_eq!(Button::from_label(""), None);
        assert_eq!(Button::from_label("-"), None);
    }
}
