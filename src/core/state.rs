//! Calculator state and the operators it can hold pending.
//!
//! The state is a plain value. Transitions in [`super::transition`] take a
//! reference and return the next state, so nothing here performs I/O.

use super::arithmetic::parse_display;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary operator waiting for its second operand.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Every operator, in keypad column order (top to bottom).
    pub const ALL: [Operator; 4] = [
        Operator::Divide,
        Operator::Multiply,
        Operator::Subtract,
        Operator::Add,
    ];

    /// Keyboard symbol, also used when writing history entries.
    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Label printed on the keypad button.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Look up an operator by its keyboard symbol.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Look up an operator by its keypad label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.label() == label)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Left operand and operator of an unfinished binary operation.
///
/// Keeping both in one value means the accumulator can never exist without
/// an operator, or the other way around.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Pending {
    pub accumulator: f64,
    pub operator: Operator,
}

/// Complete state of one calculator session.
///
/// # Example
///
/// ```rust
/// use calcpad::core::CalculatorState;
///
/// let state = CalculatorState::new();
/// assert_eq!(state.display(), "0");
/// assert!(state.is_overwrite());
/// assert!(state.pending().is_none());
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct CalculatorState {
    pub(crate) display: String,
    pub(crate) pending: Option<Pending>,
    pub(crate) overwrite: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Fresh session state: display `"0"`, nothing pending, overwrite on.
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            pending: None,
            overwrite: true,
        }
    }

    /// Display text as it should be rendered.
    ///
    /// An empty display renders as `"0"`.
    pub fn display(&self) -> &str {
        if self.display.is_empty() {
            "0"
        } else {
            &self.display
        }
    }

    /// Numeric value of the display text.
    pub fn value(&self) -> f64 {
        parse_display(&self.display)
    }

    pub fn pending(&self) -> Option<&Pending> {
        self.pending.as_ref()
    }

    pub fn accumulator(&self) -> Option<f64> {
        self.pending.map(|p| p.accumulator)
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending.map(|p| p.operator)
    }

    /// Whether the next digit replaces the display instead of extending it.
    pub fn is_overwrite(&self) -> bool {
        self.overwrite
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn has_decimal_point(&self) -> bool {
        self.display.contains('.')
    }
}
