//! Inputs and the pure transition function.
//!
//! [`step`] maps a state and an input to the next state plus, for inputs
//! that complete a computation, the history entry to record. Guards reject
//! inputs that would break an invariant.

use super::arithmetic::{compute, format_number, NAN_TOKEN};
use super::guard::Guard;
use super::history::HistoryEntry;
use super::state::{CalculatorState, Operator, Pending};
use std::fmt;

/// A digit key: `0` to `9` or the decimal point.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Digit(char);

impl Digit {
    pub const POINT: Digit = Digit('.');

    /// Returns `None` for anything other than an ASCII digit or `.`.
    pub fn new(c: char) -> Option<Self> {
        (c.is_ascii_digit() || c == '.').then_some(Self(c))
    }

    pub fn as_char(&self) -> char {
        self.0
    }

    pub fn is_point(&self) -> bool {
        self.0 == '.'
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Everything a user can ask the calculator to do.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Input {
    Digit(Digit),
    Backspace,
    Clear,
    ToggleSign,
    Percent,
    SquareRoot,
    Operator(Operator),
    Equals,
}

impl Input {
    /// Name used in log events.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Digit(_) => "digit",
            Self::Backspace => "backspace",
            Self::Clear => "clear",
            Self::ToggleSign => "toggle_sign",
            Self::Percent => "percent",
            Self::SquareRoot => "square_root",
            Self::Operator(_) => "operator",
            Self::Equals => "equals",
        }
    }

    /// Precondition for this input, if it has one.
    pub fn guard(&self) -> Option<Guard<CalculatorState>> {
        match self {
            Self::Digit(d) if d.is_point() => Some(Guard::new(
                "display already has a decimal point",
                |s: &CalculatorState| s.overwrite || !s.has_decimal_point(),
            )),
            Self::Equals => Some(Guard::new("no pending operation", |s: &CalculatorState| {
                s.has_pending()
            })),
            _ => None,
        }
    }
}

/// Errors that can occur during transitions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("Guard blocked {input}: {reason}")]
    GuardBlocked {
        input: &'static str,
        reason: &'static str,
    },
}

/// Outcome of a successful step.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub next: CalculatorState,
    /// Entry to append to the history, for inputs that complete a computation.
    pub record: Option<HistoryEntry>,
}

impl Transition {
    fn to(next: CalculatorState) -> Self {
        Self { next, record: None }
    }

    fn recording(next: CalculatorState, entry: HistoryEntry) -> Self {
        Self {
            next,
            record: Some(entry),
        }
    }
}

/// Compute the transition for `input` from `state`.
///
/// This is a pure function: `state` is not modified.
///
/// # Example
///
/// ```rust
/// use calcpad::core::{step, CalculatorState, Digit, Input, Operator};
///
/// let state = CalculatorState::new();
/// let state = step(&state, Input::Digit(Digit::new('1').unwrap())).unwrap().next;
/// let state = step(&state, Input::Operator(Operator::Add)).unwrap().next;
/// let state = step(&state, Input::Digit(Digit::new('2').unwrap())).unwrap().next;
/// let done = step(&state, Input::Equals).unwrap();
///
/// assert_eq!(done.next.display(), "3");
/// assert_eq!(done.record.unwrap().as_str(), "1 + 2 = 3");
/// ```
pub fn step(state: &CalculatorState, input: Input) -> Result<Transition, TransitionError> {
    if let Some(guard) = input.guard() {
        if !guard.check(state) {
            return Err(TransitionError::GuardBlocked {
                input: input.name(),
                reason: guard.reason(),
            });
        }
    }

    let transition = match input {
        Input::Digit(d) => Transition::to(digit(state, d)),
        Input::Backspace => Transition::to(backspace(state)),
        Input::Clear => Transition::to(CalculatorState::new()),
        Input::ToggleSign => Transition::to(toggle_sign(state)),
        Input::Percent => Transition::to(percent(state)),
        Input::SquareRoot => Transition::to(square_root(state)),
        Input::Operator(op) => operator(state, op),
        Input::Equals => equals(state),
    };
    Ok(transition)
}

fn digit(state: &CalculatorState, d: Digit) -> CalculatorState {
    let mut next = state.clone();
    if state.overwrite {
        next.display = if d.is_point() {
            "0.".to_string()
        } else {
            d.to_string()
        };
        next.overwrite = false;
    } else if state.display == "0" && !d.is_point() {
        next.display = d.to_string();
    } else {
        next.display.push(d.as_char());
    }
    next
}

fn backspace(state: &CalculatorState) -> CalculatorState {
    let mut next = state.clone();
    if state.overwrite {
        next.display = "0".to_string();
        return next;
    }
    next.display.pop();
    if next.display.is_empty() {
        next.display = "0".to_string();
        next.overwrite = true;
    }
    next
}

fn toggle_sign(state: &CalculatorState) -> CalculatorState {
    let mut next = state.clone();
    next.display = match state.display.strip_prefix('-') {
        Some(unsigned) => unsigned.to_string(),
        None => format!("-{}", state.display),
    };
    next
}

fn percent(state: &CalculatorState) -> CalculatorState {
    let mut next = state.clone();
    next.display = format_number(state.value() / 100.0);
    next.overwrite = true;
    next
}

fn square_root(state: &CalculatorState) -> CalculatorState {
    let mut next = state.clone();
    let value = state.value();
    next.display = if value < 0.0 {
        NAN_TOKEN.to_string()
    } else {
        format_number(value.sqrt())
    };
    next.overwrite = true;
    next
}

fn operator(state: &CalculatorState, op: Operator) -> Transition {
    let current = state.value();
    let mut next = state.clone();
    next.overwrite = true;

    match state.pending {
        None => {
            next.pending = Some(Pending {
                accumulator: current,
                operator: op,
            });
            Transition::to(next)
        }
        Some(pending) => {
            let result = compute(pending.accumulator, current, Some(pending.operator));
            next.display = format_number(result);
            next.pending = Some(Pending {
                accumulator: result,
                operator: op,
            });
            Transition::recording(next, HistoryEntry::chained(result, pending.operator))
        }
    }
}

fn equals(state: &CalculatorState) -> Transition {
    let Some(pending) = state.pending else {
        return Transition::to(state.clone());
    };

    let result = compute(pending.accumulator, state.value(), Some(pending.operator));
    let entry = HistoryEntry::equals(
        pending.accumulator,
        pending.operator,
        state.display(),
        result,
    );

    let next = CalculatorState {
        display: format_number(result),
        pending: None,
        overwrite: true,
    };
    Transition::recording(next, entry)
}
