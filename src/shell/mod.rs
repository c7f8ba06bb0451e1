//! Interactive text shell around a calculator session.
//!
//! The shell reads lines of input, turns each token into calculator inputs
//! or shell commands, and re-renders the calculator after every line.
//!
//! A token is tried, in order, as:
//! - a shell command (`:quit`, `:clear-history`, `:help`)
//! - a keypad label (`AC`, `±`, `%`, `√`, `=`, `÷`, `×`, `−`, `+`, digits)
//! - a named key (`Backspace`, `Enter`)
//! - a run of single keys, pressed one after another (`12+3`)
//!
//! A word with any character that is not a key is skipped whole.

mod keymap;
mod keypad;
mod render;

pub use keymap::{input_for_char, input_for_key};
pub use keypad::{Button, LAYOUT};
pub use render::{render, render_display, render_history, render_keypad, RenderOptions};

use crate::core::Input;
use crate::effects::Calculator;
use crate::store::KeyValueStore;
use std::io::{self, BufRead, Write};
use tracing::debug;

pub const HELP: &str = "\
Type keys or keypad labels separated by spaces, then press return.
  digits . + - * / = %      keyboard and keypad keys (runs like 12+3= work)
  AC  ±  √  ÷  ×  −          keypad buttons
  Backspace  Enter  c         named keys (Enter is equals, c clears)
  :clear-history             delete the stored history
  :help                      show this text
  :quit                      leave the calculator
";

/// Shell-level commands that do not go through the calculator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    ClearHistory,
    Help,
}

impl Command {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            ":q" | ":quit" | ":exit" => Some(Self::Quit),
            ":clear-history" => Some(Self::ClearHistory),
            ":h" | ":help" => Some(Self::Help),
            _ => None,
        }
    }
}

/// One recognised piece of a line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    Input(Input),
    Command(Command),
    Unknown(String),
}

/// Split a line into tokens.
///
/// # Example
///
/// ```rust
/// use calcpad::core::{Input, Operator};
/// use calcpad::shell::{tokenize, Token};
///
/// let tokens = tokenize("2 × 3 Enter");
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[1], Token::Input(Input::Operator(Operator::Multiply)));
/// assert_eq!(tokens[3], Token::Input(Input::Equals));
/// ```
pub fn tokenize(line: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    for word in line.split_whitespace() {
        if word.starts_with(':') {
            tokens.push(match Command::parse(word) {
                Some(command) => Token::Command(command),
                None => Token::Unknown(word.to_string()),
            });
        } else if let Some(button) = Button::from_label(word) {
            tokens.push(Token::Input(button.input()));
        } else if let Some(input) = input_for_key(word) {
            tokens.push(Token::Input(input));
        } else {
            match word.chars().map(input_for_any_char).collect::<Option<Vec<_>>>() {
                Some(inputs) => tokens.extend(inputs.into_iter().map(Token::Input)),
                None => tokens.push(Token::Unknown(word.to_string())),
            }
        }
    }
    tokens
}

fn input_for_any_char(c: char) -> Option<Input> {
    let mut buf = [0u8; 4];
    let label: &str = c.encode_utf8(&mut buf);
    input_for_char(c).or_else(|| Button::from_label(label).map(|b| b.input()))
}

/// Line-driven front end for a calculator session.
pub struct Shell<B: KeyValueStore> {
    calculator: Calculator<B>,
    options: RenderOptions,
}

impl<B: KeyValueStore> Shell<B> {
    pub fn new(calculator: Calculator<B>, options: RenderOptions) -> Self {
        Self {
            calculator,
            options,
        }
    }

    pub fn calculator(&self) -> &Calculator<B> {
        &self.calculator
    }

    pub fn into_calculator(self) -> Calculator<B> {
        self.calculator
    }

    /// Apply one line of input. Returns the command that ended the
    /// line early, if any.
    ///
    /// Tokens after `:quit` are not applied.
    pub fn handle_line(&mut self, line: &str) -> Option<Command> {
        let mut last_command = None;
        for token in tokenize(line) {
            match token {
                Token::Input(input) => {
                    self.calculator.press(input);
                }
                Token::Command(Command::Quit) => return Some(Command::Quit),
                Token::Command(Command::ClearHistory) => {
                    self.calculator.clear_history();
                    last_command = Some(Command::ClearHistory);
                }
                Token::Command(Command::Help) => last_command = Some(Command::Help),
                Token::Unknown(text) => debug!(token = %text, "ignoring unknown key"),
            }
        }
        last_command
    }

    /// Run until end of input or `:quit`, rendering after every line.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        write!(output, "{}", render(&self.calculator, &self.options))?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            match self.handle_line(&line) {
                Some(Command::Quit) => break,
                Some(Command::Help) => write!(output, "{HELP}")?,
                _ => {}
            }
            write!(output, "{}", render(&self.calculator, &self.options))?;
            output.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ephemeral_calculator;
    use crate::core::{Digit, Operator};
    use crate::store::MemoryStore;

    fn shell() -> Shell<MemoryStore> {
        Shell::new(
            ephemeral_calculator(),
            RenderOptions {
                show_keypad: false,
                show_history: true,
            },
        )
    }

    #[test]
    fn tokenize_splits_runs_of_keys() {
        let tokens = tokenize("12+3=");
        assert_eq!(
            tokens,
            vec![
                Token::Input(Input::Digit(Digit::new('1').unwrap())),
                Token::Input(Input::Digit(Digit::new('2').unwrap())),
                Token::Input(Input::Operator(Operator::Add)),
                Token::Input(Input::Digit(Digit::new('3').unwrap())),
                Token::Input(Input::Equals),
            ]
        );
    }

    #[test]
    fn tokenize_recognises_labels_and_named_keys() {
        assert_eq!(
            tokenize("AC ± √ Backspace"),
            vec![
                Token::Input(Input::Clear),
                Token::Input(Input::ToggleSign),
                Token::Input(Input::SquareRoot),
                Token::Input(Input::Backspace),
            ]
        );
    }

    #[test]
    fn tokenize_marks_unknowns() {
        assert_eq!(
            tokenize("x :bogus"),
            vec![
                Token::Unknown("x".to_string()),
                Token::Unknown(":bogus".to_string()),
            ]
        );
    }

    #[test]
    fn tokenize_rejects_words_with_unknown_characters() {
        assert_eq!(tokenize("ac"), vec![Token::Unknown("ac".to_string())]);
        assert_eq!(tokenize("1x2"), vec![Token::Unknown("1x2".to_string())]);
    }

    #[test]
    fn lowercase_ac_does_not_clear() {
        let mut shell = shell();
        shell.handle_line("5 ac");
        assert_eq!(shell.calculator().display(), "5");
    }

    #[test]
    fn tokenize_keypad_symbols_inside_runs() {
        assert_eq!(
            tokenize("9√"),
            vec![
                Token::Input(Input::Digit(Digit::new('9').unwrap())),
                Token::Input(Input::SquareRoot),
            ]
        );
    }

    #[test]
    fn handle_line_drives_calculator() {
        let mut shell = shell();
        assert_eq!(shell.handle_line("7 × 6 Enter"), None);
        assert_eq!(shell.calculator().display(), "42");
        assert_eq!(shell.calculator().history().to_strings(), vec!["7 * 6 = 42"]);
    }

    #[test]
    fn quit_stops_processing_the_line() {
        let mut shell = shell();
        assert_eq!(shell.handle_line("5 :quit 6"), Some(Command::Quit));
        assert_eq!(shell.calculator().display(), "5");
    }

    #[test]
    fn clear_history_command() {
        let mut shell = shell();
        shell.handle_line("1+1=");
        assert_eq!(shell.handle_line(":clear-history"), Some(Command::ClearHistory));
        assert!(shell.calculator().history().is_empty());
    }

    #[test]
    fn run_renders_after_each_line() {
        let mut shell = shell();
        let input = "1+2\n=\n:quit\n4\n";
        let mut output = Vec::new();

        shell.run(input.as_bytes(), &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("History").count(), 3);
        assert!(text.contains("  1 + 2 = 3"));
        assert_eq!(shell.calculator().display(), "3");
    }

    #[test]
    fn run_prints_help() {
        let mut shell = shell();
        let mut output = Vec::new();
        shell.run(":help\n".as_bytes(), &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains(":clear-history"));
    }
}
