//! Plain-text rendering of a calculator session.

use super::keypad::Button;
use crate::core::History;
use crate::effects::Calculator;
use crate::store::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Inner width of the display box; matches one keypad row.
const DISPLAY_WIDTH: usize = 27;

/// Which parts of the screen to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub show_keypad: bool,
    pub show_history: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_keypad: true,
            show_history: true,
        }
    }
}

/// Render the display, optionally followed by the keypad and the history.
pub fn render<B: KeyValueStore>(calculator: &Calculator<B>, options: &RenderOptions) -> String {
    let mut out = render_display(calculator.display());
    if options.show_keypad {
        out.push_str(&render_keypad());
    }
    if options.show_history {
        out.push_str(&render_history(calculator.history()));
    }
    out
}

/// Boxed, right-aligned display text. Empty text shows as `0`.
pub fn render_display(text: &str) -> String {
    let text = if text.is_empty() { "0" } else { text };
    let width = DISPLAY_WIDTH.max(text.chars().count());
    let border = "─".repeat(width + 2);

    let mut out = String::new();
    let _ = writeln!(out, "┌{border}┐");
    let _ = writeln!(out, "│ {text:>width$} │");
    let _ = writeln!(out, "└{border}┘");
    out
}

pub fn render_keypad() -> String {
    let mut out = String::new();
    for row in Button::grid() {
        let cells: Vec<String> = row.iter().map(|button| format!("[{button:^5}]")).collect();
        let _ = writeln!(out, "{}", cells.join(" "));
    }
    out
}

/// History entries, newest first.
pub fn render_history(history: &History) -> String {
    let mut out = String::from("History\n");
    if history.is_empty() {
        out.push_str("  (empty)\n");
    }
    for entry in history.entries() {
        let _ = writeln!(out, "  {entry}");
    }
    out
}
