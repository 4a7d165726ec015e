//! Colouring for script output

use owo_colors::{OwoColorize, colors::css};
use singly::Outcome;

/// Detects whether colored output should be enabled
pub fn supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// How a line of output should be highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Values and lengths
    Plain,
    /// The empty marker, and echoed operations
    Muted,
    /// Lookups skipped with `--keep-going` (amber)
    Skipped,
    /// A passing check (green)
    Pass,
}

impl<V> From<&Outcome<V>> for Tone {
    fn from(outcome: &Outcome<V>) -> Self {
        match outcome {
            Outcome::Absent => Self::Muted,
            Outcome::OutOfBounds { .. } => Self::Skipped,
            _ => Self::Plain,
        }
    }
}

/// Applies `tone` to `text` if the terminal supports colour.
pub fn paint(text: &str, tone: Tone) -> String {
    style(text, tone, supports_color())
}

/// Applies `tone` to `text` when `colour` is set.
pub fn style(text: &str, tone: Tone, colour: bool) -> String {
    if !colour {
        return text.to_string();
    }
    match tone {
        Tone::Plain => text.to_string(),
        Tone::Muted => text.dimmed().to_string(),
        Tone::Skipped => text.fg::<css::Orange>().to_string(),
        Tone::Pass => text.fg::<css::Green>().to_string(),
    }
}
