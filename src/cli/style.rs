//! Terminal styling helpers
//!
//! Thin wrappers over owo-colors that degrade to plain text when stdout is
//! not a color-capable terminal.

use owo_colors::{OwoColorize, Stream};

/// Check mark glyph used in summaries.
pub const CHECK: &str = "✓";

/// Styling shorthand for display values.
pub trait Stylize: std::fmt::Display {
    /// De-emphasized text (hints, soft failures).
    fn muted(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.dimmed())
            .to_string()
    }

    /// Highlighted value (names, counts).
    fn accent(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.cyan())
            .to_string()
    }

    /// Section or action emphasis.
    fn emphasis(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.bold())
            .to_string()
    }

    /// Successful result.
    fn success(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.green())
            .to_string()
    }

    /// Warning.
    fn warn(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.yellow())
            .to_string()
    }
}

impl<T: std::fmt::Display> Stylize for T {}

/// Green check mark for completed steps.
pub fn check() -> String {
    CHECK.success()
}
