//! Status line output shared by all commands.

use super::theme::Theme;
use crossterm::style::Stylize;

/// Prints one-line status messages prefixed with a themed icon.
#[derive(Debug, Clone, Default)]
pub struct Output {
    theme: Theme,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Prints an informational message to the console.
    pub fn info(&self, msg: &str) {
        println!("{} {msg}", self.theme.icons.info.with(self.theme.colors.info));
    }

    /// Prints a success message to the console.
    pub fn success(&self, msg: &str) {
        println!(
            "{} {msg}",
            self.theme.icons.success.with(self.theme.colors.success)
        );
    }
}
