//! Terminal output for mvnx commands.
//!
//! - [`theme`] - Colors, icons and column widths
//! - [`output`] - Status lines (`✓ Added ...`)
//! - [`prompt`] - Interactive candidate selection
//! - [`table`] - Search results table
//! - [`list`] - Dependency listing

pub mod list;
pub mod output;
pub mod prompt;
pub mod table;
pub mod theme;

pub use output::Output;
pub use theme::Theme;
