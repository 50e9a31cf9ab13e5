//! Subcommand entry points.

pub mod add;
pub mod init;
pub mod list;
pub mod remove;
pub mod search;

use anyhow::{Context, Result};
use std::path::PathBuf;

fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().context("Failed to get current directory")
}
