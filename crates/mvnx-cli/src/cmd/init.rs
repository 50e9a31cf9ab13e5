//! Init command

use anyhow::{Context, Result};
use crossterm::style::Stylize;
use mvnx_core::project::SOURCE_DIRS;

use crate::ui::Output;

/// Scaffold a Maven project in the current directory
pub fn init() -> Result<()> {
    let cwd = super::current_dir()?;
    let output = Output::new();

    let project = mvnx_core::init_project(&cwd).context("Failed to initialize project")?;

    output.success(&format!("Created {}", project.pom.display()));
    for dir in SOURCE_DIRS {
        println!("  {}", dir.dark_grey());
    }
    println!();
    println!("  Run 'mvnx add <query>' to add your first dependency.");
    Ok(())
}
