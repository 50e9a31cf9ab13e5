//! List command

use anyhow::{Context, Result};

use crate::ops;
use crate::ui::list::{print_list_footer, print_list_header, print_list_row};
use crate::ui::{Output, Theme};

/// List the dependencies declared in the project's pom.xml
pub fn list(json: bool) -> Result<()> {
    let cwd = super::current_dir()?;
    let (project, repo) = ops::project::open(&cwd)?;
    let deps = repo.dependencies()?;

    if json {
        let out = serde_json::to_string_pretty(&deps).context("Failed to encode dependencies")?;
        println!("{out}");
        return Ok(());
    }

    if deps.is_empty() {
        Output::new().info("No dependencies declared.");
        println!("  Run 'mvnx add <query>' to add one.");
        return Ok(());
    }

    let theme = Theme::default();
    print_list_header(&project.pom);
    for dep in &deps {
        print_list_row(&theme, dep);
    }
    print_list_footer(deps.len());
    Ok(())
}
