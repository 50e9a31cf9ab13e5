//! Remove command

use anyhow::Result;

use crate::ops;
use crate::ui::Output;

/// Remove a dependency from the project's pom.xml by artifactId
pub fn remove(artifact_id: &str) -> Result<()> {
    let cwd = super::current_dir()?;
    let output = Output::new();

    let (project, mut repo) = ops::project::open(&cwd)?;
    tracing::debug!("Found pom.xml at {}", project.pom.display());

    ops::remove::remove_dependency(&mut repo, artifact_id)?;
    output.success(&format!("Removed {artifact_id}"));
    Ok(())
}
