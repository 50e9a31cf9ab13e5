//! `mvnx remove`: drop a dependency by artifact id.

use mvnx_core::PomRepository;

use super::OpError;

/// Remove the first dependency named `artifact_id` and save the manifest.
pub fn remove_dependency(repo: &mut PomRepository, artifact_id: &str) -> Result<(), OpError> {
    repo.remove_dependency(artifact_id)?;
    repo.save()?;
    Ok(())
}
