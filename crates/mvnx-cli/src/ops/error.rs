//! Domain-specific errors for dependency operations

use mvnx_core::{IndexError, ManifestError, ProjectError, ResolveError};
use mvnx_schema::DependencyError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpError {
    #[error("no Maven project found. Run 'mvnx init' to create one.")]
    NoProject(#[source] ProjectError),

    #[error(transparent)]
    Project(ProjectError),

    #[error("Failed to resolve artifact: {0}")]
    Resolve(#[from] ResolveError),

    #[error("Artifact index unavailable: {0}")]
    Index(#[from] IndexError),

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error("Invalid dependency: {0}")]
    Validation(#[from] DependencyError),
}

impl From<ProjectError> for OpError {
    fn from(err: ProjectError) -> Self {
        match err {
            ProjectError::NotFound { .. } => Self::NoProject(err),
            other => Self::Project(other),
        }
    }
}
