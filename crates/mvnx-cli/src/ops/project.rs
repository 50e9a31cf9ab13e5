//! Opening the project the current command operates on.

use mvnx_core::{PomRepository, Project, find_pom};
use std::path::Path;

use super::OpError;

/// Locate the project enclosing `start` and load its `pom.xml`.
pub fn open(start: &Path) -> Result<(Project, PomRepository), OpError> {
    let project = find_pom(start)?;
    let mut repo = PomRepository::new();
    repo.load(&project.pom)?;
    Ok((project, repo))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_project_suggests_init() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nested");
        std::fs::create_dir(&missing).unwrap();

        match open(&missing) {
            Err(OpError::NoProject(_)) => {
                let msg = open(&missing).unwrap_err().to_string();
                assert!(msg.contains("mvnx init"));
            }
            // A pom.xml above the temp dir is picked up instead.
            Ok((project, _)) => assert!(!project.root.starts_with(dir.path())),
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn opens_initialized_project() {
        let dir = tempfile::tempdir().unwrap();
        mvnx_core::init_project(dir.path()).unwrap();

        let (project, repo) = open(&dir.path().join("src/main/java")).unwrap();
        assert_eq!(project.root, dir.path().canonicalize().unwrap());
        assert!(repo.is_loaded());
    }

    #[test]
    fn malformed_pom_is_a_manifest_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("pom.xml"), "<project>").unwrap();

        assert!(matches!(
            open(dir.path()),
            Err(OpError::Manifest(mvnx_core::ManifestError::Parse { .. }))
        ));
    }
}
