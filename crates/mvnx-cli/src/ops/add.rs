//! `mvnx add`: resolve a query and upsert the chosen artifact.

use mvnx_core::{ArtifactIndex, PomRepository, Upsert};
use mvnx_schema::{ArtifactCandidate, Dependency, Scope};

use super::{Context, OpError};

/// What an add did to the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Added {
    pub dependency: Dependency,
    pub outcome: Upsert,
}

/// Resolve `query` into candidates, best first.
///
/// Never empty: a query without matches is a [`ResolveError::NotFound`].
///
/// [`ResolveError::NotFound`]: mvnx_core::ResolveError::NotFound
pub async fn find_candidates<I: ArtifactIndex>(
    ctx: &Context<I>,
    query: &str,
) -> Result<Vec<ArtifactCandidate>, OpError> {
    Ok(ctx.resolver.resolve(query).await?)
}

/// Upsert `candidate` at its latest version and save the manifest.
///
/// The file is left untouched when the entry already matches.
pub fn add_candidate(
    repo: &mut PomRepository,
    candidate: &ArtifactCandidate,
    scope: Scope,
) -> Result<Added, OpError> {
    let dependency = candidate.to_dependency(scope)?;
    let outcome = repo.add_dependency(&dependency)?;
    if outcome != Upsert::Unchanged {
        repo.save()?;
    }
    tracing::debug!("{outcome:?} {dependency}");
    Ok(Added {
        dependency,
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use mvnx_core::ResolveError;
    use std::path::PathBuf;

    const POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project>
  <modelVersion>4.0.0</modelVersion>
  <dependencies>
    <dependency>
      <groupId>junit</groupId>
      <artifactId>junit</artifactId>
      <version>4.12</version>
      <scope>test</scope>
    </dependency>
  </dependencies>
</project>
"#;

    fn loaded_repo() -> (tempfile::TempDir, PathBuf, PomRepository) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pom.xml");
        std::fs::write(&path, POM).unwrap();
        let mut repo = PomRepository::new();
        repo.load(&path).unwrap();
        (dir, path, repo)
    }

    fn context_for(server: &Server) -> Context {
        Context::new(&format!("{}/solrsearch/select", server.url())).unwrap()
    }

    #[tokio::test]
    async fn exact_query_yields_single_candidate() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/solrsearch/select")
            .match_query(Matcher::UrlEncoded(
                "q".into(),
                r#"g:"junit" AND a:"junit""#.into(),
            ))
            .with_status(200)
            .with_body(
                r#"{"response":{"numFound":1,"docs":[{"g":"junit","a":"junit","latestVersion":"4.13.2"}]}}"#,
            )
            .create_async()
            .await;

        let candidates = find_candidates(&context_for(&server), "junit:junit")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].to_string(), "junit:junit:4.13.2");
    }

    #[tokio::test]
    async fn unknown_artifact_is_a_resolve_error() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/solrsearch/select")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"response":{"numFound":0,"docs":[]}}"#)
            .create_async()
            .await;

        let err = find_candidates(&context_for(&server), "nothing-like-this")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            OpError::Resolve(ResolveError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn prerelease_only_hits_are_an_error_not_an_empty_list() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/solrsearch/select")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(
                r#"{"response":{"numFound":1,"docs":[{"g":"com.example","a":"lib","latestVersion":"2.0.0-beta1"}]}}"#,
            )
            .create_async()
            .await;

        let err = find_candidates(&context_for(&server), "lib")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            OpError::Resolve(ResolveError::NoStableVersion { .. })
        ));
    }

    #[test]
    fn adding_new_candidate_inserts_and_saves() {
        let (_dir, path, mut repo) = loaded_repo();
        let candidate = ArtifactCandidate::new("org.projectlombok", "lombok", "1.18.30", 100.0);

        let added = add_candidate(&mut repo, &candidate, Scope::Provided).unwrap();

        assert_eq!(added.outcome, Upsert::Inserted);
        assert_eq!(added.dependency.to_string(), "org.projectlombok:lombok:1.18.30 (scope: provided)");
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("<artifactId>lombok</artifactId>"));
        assert!(written.contains("<scope>provided</scope>"));
    }

    #[test]
    fn adding_existing_candidate_updates_version() {
        let (_dir, path, mut repo) = loaded_repo();
        let candidate = ArtifactCandidate::new("junit", "junit", "4.13.2", 100.0);

        let added = add_candidate(&mut repo, &candidate, Scope::Test).unwrap();

        assert_eq!(added.outcome, Upsert::Updated);
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("<version>4.13.2</version>"));
        assert!(!written.contains("<version>4.12</version>"));
    }

    #[test]
    fn unchanged_entry_leaves_file_alone() {
        let (_dir, path, mut repo) = loaded_repo();
        let candidate = ArtifactCandidate::new("junit", "junit", "4.12", 100.0);

        let added = add_candidate(&mut repo, &candidate, Scope::Test).unwrap();

        assert_eq!(added.outcome, Upsert::Unchanged);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), POM);
    }
}
