use crate::registry::{ArtifactIndex, IndexError};
use mvnx_schema::{ArtifactCandidate, is_stable};
use thiserror::Error;

/// Score given to an exact coordinate match, and to the best fuzzy hit.
pub const MAX_SCORE: f64 = 100.0;

/// Score lost per rank in fuzzy results.
pub const SCORE_STEP: f64 = 10.0;

/// Raw records requested for a fuzzy search. Over-fetching keeps the result
/// list full after pre-releases are filtered out.
pub const FETCH_ROWS: usize = 20;

/// Maximum number of candidates a fuzzy search returns.
pub const MAX_RESULTS: usize = 10;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error(transparent)]
    Index(#[from] IndexError),

    #[error("no artifacts found for query: {query}")]
    NotFound { query: String },

    #[error("no stable version found for {coordinates} (latest: {version})")]
    UnstableVersion { coordinates: String, version: String },

    #[error("no stable versions found for query: {query}")]
    NoStableVersion { query: String },
}

/// Resolves user queries against an [`ArtifactIndex`].
///
/// A query of the form `groupId:artifactId` is looked up exactly; anything
/// else is a free-text search. Only release versions are ever suggested.
#[derive(Debug, Clone)]
pub struct Resolver<I> {
    index: I,
}

impl<I: ArtifactIndex> Resolver<I> {
    pub fn new(index: I) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &I {
        &self.index
    }

    /// Resolve a query into candidates ordered by descending score.
    ///
    /// # Errors
    ///
    /// See [`Resolver::resolve_exact`] for coordinate queries. Free-text
    /// queries fail with [`ResolveError::NotFound`] when the index has no
    /// match and [`ResolveError::NoStableVersion`] when every match is a
    /// pre-release.
    pub async fn resolve(&self, query: &str) -> Result<Vec<ArtifactCandidate>, ResolveError> {
        if let Some((group_id, artifact_id)) = split_coordinates(query) {
            tracing::debug!(group_id, artifact_id, "Exact coordinate lookup");
            let candidate = self.resolve_exact(group_id, artifact_id).await?;
            return Ok(vec![candidate]);
        }

        tracing::debug!(query, "Free-text search");
        self.fuzzy_search(query).await
    }

    /// Look up one artifact by coordinates and return its latest release.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::NotFound`] if the index has no such artifact
    /// and [`ResolveError::UnstableVersion`] if its latest version is a
    /// snapshot or pre-release.
    pub async fn resolve_exact(
        &self,
        group_id: &str,
        artifact_id: &str,
    ) -> Result<ArtifactCandidate, ResolveError> {
        let coordinates = format!("{group_id}:{artifact_id}");

        let doc = self
            .index
            .search_exact(group_id, artifact_id)
            .await?
            .ok_or_else(|| ResolveError::NotFound {
                query: coordinates.clone(),
            })?;

        if !is_stable(&doc.latest_version) {
            return Err(ResolveError::UnstableVersion {
                coordinates,
                version: doc.latest_version,
            });
        }

        Ok(ArtifactCandidate::new(
            doc.group_id,
            doc.artifact_id,
            doc.latest_version,
            MAX_SCORE,
        ))
    }

    async fn fuzzy_search(&self, query: &str) -> Result<Vec<ArtifactCandidate>, ResolveError> {
        let results = self.index.search(query, FETCH_ROWS).await?;

        if results.total == 0 {
            return Err(ResolveError::NotFound {
                query: query.to_string(),
            });
        }

        let raw_count = results.docs.len();
        let candidates: Vec<ArtifactCandidate> = results
            .docs
            .into_iter()
            .filter(|doc| {
                let stable = is_stable(&doc.latest_version);
                if !stable {
                    tracing::trace!(
                        "Dropping {}:{} ({})",
                        doc.group_id,
                        doc.artifact_id,
                        doc.latest_version
                    );
                }
                stable
            })
            .take(MAX_RESULTS)
            .enumerate()
            .map(|(rank, doc)| {
                ArtifactCandidate::new(
                    doc.group_id,
                    doc.artifact_id,
                    doc.latest_version,
                    rank_score(rank),
                )
            })
            .collect();

        tracing::debug!(
            raw = raw_count,
            kept = candidates.len(),
            "Filtered search results"
        );

        if candidates.is_empty() {
            return Err(ResolveError::NoStableVersion {
                query: query.to_string(),
            });
        }

        Ok(candidates)
    }
}

/// Relevance score of the `rank`-th stable hit (0-based).
pub fn rank_score(rank: usize) -> f64 {
    (MAX_SCORE - rank as f64 * SCORE_STEP).max(0.0)
}

/// Split `group:artifact` on the first colon.
///
/// Returns `None` unless both trimmed halves are non-empty, in which case the
/// whole query is meant as a search term.
pub fn split_coordinates(query: &str) -> Option<(&str, &str)> {
    let (group_id, artifact_id) = query.split_once(':')?;
    let (group_id, artifact_id) = (group_id.trim(), artifact_id.trim());
    if group_id.is_empty() || artifact_id.is_empty() {
        return None;
    }
    Some((group_id, artifact_id))
}
