//! `mvnx search`: the best few matches for a query.

use mvnx_core::{ArtifactIndex, ResolveError};
use mvnx_schema::ArtifactCandidate;

use super::{Context, OpError};

/// Number of results `mvnx search` shows.
pub const SEARCH_LIMIT: usize = 5;

/// Resolve `query` and keep the top [`SEARCH_LIMIT`] candidates.
///
/// A query with no matches yields an empty list rather than an error.
pub async fn search<I: ArtifactIndex>(
    ctx: &Context<I>,
    query: &str,
) -> Result<Vec<ArtifactCandidate>, OpError> {
    match ctx.resolver.resolve(query).await {
        Ok(mut candidates) => {
            candidates.truncate(SEARCH_LIMIT);
            Ok(candidates)
        }
        Err(ResolveError::NotFound { .. }) => Ok(Vec::new()),
        Err(e) => Err(e.into()),
    }
}
