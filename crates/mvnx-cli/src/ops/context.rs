//! Shared command context.
//!
//! Groups the resolver every networked command needs so that tests can swap
//! the Maven Central client for a mock server or an in-memory index.

use mvnx_core::{ArtifactIndex, IndexConfig, MavenCentral, Resolver};

use super::OpError;

/// Groups common state used by `add` and `search`.
#[derive(Debug, Clone)]
pub struct Context<I = MavenCentral> {
    pub resolver: Resolver<I>,
}

impl Context<MavenCentral> {
    /// Context talking to the index at `index_url`.
    pub fn new(index_url: &str) -> Result<Self, OpError> {
        let index = MavenCentral::new(IndexConfig::with_endpoint(index_url))?;
        Ok(Self::with_index(index))
    }
}

impl<I: ArtifactIndex> Context<I> {
    pub fn with_index(index: I) -> Self {
        Self {
            resolver: Resolver::new(index),
        }
    }
}
