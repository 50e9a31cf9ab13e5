//! Shared types for mvnx.
//!
//! Everything that both the resolver and the manifest editor need to agree
//! on lives here: dependency coordinates, scopes, ranked search candidates
//! and the version stability rules.

pub mod types;
pub mod version;

// Re-exports
pub use types::*;
pub use version::is_stable;
