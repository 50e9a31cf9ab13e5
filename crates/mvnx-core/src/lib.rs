//! Core library for mvnx.
//!
//! - [`registry`]: talks to the Maven Central search index.
//! - [`resolver`]: turns a user query into ranked, release-only candidates.
//! - [`pom`]: in-memory `pom.xml` tree and the dependency upsert/remove logic.
//! - [`project`]: locating and scaffolding Maven projects on disk.

pub mod pom;
pub mod project;
pub mod registry;
pub mod resolver;

pub use pom::{ManifestDocument, ManifestError, PomRepository, Upsert};
pub use project::{Project, ProjectError, find_pom, init_project};
pub use registry::{ArtifactIndex, IndexConfig, IndexError, MavenCentral};
pub use resolver::{ResolveError, Resolver};

/// User Agent string for core operations
pub const USER_AGENT: &str = concat!("mvnx-core/", env!("CARGO_PKG_VERSION"));
