//! `pom.xml` handling.
//!
//! [`document`] holds a small XML tree that is loaded whole, edited in place
//! and written back with canonical indentation. [`repository`] layers the
//! dependency-list semantics on top of it.

pub mod document;
pub mod repository;

pub use document::{Element, ManifestDocument, Node};
pub use repository::{PomRepository, Upsert};

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("no pom.xml loaded")]
    NotLoaded,

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("dependency not found: {artifact_id}")]
    NotFound { artifact_id: String },
}
