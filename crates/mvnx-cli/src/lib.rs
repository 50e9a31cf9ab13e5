//! mvnx - Modern dependency experience for Maven
#![allow(missing_docs)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
//!
//! Adds, removes, searches and lists dependencies of a Maven project without
//! hand-editing `pom.xml`.
//!
//! # Layout
//!
//! - [`cmd`]: one function per subcommand, printing to the terminal.
//! - [`ops`]: the work behind each command, free of terminal I/O.
//! - [`ui`]: theme, interactive prompt and table rendering.

pub mod cmd;
pub mod ops;
pub mod ui;

use clap::{CommandFactory, Parser, Subcommand};
use mvnx_core::registry::MAVEN_CENTRAL_SEARCH_URL;
use mvnx_schema::Scope;

/// User Agent string (re-exported from mvnx_core)
pub use mvnx_core::USER_AGENT;

/// Version metadata stamped in by `build.rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    pub commit: &'static str,
    pub date: &'static str,
}

impl BuildInfo {
    /// Metadata of the running binary.
    pub fn current() -> Self {
        Self {
            version: env!("MVNX_VERSION"),
            commit: env!("MVNX_COMMIT"),
            date: env!("MVNX_BUILD_DATE"),
        }
    }

    /// Text printed by `--version`.
    pub fn long_version(&self) -> String {
        format!(
            "{}\ncommit: {}\nbuilt: {}",
            self.version, self.commit, self.date
        )
    }
}

/// Build the clap command with version metadata attached.
pub fn command(build: &BuildInfo) -> clap::Command {
    Cli::command()
        .version(build.version.to_string())
        .long_version(build.long_version())
}

#[derive(Debug, Parser)]
#[command(name = "mvnx")]
#[command(
    about = "Modern dependency experience for Maven",
    long_about = "mvnx adds, removes and searches dependencies of a Maven project \
                  without hand-editing pom.xml."
)]
pub struct Cli {
    /// Verbose output (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Search endpoint of the artifact index
    #[arg(
        long,
        global = true,
        env = "MVNX_INDEX_URL",
        default_value = MAVEN_CENTRAL_SEARCH_URL
    )]
    pub index_url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new Maven project in the current directory
    Init,
    /// Add a dependency to the project's pom.xml
    #[command(long_about = "Add a dependency to the project's pom.xml.\n\n\
        The query can be a search term (e.g. \"lombok\") or exact coordinates \
        (e.g. \"org.projectlombok:lombok\").")]
    Add {
        /// Search term or groupId:artifactId
        query: String,
        /// Dependency scope (compile, test, provided, runtime)
        #[arg(long, default_value = "compile")]
        scope: Scope,
    },
    /// Remove a dependency by artifactId
    Remove {
        /// artifactId of the dependency to remove
        artifact_id: String,
    },
    /// Search Maven Central and show the top results
    Search {
        /// Search term or groupId:artifactId
        query: String,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the dependencies declared in pom.xml
    List {
        /// Print dependencies as JSON
        #[arg(long)]
        json: bool,
    },
}
