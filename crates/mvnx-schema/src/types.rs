//! Dependency coordinates, scopes and search candidates.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Errors that can occur when validating a [`Dependency`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DependencyError {
    /// A required coordinate (group id, artifact id or version) is empty.
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    /// The scope is not one of the four Maven scopes mvnx manages.
    #[error("invalid scope: {0} (valid: compile, test, provided, runtime)")]
    InvalidScope(String),
}

/// Build-phase visibility of a dependency.
///
/// Only the four scopes a developer typically declares by hand are
/// supported. `compile` is the Maven default and is never written to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Available on every classpath (Maven default).
    #[default]
    Compile,
    /// Only available when compiling and running tests.
    Test,
    /// Provided by the runtime container (e.g. the servlet API).
    Provided,
    /// Not needed for compilation, only at runtime.
    Runtime,
}

impl Scope {
    /// All supported scopes, in the order they are usually documented.
    pub const ALL: [Scope; 4] = [Self::Compile, Self::Test, Self::Provided, Self::Runtime];

    /// Parse a scope name. An empty string normalizes to [`Scope::Compile`].
    ///
    /// # Errors
    ///
    /// Returns [`DependencyError::InvalidScope`] for anything other than
    /// `compile`, `test`, `provided` or `runtime`.
    pub fn parse(s: &str) -> Result<Self, DependencyError> {
        match s {
            "" | "compile" => Ok(Self::Compile),
            "test" => Ok(Self::Test),
            "provided" => Ok(Self::Provided),
            "runtime" => Ok(Self::Runtime),
            other => Err(DependencyError::InvalidScope(other.to_string())),
        }
    }

    /// Lowercase name as it appears inside `<scope>`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Compile => "compile",
            Self::Test => "test",
            Self::Provided => "provided",
            Self::Runtime => "runtime",
        }
    }

    /// Whether this is the implicit Maven default.
    pub fn is_default(&self) -> bool {
        *self == Self::Compile
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Scope {
    type Err = DependencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A Maven dependency declaration.
///
/// Identity is the `(group_id, artifact_id)` pair: two dependencies that
/// differ only in version or scope compare equal, because version and scope
/// are attributes of the same declared artifact.
///
/// # Example
///
/// ```
/// use mvnx_schema::{Dependency, Scope};
///
/// let dep = Dependency::new("junit", "junit", "4.13.2", "test").unwrap();
/// assert_eq!(dep.scope(), Scope::Test);
/// assert_eq!(dep.to_string(), "junit:junit:4.13.2 (scope: test)");
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Dependency {
    group_id: String,
    artifact_id: String,
    version: String,
    scope: Scope,
}

impl Dependency {
    /// Create a validated dependency from raw text fields.
    ///
    /// # Errors
    ///
    /// Returns [`DependencyError::EmptyField`] if any coordinate is empty and
    /// [`DependencyError::InvalidScope`] if `scope` is not a known scope.
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
        scope: &str,
    ) -> Result<Self, DependencyError> {
        Self::with_scope(group_id, artifact_id, version, Scope::parse(scope)?)
    }

    /// Create a validated dependency with an already parsed scope.
    ///
    /// # Errors
    ///
    /// Returns [`DependencyError::EmptyField`] if any coordinate is empty.
    pub fn with_scope(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
        scope: Scope,
    ) -> Result<Self, DependencyError> {
        let group_id = group_id.into();
        let artifact_id = artifact_id.into();
        let version = version.into();

        if group_id.is_empty() {
            return Err(DependencyError::EmptyField("groupId"));
        }
        if artifact_id.is_empty() {
            return Err(DependencyError::EmptyField("artifactId"));
        }
        if version.is_empty() {
            return Err(DependencyError::EmptyField("version"));
        }

        Ok(Self {
            group_id,
            artifact_id,
            version,
            scope,
        })
    }

    /// The `groupId` coordinate.
    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    /// The `artifactId` coordinate.
    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    /// The declared version.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The declared scope.
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// `groupId:artifactId`, without version.
    pub fn coordinates(&self) -> String {
        format!("{}:{}", self.group_id, self.artifact_id)
    }

    /// Whether this dependency has the given identity pair.
    pub fn is_artifact(&self, group_id: &str, artifact_id: &str) -> bool {
        self.group_id == group_id && self.artifact_id == artifact_id
    }
}

impl PartialEq for Dependency {
    fn eq(&self, other: &Self) -> bool {
        self.is_artifact(&other.group_id, &other.artifact_id)
    }
}

impl Eq for Dependency {}

impl Hash for Dependency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.group_id.hash(state);
        self.artifact_id.hash(state);
    }
}

impl std::fmt::Display for Dependency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)?;
        if !self.scope.is_default() {
            write!(f, " (scope: {})", self.scope)?;
        }
        Ok(())
    }
}

/// A search hit from the artifact index, ranked by relevance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtifactCandidate {
    group_id: String,
    artifact_id: String,
    latest_version: String,
    relevance_score: f64,
}

impl ArtifactCandidate {
    /// Create a candidate. Scores are on a 0..=100 scale, higher is better.
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        latest_version: impl Into<String>,
        relevance_score: f64,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            latest_version: latest_version.into(),
            relevance_score,
        }
    }

    /// The `groupId` coordinate.
    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    /// The `artifactId` coordinate.
    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    /// Latest version published to the index.
    pub fn latest_version(&self) -> &str {
        &self.latest_version
    }

    /// Relevance score assigned by the resolver.
    pub fn relevance_score(&self) -> f64 {
        self.relevance_score
    }

    /// `groupId:artifactId`, without version.
    pub fn coordinates(&self) -> String {
        format!("{}:{}", self.group_id, self.artifact_id)
    }

    /// Turn this candidate into a dependency on its latest version.
    ///
    /// # Errors
    ///
    /// Returns a [`DependencyError`] if a coordinate reported by the index is
    /// empty.
    pub fn to_dependency(&self, scope: Scope) -> Result<Dependency, DependencyError> {
        Dependency::with_scope(
            self.group_id.as_str(),
            self.artifact_id.as_str(),
            self.latest_version.as_str(),
            scope,
        )
    }
}

impl std::fmt::Display for ArtifactCandidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.group_id, self.artifact_id, self.latest_version
        )
    }
}
