//! Dependency list operations on a loaded `pom.xml`.

use super::ManifestError;
use super::document::{Element, ManifestDocument};
use mvnx_schema::{Dependency, Scope};
use std::path::Path;

const DEPENDENCIES: &str = "dependencies";
const DEPENDENCY: &str = "dependency";
const GROUP_ID: &str = "groupId";
const ARTIFACT_ID: &str = "artifactId";
const VERSION: &str = "version";
const SCOPE: &str = "scope";

/// Outcome of [`PomRepository::add_dependency`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// A new `<dependency>` entry was appended.
    Inserted,
    /// An existing entry had its version or scope changed.
    Updated,
    /// The entry already matched.
    Unchanged,
}

/// Stateful view over one `pom.xml`.
///
/// Nothing is written until [`save`](Self::save) is called; every other
/// operation works on the in-memory document.
#[derive(Debug, Default)]
pub struct PomRepository {
    document: Option<ManifestDocument>,
}

impl PomRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `path`, replacing any previously loaded document.
    ///
    /// On failure the previous document (if any) is kept.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), ManifestError> {
        let document = ManifestDocument::load(path)?;
        tracing::debug!("Loaded {}", document.path().display());
        self.document = Some(document);
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        self.document.is_some()
    }

    pub fn document(&self) -> Option<&ManifestDocument> {
        self.document.as_ref()
    }

    /// Insert or update `dep`, keyed by `(groupId, artifactId)`.
    ///
    /// An existing entry keeps its position and any extra children
    /// (exclusions, classifier, ...); only `<version>` and `<scope>` are
    /// touched. A compile scope is never written, and an existing `<scope>`
    /// is removed when the new scope is compile.
    pub fn add_dependency(&mut self, dep: &Dependency) -> Result<Upsert, ManifestError> {
        let root = self.root_mut()?;
        let dependencies = root.find_or_create_child(DEPENDENCIES);

        let existing = dependencies.children_named_mut(DEPENDENCY).find(|entry| {
            entry.child_text(GROUP_ID).as_deref() == Some(dep.group_id())
                && entry.child_text(ARTIFACT_ID).as_deref() == Some(dep.artifact_id())
        });

        let outcome = match existing {
            Some(entry) => update_entry(entry, dep),
            None => {
                dependencies.push_child(new_entry(dep));
                Upsert::Inserted
            }
        };

        tracing::debug!("{outcome:?} {dep}");
        Ok(outcome)
    }

    /// Remove the first entry whose `<artifactId>` equals `artifact_id`.
    ///
    /// Matching ignores the group id. When nothing matches the document is
    /// left untouched.
    pub fn remove_dependency(&mut self, artifact_id: &str) -> Result<(), ManifestError> {
        let root = self.root_mut()?;
        let not_found = || ManifestError::NotFound {
            artifact_id: artifact_id.to_string(),
        };

        let dependencies = root.find_child_mut(DEPENDENCIES).ok_or_else(not_found)?;
        dependencies
            .remove_child_where(|entry| {
                entry.name() == DEPENDENCY
                    && entry.child_text(ARTIFACT_ID).as_deref() == Some(artifact_id)
            })
            .ok_or_else(not_found)?;

        tracing::debug!("Removed dependency {artifact_id}");
        Ok(())
    }

    /// Whether an entry with this `(groupId, artifactId)` exists. Always
    /// `false` before a document is loaded.
    pub fn has_dependency(&self, group_id: &str, artifact_id: &str) -> bool {
        self.document.as_ref().is_some_and(|doc| {
            doc.root()
                .find_child(DEPENDENCIES)
                .is_some_and(|deps| {
                    deps.children_named(DEPENDENCY).any(|entry| {
                        entry.child_text(GROUP_ID).as_deref() == Some(group_id)
                            && entry.child_text(ARTIFACT_ID).as_deref() == Some(artifact_id)
                    })
                })
        })
    }

    /// Every well-formed entry in document order.
    ///
    /// Entries missing a coordinate or carrying an unknown scope are skipped
    /// with a warning. Version placeholders such as `${junit.version}` are
    /// returned verbatim.
    pub fn dependencies(&self) -> Result<Vec<Dependency>, ManifestError> {
        let doc = self.document.as_ref().ok_or(ManifestError::NotLoaded)?;
        let Some(deps) = doc.root().find_child(DEPENDENCIES) else {
            return Ok(Vec::new());
        };

        let mut out = Vec::new();
        for entry in deps.children_named(DEPENDENCY) {
            let group_id = entry.child_text(GROUP_ID).unwrap_or_default();
            let artifact_id = entry.child_text(ARTIFACT_ID).unwrap_or_default();
            let version = entry.child_text(VERSION).unwrap_or_default();
            let scope = entry.child_text(SCOPE).unwrap_or_default();

            match Dependency::new(group_id, artifact_id, version, &scope) {
                Ok(dep) => out.push(dep),
                Err(e) => tracing::warn!("Skipping dependency entry in {}: {e}", doc.path().display()),
            }
        }
        Ok(out)
    }

    /// Write the document back to the path it was loaded from.
    pub fn save(&self) -> Result<(), ManifestError> {
        self.document
            .as_ref()
            .ok_or(ManifestError::NotLoaded)?
            .save()
    }

    fn root_mut(&mut self) -> Result<&mut Element, ManifestError> {
        self.document
            .as_mut()
            .map(ManifestDocument::root_mut)
            .ok_or(ManifestError::NotLoaded)
    }
}

fn new_entry(dep: &Dependency) -> Element {
    let mut entry = Element::new(DEPENDENCY);
    entry.push_child(Element::with_text(GROUP_ID, dep.group_id()));
    entry.push_child(Element::with_text(ARTIFACT_ID, dep.artifact_id()));
    entry.push_child(Element::with_text(VERSION, dep.version()));
    if !dep.scope().is_default() {
        entry.push_child(Element::with_text(SCOPE, dep.scope().as_str()));
    }
    entry
}

fn update_entry(entry: &mut Element, dep: &Dependency) -> Upsert {
    let mut changed = false;

    let version = entry.find_or_create_child(VERSION);
    if version.text() != dep.version() {
        version.set_text(dep.version());
        changed = true;
    }

    let current_scope = entry.child_text(SCOPE);
    match (dep.scope(), current_scope) {
        (Scope::Compile, Some(_)) => {
            entry.remove_child(SCOPE);
            changed = true;
        }
        (Scope::Compile, None) => {}
        (scope, current) => {
            if current.as_deref() != Some(scope.as_str()) {
                entry.find_or_create_child(SCOPE).set_text(scope.as_str());
                changed = true;
            }
        }
    }

    if changed {
        Upsert::Updated
    } else {
        Upsert::Unchanged
    }
}
