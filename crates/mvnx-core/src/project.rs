//! Locating and scaffolding Maven projects on disk.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the Maven manifest.
pub const POM_FILE: &str = "pom.xml";

/// Source directories created by [`init_project`].
pub const SOURCE_DIRS: [&str; 4] = [
    "src/main/java",
    "src/main/resources",
    "src/test/java",
    "src/test/resources",
];

/// Manifest written by [`init_project`].
pub const POM_TEMPLATE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0"
         xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
         xsi:schemaLocation="http://maven.apache.org/POM/4.0.0 http://maven.apache.org/xsd/maven-4.0.0.xsd">
  <modelVersion>4.0.0</modelVersion>

  <groupId>com.example</groupId>
  <artifactId>my-app</artifactId>
  <version>1.0-SNAPSHOT</version>
  <packaging>jar</packaging>

  <name>my-app</name>

  <properties>
    <maven.compiler.source>17</maven.compiler.source>
    <maven.compiler.target>17</maven.compiler.target>
    <project.build.sourceEncoding>UTF-8</project.build.sourceEncoding>
  </properties>

  <dependencies>
  </dependencies>

  <build>
    <plugins>
      <plugin>
        <groupId>org.apache.maven.plugins</groupId>
        <artifactId>maven-compiler-plugin</artifactId>
        <version>3.11.0</version>
      </plugin>
    </plugins>
  </build>
</project>
"#;

#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("no pom.xml found in {} or any parent directory", .start.display())]
    NotFound { start: PathBuf },

    #[error("pom.xml already exists in {}", .dir.display())]
    AlreadyExists { dir: PathBuf },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A Maven project: the directory holding `pom.xml` and the file itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub root: PathBuf,
    pub pom: PathBuf,
}

/// Walk up from `start` to the nearest directory containing `pom.xml`.
pub fn find_pom(start: impl AsRef<Path>) -> Result<Project, ProjectError> {
    let start = start.as_ref();
    let absolute = start.canonicalize().map_err(|source| ProjectError::Io {
        path: start.to_path_buf(),
        source,
    })?;

    let mut current = absolute.as_path();
    loop {
        let pom = current.join(POM_FILE);
        if pom.is_file() {
            tracing::debug!("Found {}", pom.display());
            return Ok(Project {
                root: current.to_path_buf(),
                pom,
            });
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => {
                return Err(ProjectError::NotFound {
                    start: absolute.clone(),
                });
            }
        }
    }
}

/// Write the starter `pom.xml` and the standard source layout into `dir`.
///
/// Refuses to touch a directory that already has a `pom.xml`.
pub fn init_project(dir: impl AsRef<Path>) -> Result<Project, ProjectError> {
    let dir = dir.as_ref();
    let pom = dir.join(POM_FILE);
    if pom.exists() {
        return Err(ProjectError::AlreadyExists {
            dir: dir.to_path_buf(),
        });
    }

    std::fs::write(&pom, POM_TEMPLATE).map_err(|source| ProjectError::Io {
        path: pom.clone(),
        source,
    })?;

    for sub in SOURCE_DIRS {
        let path = dir.join(sub);
        std::fs::create_dir_all(&path).map_err(|source| ProjectError::Io { path, source })?;
    }

    tracing::debug!("Initialized project in {}", dir.display());
    Ok(Project {
        root: dir.to_path_buf(),
        pom,
    })
}
