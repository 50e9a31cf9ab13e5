//! Add command

use anyhow::{Context, Result};
use mvnx_core::Upsert;
use mvnx_schema::Scope;

use crate::ops::{self, Context as OpContext};
use crate::ui::Output;
use crate::ui::prompt::select_candidate;

/// Resolve `query` and add the chosen artifact to the project's pom.xml
pub async fn add(index_url: &str, query: &str, scope: Scope) -> Result<()> {
    let cwd = super::current_dir()?;
    let output = Output::new();

    let (project, mut repo) = ops::project::open(&cwd)?;
    tracing::debug!("Found pom.xml at {}", project.pom.display());

    let ctx = OpContext::new(index_url)?;
    tracing::debug!("Searching for {query}");
    let candidates = ops::add::find_candidates(&ctx, query).await?;

    let chosen = match candidates.as_slice() {
        [only] => only,
        many => {
            let stdin = std::io::stdin();
            select_candidate(many, stdin.lock(), std::io::stdout())?
        }
    };

    let added = ops::add::add_candidate(&mut repo, chosen, scope)
        .with_context(|| format!("Failed to add {chosen}"))?;

    let verb = match added.outcome {
        Upsert::Inserted => "Added",
        Upsert::Updated => "Updated",
        Upsert::Unchanged => "Already up to date:",
    };
    output.success(&format!("{verb} {}", added.dependency));
    Ok(())
}
