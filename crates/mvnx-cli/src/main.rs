//! mvnx - Modern dependency experience for Maven

use anyhow::Result;
use clap::FromArgMatches;
use tracing_subscriber::EnvFilter;

use mvnx_cli::cmd;
use mvnx_cli::{BuildInfo, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let build = BuildInfo::current();
    let matches = mvnx_cli::command(&build).get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    // --verbose wins over RUST_LOG
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Init => cmd::init::init(),
        Commands::Add { query, scope } => cmd::add::add(&cli.index_url, &query, scope).await,
        Commands::Remove { artifact_id } => cmd::remove::remove(&artifact_id),
        Commands::Search { query, json } => cmd::search::search(&cli.index_url, &query, json).await,
        Commands::List { json } => cmd::list::list(json),
    }
}
