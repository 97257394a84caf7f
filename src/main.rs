use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

use outfit_feed::config;
use outfit_feed::feed::{self, Outcome};
use outfit_feed::store::StoreClient;

#[derive(Debug, Parser)]
#[command(author, version, about = "Materialize the site's outfit feed from the document store")]
struct Args {
    /// Path to YAML config file (compiled-in defaults when omitted)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();
    let cfg = config::load_or_default(args.config.as_deref())?;

    let client = StoreClient::new();
    match feed::materialize(&client, &cfg).await? {
        Outcome::Fetched { count } => {
            info!(count, path = %cfg.output.path.display(), "outfit feed materialized");
        }
        Outcome::Fallback { cause } => {
            warn!(%cause, path = %cfg.output.path.display(), "feed degraded to empty array");
        }
    }

    Ok(())
}
