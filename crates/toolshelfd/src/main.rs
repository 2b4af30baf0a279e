//! Toolshelf Daemon - serves the AI tool catalog and the favorites set.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use toolshelf_shared::VERSION;
use toolshelfd::catalog::CatalogStore;
use toolshelfd::config::Config;
use toolshelfd::server::{self, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "toolshelfd")]
#[command(about = "Toolshelf daemon - AI tool catalog and favorites API", long_about = None)]
#[command(version = VERSION)]
struct Args {
    /// Config file (defaults to /etc/toolshelf/config.toml when present)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Interface to bind
    #[arg(long)]
    host: Option<String>,

    /// Port to bind
    #[arg(long, short)]
    port: Option<u16>,

    /// JSON catalog file
    #[arg(long)]
    catalog: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load(),
    };
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(catalog) = args.catalog {
        config.catalog.path = Some(catalog);
    }

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Toolshelf Daemon v{} starting", VERSION);

    let catalog = match &config.catalog.path {
        Some(path) => CatalogStore::from_file(path)
            .with_context(|| format!("Cannot load catalog from {}", path.display()))?,
        None => CatalogStore::sample().context("Bundled catalog is invalid")?,
    };

    server::run(&config, AppState::new(catalog)).await
}
