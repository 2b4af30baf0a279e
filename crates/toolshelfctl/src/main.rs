//! Toolshelf Control - CLI client for the Toolshelf daemon
//!
//! Provides one-shot commands and an interactive TUI.

use clap::Parser;
use toolshelfctl::cli::{Cli, Commands};
use toolshelfctl::client::ToolshelfClient;
use toolshelfctl::{commands, display, errors, tui};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let client = ToolshelfClient::new(cli.api_url);

    // The TUI owns the terminal; log lines would corrupt it
    let interactive = matches!(cli.command, None | Some(Commands::Tui));
    if !interactive {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let result = match cli.command {
        None | Some(Commands::Tui) => tui::run(client).await,
        Some(Commands::Tools {
            category,
            search,
            json,
        }) => commands::tools(&client, category, search, json).await,
        Some(Commands::Favorites { json }) => commands::favorites(&client, json).await,
        Some(Commands::Add { id }) => commands::add(&client, id).await,
        Some(Commands::Remove { id }) => commands::remove(&client, id).await,
        Some(Commands::Categories) => commands::categories(&client).await,
        Some(Commands::Chart) => commands::chart(&client).await,
        Some(Commands::Status { json }) => commands::status(&client, json).await,
    };

    if let Err(e) = result {
        display::print_error(&format!("{:#}", e));
        std::process::exit(errors::exit_code(&e));
    }
}
