//! CLI - Command-line argument parsing
//!
//! Defines the CLI structure using clap.
//! Keeps argument parsing separate from execution logic.

use clap::{Parser, Subcommand};
use toolshelf_shared::{ToolId, DEFAULT_API_URL, VERSION};

/// Toolshelf CLI
#[derive(Debug, Parser)]
#[command(name = "toolshelfctl")]
#[command(about = "Toolshelf - browse AI tools and keep favorites", long_about = None)]
#[command(version = VERSION)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Base URL of the toolshelfd API
    #[arg(long, global = true, env = "TOOLSHELF_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Subcommand (if not provided, starts interactive TUI)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Debug, Subcommand, PartialEq)]
pub enum Commands {
    /// List tools, optionally filtered
    Tools {
        /// Only tools in this category (case-insensitive)
        #[arg(long, short)]
        category: Option<String>,

        /// Only tools whose name contains this text (case-insensitive)
        #[arg(long, short)]
        search: Option<String>,

        /// Output JSON only
        #[arg(long)]
        json: bool,
    },

    /// List favorited tools
    Favorites {
        /// Output JSON only
        #[arg(long)]
        json: bool,
    },

    /// Add a tool to favorites
    Add {
        /// Tool ID
        id: ToolId,
    },

    /// Remove a tool from favorites
    Remove {
        /// Tool ID
        id: ToolId,
    },

    /// List categories with tool counts
    Categories,

    /// Show tools-by-category chart
    Chart,

    /// Show daemon health
    Status {
        /// Output JSON only
        #[arg(long)]
        json: bool,
    },

    /// Launch interactive TUI
    Tui,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_tui() {
        let cli = Cli::try_parse_from(["toolshelfctl"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_tools_filters() {
        let cli =
            Cli::try_parse_from(["toolshelfctl", "tools", "-c", "nlp", "--search", "gpt"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Tools {
                category: Some("nlp".into()),
                search: Some("gpt".into()),
                json: false,
            })
        );
    }

    #[test]
    fn test_add_requires_integer_id() {
        let cli = Cli::try_parse_from(["toolshelfctl", "add", "4"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Add { id: 4 }));
        assert!(Cli::try_parse_from(["toolshelfctl", "add", "four"]).is_err());
    }

    #[test]
    fn test_api_url_flag() {
        let cli = Cli::try_parse_from([
            "toolshelfctl",
            "--api-url",
            "http://tools.internal:8080/api",
            "chart",
        ])
        .unwrap();
        assert_eq!(cli.api_url, "http://tools.internal:8080/api");
        assert_eq!(cli.command, Some(Commands::Chart));
    }
}
