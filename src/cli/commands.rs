//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Browse past rocket launches, ten at a time
#[derive(Parser, Debug)]
#[command(name = "launchdeck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// GraphQL endpoint, overriding the config file
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Output format for `fetch`
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the first page, then serve the paginated view over HTTP
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Fetch and print one page of launches
    Fetch {
        /// Page number (1-based)
        #[arg(long, default_value = "1")]
        page: u64,
    },

    /// Load the first page and write it as a static HTML document
    Render {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Query the first page and report whether the endpoint answers
    Check,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one launch per line)
    Json,
    /// Human-readable output
    Pretty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve() {
        let cli = Cli::parse_from(["launchdeck", "serve", "--port", "8080"]);
        assert!(matches!(
            cli.command,
            Commands::Serve {
                host: None,
                port: Some(8080)
            }
        ));
        assert_eq!(cli.format, OutputFormat::Pretty);
    }

    #[test]
    fn test_parse_fetch_with_globals() {
        let cli = Cli::parse_from([
            "launchdeck",
            "fetch",
            "--page",
            "3",
            "--endpoint",
            "http://localhost:4000/graphql",
            "-f",
            "json",
            "-v",
        ]);
        assert!(matches!(cli.command, Commands::Fetch { page: 3 }));
        assert_eq!(
            cli.endpoint.as_deref(),
            Some("http://localhost:4000/graphql")
        );
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
    }

    #[test]
    fn test_parse_fetch_default_page() {
        let cli = Cli::parse_from(["launchdeck", "fetch"]);
        assert!(matches!(cli.command, Commands::Fetch { page: 1 }));
    }

    #[test]
    fn test_parse_render_and_check() {
        let cli = Cli::parse_from(["launchdeck", "-C", "deck.yaml", "render", "-o", "out.html"]);
        assert_eq!(cli.config, Some(PathBuf::from("deck.yaml")));
        assert!(matches!(cli.command, Commands::Render { output: Some(_) }));

        let cli = Cli::parse_from(["launchdeck", "check"]);
        assert!(matches!(cli.command, Commands::Check));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
