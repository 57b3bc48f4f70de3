//! CLI commands and argument parsing

use crate::session::FetchPolicy;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Offset/limit paging over a directory
#[derive(Parser, Debug)]
#[command(name = "dirpage")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory to page over (overrides store.root)
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
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
    /// Write sample files into an empty root directory
    Seed {
        /// Copies per stem (overrides store.seed.repeat)
        #[arg(long)]
        repeat: Option<usize>,
    },

    /// Run a single page query
    Query {
        /// Index of the first entry (default: 0)
        #[arg(long, allow_negative_numbers = true)]
        offset: Option<i64>,

        /// Maximum entries to return (default: unbounded)
        #[arg(long, allow_negative_numbers = true)]
        limit: Option<i64>,
    },

    /// Page through the whole directory like a scrolling client
    Browse {
        /// Entries per request (overrides session.page_size)
        #[arg(long)]
        page_size: Option<usize>,

        /// Next-request policy (overrides session.policy)
        #[arg(long, value_enum)]
        policy: Option<FetchPolicy>,

        /// Stop after this many pages
        #[arg(long)]
        max_pages: Option<usize>,

        /// Freeze the listing before the first page
        #[arg(long)]
        snapshot: bool,
    },

    /// Start HTTP server mode
    Serve {
        /// Port to listen on (overrides server.port)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Human-readable output
    Pretty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_with_negative_offset() {
        let cli = Cli::parse_from(["dirpage", "query", "--offset", "-1", "--limit", "10"]);
        match cli.command {
            Commands::Query { offset, limit } => {
                assert_eq!(offset, Some(-1));
                assert_eq!(limit, Some(10));
            }
            other => panic!("Expected Query, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_browse_with_global_flags() {
        let cli = Cli::parse_from([
            "dirpage",
            "browse",
            "--root",
            "/tmp/images",
            "--policy",
            "containing-page",
            "--format",
            "pretty",
        ]);

        assert_eq!(cli.root, Some(PathBuf::from("/tmp/images")));
        assert_eq!(cli.format, OutputFormat::Pretty);
        match cli.command {
            Commands::Browse {
                policy, snapshot, ..
            } => {
                assert_eq!(policy, Some(FetchPolicy::ContainingPage));
                assert!(!snapshot);
            }
            other => panic!("Expected Browse, got {other:?}"),
        }
    }
}
