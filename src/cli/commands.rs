//! CLI commands and argument parsing

use crate::types::Sort;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Browse paginated HAL collections from the command line
#[derive(Parser, Debug)]
#[command(name = "hal-pager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Client configuration file (YAML or JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Root URL as it appears in HAL links (overrides config)
    #[arg(long, global = true)]
    pub root_url: Option<String>,

    /// Proxy URL substituted for the root URL (overrides config)
    #[arg(long, global = true)]
    pub proxy_url: Option<String>,

    /// Extra request header, `Name: value` (repeatable)
    #[arg(short = 'H', long = "header", global = true)]
    pub headers: Vec<String>,

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
    /// Load the collection at URL
    Get {
        url: String,
    },

    /// Load the page after the one at URL
    Next {
        url: String,
    },

    /// Load the page before the one at URL
    Prev {
        url: String,
    },

    /// Load the first page of the collection at URL
    First {
        url: String,
    },

    /// Load the last page of the collection at URL
    Last {
        url: String,
    },

    /// Load page NUMBER of the collection at URL
    Page {
        url: String,
        number: u32,
    },

    /// Reload the collection at URL with SIZE items per page
    Size {
        url: String,
        size: u32,
    },

    /// Reload the collection at URL sorted by `path[,ASC|DESC]` criteria
    Sort {
        url: String,
        #[arg(required = true)]
        sort: Vec<Sort>,
    },

    /// Follow `next` links from URL, printing every page
    Walk {
        url: String,

        /// Stop after this many pages
        #[arg(long)]
        max_pages: Option<usize>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one page per line)
    Json,
    /// Indented JSON
    Pretty,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SortOrder;

    #[test]
    fn test_parse_sort_command() {
        let cli = Cli::try_parse_from([
            "hal-pager",
            "sort",
            "http://h/api/users",
            "name",
            "createdAt,DESC",
        ])
        .unwrap();

        match cli.command {
            Commands::Sort { url, sort } => {
                assert_eq!(url, "http://h/api/users");
                assert_eq!(sort, vec![Sort::asc("name"), Sort::desc("createdAt")]);
                assert_eq!(sort[1].order, SortOrder::Desc);
            }
            other => panic!("Expected Sort, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "hal-pager",
            "page",
            "http://h/api/users",
            "3",
            "--proxy-url",
            "http://localhost/api",
            "-H",
            "X-Tenant: acme",
            "--format",
            "pretty",
        ])
        .unwrap();

        assert!(matches!(cli.command, Commands::Page { number: 3, .. }));
        assert_eq!(cli.proxy_url.as_deref(), Some("http://localhost/api"));
        assert_eq!(cli.headers, vec!["X-Tenant: acme".to_string()]);
        assert_eq!(cli.format, OutputFormat::Pretty);
    }

    #[test]
    fn test_sort_requires_criteria() {
        assert!(Cli::try_parse_from(["hal-pager", "sort", "http://h/api/users"]).is_err());
        assert!(
            Cli::try_parse_from(["hal-pager", "sort", "http://h/api/users", "name,UP"]).is_err()
        );
    }
}
