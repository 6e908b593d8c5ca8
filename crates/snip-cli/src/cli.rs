use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "snip",
    version = env!("CARGO_PKG_VERSION"),
    about = "snip - a CLI tool for managing your snippets",
    long_about = "snip is a CLI tool for managing your snippets.\n\n\
                  To copy a snippet, use: snip <key> [args...]\n\
                  To add a snippet, use: snip <key>='<value>'",
    args_conflicts_with_subcommands = true
)]
pub struct Snip {
    /// A key to copy a snippet, or key='value' to create one
    pub input: Option<String>,

    /// Values substituted for $1, $2, ... in the snippet
    pub args: Vec<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all snippets
    Ls,
    /// Update a snippet
    Update {
        /// The snippet to change, as key='new value'
        entry: String,
    },
    /// Delete a snippet
    Delete {
        /// Key of the snippet to delete
        key: String,
    },
    /// Reset all snippets
    Reset,
    /// Export all snippets
    Export {
        #[arg(long, short, default_value = ".", help = "Directory for the CSV output")]
        path: PathBuf,
    },
    /// Import snippets
    Import {
        #[arg(long, short, help = "Path to a local CSV file")]
        path: Option<PathBuf>,

        #[arg(long, short, help = "URL of a remote CSV file")]
        url: Option<String>,
    },
}
