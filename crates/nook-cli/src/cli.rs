use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "nook")]
#[command(about = "Inspect and drive Nook's command palette and search routes")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Optional path to the settings file
    #[arg(long, global = true, value_name = "PATH")]
    pub settings: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the command palette for a query
    Palette {
        /// Palette query (empty lists every command)
        query: Vec<String>,
        /// Activate the item at this index and print the resulting action
        #[arg(short, long, value_name = "INDEX")]
        select: Option<usize>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the search route for a query
    Search {
        /// Search query
        query: Vec<String>,
        /// Ask the knowledge base instead of searching it
        #[arg(long)]
        ask: bool,
    },
    /// Parse a navigation target
    Route {
        /// Path such as /podcasts or /search?q=rust&mode=ask
        path: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show effective settings
    Settings {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}
