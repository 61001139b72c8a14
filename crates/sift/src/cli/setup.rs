use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "sift",
    bin_name = "sift",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Filter and replay rendered listing pages", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Directory for saved lists and preferences
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the built-in filter presets
    Presets,

    /// Apply a query and select values to a page snapshot
    Filter {
        /// Page snapshot (JSON)
        page: PathBuf,

        /// Preset to use (defaults to the configured default_preset)
        #[arg(short, long)]
        preset: Option<String>,

        /// Search box text
        #[arg(short, long)]
        query: Option<String>,

        /// Set a control value, e.g. --set '#zone-filter=West Bay'
        #[arg(short, long = "set", value_name = "SELECTOR=VALUE", value_parser = parse_selection)]
        selections: Vec<(String, String)>,
    },

    /// Replay a timed event script against a page snapshot
    Replay {
        /// Page snapshot (JSON)
        page: PathBuf,

        /// Event script (JSON array of steps)
        script: PathBuf,

        /// Preset to use (defaults to the configured default_preset)
        #[arg(short, long)]
        preset: Option<String>,
    },

    /// Manage a saved id list (favorite_properties, watched_videos, saved_jobs)
    Saved {
        /// Storage key of the list
        key: String,

        #[command(subcommand)]
        action: SavedAction,
    },

    /// Show or set a UI preference
    Pref {
        #[command(subcommand)]
        pref: PrefCommands,
    },

    /// Show the effective configuration
    Config,
}

#[derive(Subcommand, Debug)]
pub enum SavedAction {
    /// Print the ids in the list
    List,
    /// Add an id (no duplicates)
    Add { id: String },
    /// Remove an id
    Remove { id: String },
    /// Add the id if absent, remove it if present
    Toggle { id: String },
}

#[derive(Subcommand, Debug)]
pub enum PrefCommands {
    /// Grid or list layout of the portfolio page
    PortfolioView {
        /// New value; omit to show the current one
        value: Option<ViewArg>,
    },
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum ViewArg {
    Grid,
    List,
}

fn parse_selection(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((selector, value)) if !selector.trim().is_empty() => {
            Ok((selector.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected SELECTOR=VALUE, got '{}'", raw)),
    }
}
