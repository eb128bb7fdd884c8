//! CLI command implementations.

pub mod config;
pub mod ratings;
pub mod search;
pub mod session;

use clap::{Args, Subcommand};
use storefront_commerce::search::{SortKey, ViewMode};

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Free-text query.
    #[arg(default_value = "")]
    pub query: String,

    /// Category filter.
    #[arg(short = 'C', long)]
    pub category: Option<String>,

    /// Sort order (relevance, price_asc, price_desc, rating, newest, name_asc).
    #[arg(short, long, default_value = "relevance", value_parser = parse_sort)]
    pub sort: SortKey,

    /// Lower price bound.
    #[arg(long)]
    pub min_price: Option<String>,

    /// Upper price bound.
    #[arg(long)]
    pub max_price: Option<String>,

    /// Page to show.
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Layout of the product grid (grid or list).
    #[arg(long, default_value = "grid", value_parser = parse_view)]
    pub view: ViewMode,

    /// Print the full rendered HTML page.
    #[arg(long)]
    pub html: bool,
}

/// Arguments for the session command.
#[derive(Args)]
#[command(after_help = SESSION_SCRIPT_HELP)]
pub struct SessionArgs {
    /// Script file, one event per line (reads stdin when omitted or "-").
    pub script: Option<String>,

    /// Print the full rendered HTML page.
    #[arg(long)]
    pub html: bool,
}

const SESSION_SCRIPT_HELP: &str = "\
Script lines are events such as `text lamp`, `category Home`, `page 2`,
`add 4 2`, `rate 5` or `submit 4`, plus `wait <ms>`; `#` starts a comment.

Cart actions look the product up in the current results. Put a `wait`
(e.g. `wait 500`) before the first `add` so the initial search has
resolved; an `add` for a product that is not loaded only raises a
warning notice.";

/// Arguments for the ratings command.
#[derive(Args)]
pub struct RatingsArgs {
    #[command(subcommand)]
    pub command: RatingsCommand,
}

#[derive(Subcommand)]
pub enum RatingsCommand {
    /// List your existing ratings.
    List,
    /// Rate a product.
    Submit {
        /// Product ID.
        product_id: u64,
        /// Rating, 1 to 5 stars.
        #[arg(value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: u8,
    },
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// API base URL to write into the file.
        #[arg(long, default_value = "http://localhost:5000")]
        base_url: String,
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}

fn parse_sort(s: &str) -> Result<SortKey, String> {
    SortKey::ALL
        .into_iter()
        .find(|key| key.as_str() == s)
        .ok_or_else(|| format!("unknown sort '{}'", s))
}

fn parse_view(s: &str) -> Result<ViewMode, String> {
    ViewMode::parse(s).map_err(|e| e.to_string())
}
