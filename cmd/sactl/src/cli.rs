use clap::{Args, Parser, Subcommand};
use pkg_params::SearchParams;
use pkg_types::query::{SortByField, SortOrder};

#[derive(Parser, Debug)]
#[command(name = "sactl", about = "Manage SSO service accounts", version)]
pub struct Cli {
    /// SSO base URL, e.g. https://sso.example.com/auth/
    #[arg(long, global = true)]
    pub sso: Option<String>,

    /// Bearer token (falls back to $SACTL_TOKEN, then the config file)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Path to YAML config file (default: ~/.config/sactl/config.yaml)
    #[arg(long, short, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List service accounts one page at a time
    List(ListArgs),
    /// Show a single service account
    Get {
        /// Service account ID or client ID
        id: String,
        /// Print raw JSON
        #[arg(long)]
        json: bool,
    },
    /// Create a service account and print its secret
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
    },
    /// Delete a service account
    Delete {
        /// Service account ID or client ID
        id: String,
    },
    /// Generate a new secret, invalidating the old one
    ResetSecret {
        /// Service account ID or client ID
        id: String,
    },
    /// Rewrite list-view URL query strings
    Url {
        #[command(subcommand)]
        action: UrlAction,
    },
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Seed the request from a console URL query, e.g. "page=2&name=ci"
    #[arg(long)]
    pub from_url: Option<SearchParams>,

    #[arg(long)]
    pub page: Option<u64>,

    #[arg(long)]
    pub per_page: Option<u64>,

    /// name | description | createdAt | clientId
    #[arg(long)]
    pub order_by: Option<SortByField>,

    /// asc | desc
    #[arg(long)]
    pub sort_order: Option<SortOrder>,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Print raw JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Name contains
    #[arg(long)]
    pub name: Option<String>,

    /// Client ID contains
    #[arg(long)]
    pub client_id: Option<String>,

    /// Owner contains
    #[arg(long)]
    pub creator: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum UrlAction {
    /// Apply a column-header sort click
    Sort {
        /// Table column index (0 name, 1 description, 4 created)
        #[arg(long)]
        column: usize,
        #[arg(long, default_value = "asc")]
        direction: SortOrder,
        /// Current query string
        #[arg(default_value = "")]
        query: SearchParams,
    },
    /// Replace the filters
    Filter {
        #[command(flatten)]
        filters: FilterArgs,
        #[arg(default_value = "")]
        query: SearchParams,
    },
    /// Remove all filters
    Clear {
        #[arg(default_value = "")]
        query: SearchParams,
    },
    /// Move to a page or change the page size
    Page {
        #[arg(long)]
        page: u64,
        #[arg(long)]
        per_page: u64,
        #[arg(default_value = "")]
        query: SearchParams,
    },
}
