use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use daylog_core::VERSION;

/// Daylog - rate your days and page through how they went
#[derive(Parser)]
#[command(name = "daylog")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the day log store
    #[arg(short, long, global = true, env = "DAYLOG_PATH")]
    pub store: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Text layout for day pages
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One day per line, `key=value` summary
    Plain,
    /// Header, aligned columns, page footer
    Table,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Path where the store will be created
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Display name for the user logging days
    #[arg(long)]
    pub user: Option<String>,

    /// Default number of days per page
    #[arg(long)]
    pub page_size: Option<usize>,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Day being rated (YYYY-MM-DD or ISO-8601, defaults to today)
    #[arg(long)]
    pub date: Option<String>,

    /// Rating from 1 to 5
    #[arg(short, long)]
    pub rating: u8,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Days per page
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Page to show (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Text layout (defaults to table on a terminal, plain otherwise)
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<Format>,
}

/// Arguments for the `browse` command
#[derive(Args)]
pub struct BrowseArgs {
    /// Days per page
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Text layout (defaults to table on a terminal, plain otherwise)
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<Format>,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Day ID (full UUID)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Day ID (full UUID)
    #[arg(value_name = "ID")]
    pub id: String,
}

/// Arguments for the `stats` command
#[derive(Args)]
pub struct StatsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new day log and config
    Init(InitArgs),

    /// Rate a day
    Add(AddArgs),

    /// List days, newest first, one page at a time
    List(ListArgs),

    /// Page through days interactively (commands read from stdin)
    Browse(BrowseArgs),

    /// Show a specific day by ID
    Show(ShowArgs),

    /// Delete a day
    Delete(DeleteArgs),

    /// Show the average rating across all days
    Stats(StatsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
