//! Command-line interface definitions and parsing
//!
//! # Commands
//!
//! - **list**: Fetch a listing and print the visible entries
//! - **clean**: Print the clean label of each argument
//! - **run**: Select entries and send them to a configured action
//! - **copy**: Select entries and copy them to the clipboard
//!
//! Entries are addressed by their 1-based index among the *visible* entries,
//! i.e. after `--filter`, `--hide` and `--show` are applied, exactly as
//! `list` prints them.
//!
//! # Examples
//!
//! ```bash
//! rowpick list --filter grp --hide watched
//! rowpick run play --select 3 1
//! rowpick run move --range 2 5 --input "Season 2"
//! rowpick copy --all --clean
//! ```

use clap::{ArgAction, Args, Parser, Subcommand};

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "rowpick")]
#[command(about = "Select, filter and act on remote listings", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configured listing to open (overrides default_listing)
    #[arg(short = 'l', long = "listing", value_name = "NAME", global = true)]
    pub listing: Option<String>,

    /// Fetch from this URL instead of a configured listing
    #[arg(long = "source", value_name = "URL", global = true, conflicts_with = "listing")]
    pub source: Option<String>,

    /// Base URL for relative sources and endpoints (overrides config)
    #[arg(long = "base-url", value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Fetch the listing and print visible entries
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        view: ViewArgs,

        /// Print clean labels
        #[arg(short = 'c', long = "clean")]
        clean: bool,

        /// Print entries as JSON
        #[arg(long = "json", conflicts_with = "clean")]
        json: bool,
    },

    /// Print the clean label of each argument
    Clean {
        #[arg(value_name = "LABEL", required = true)]
        labels: Vec<String>,
    },

    /// Send selected entries to a configured action
    #[command(visible_alias = "r")]
    Run {
        /// Action name as configured for the listing
        #[arg(value_name = "ACTION")]
        action: String,

        #[command(flatten)]
        select: SelectArgs,

        #[command(flatten)]
        view: ViewArgs,

        /// Value to send instead of prompting
        #[arg(short = 'i', long = "input", value_name = "TEXT")]
        input: Option<String>,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },

    /// Copy selected entries to the clipboard
    ///
    /// On Linux the command returns once a clipboard manager or another
    /// program has taken the copied text over, since it is lost when
    /// rowpick exits.
    #[command(visible_alias = "cp")]
    Copy {
        #[command(flatten)]
        select: SelectArgs,

        #[command(flatten)]
        view: ViewArgs,

        /// Copy clean labels
        #[arg(short = 'c', long = "clean")]
        clean: bool,
    },
}

/// Filter and toggle arguments shared by every listing command
#[derive(Args, Debug, Clone, Default)]
pub struct ViewArgs {
    /// Only show entries containing this text
    #[arg(short = 'f', long = "filter", value_name = "QUERY")]
    pub filter: Option<String>,

    /// Activate a view toggle (hide entries of this class)
    #[arg(long = "hide", value_name = "CLASS")]
    pub hide: Vec<String>,

    /// Deactivate a view toggle
    #[arg(long = "show", value_name = "CLASS")]
    pub show: Vec<String>,
}

/// Which visible entries to select
#[derive(Args, Debug, Clone, Default)]
#[group(required = true, multiple = false)]
pub struct SelectArgs {
    /// Toggle entries by 1-based index, in this order
    #[arg(short = 's', long = "select", value_name = "N", num_args = 1.., value_delimiter = ',')]
    pub select: Vec<usize>,

    /// Select the span between two indexes
    #[arg(long = "range", value_names = ["FROM", "TO"], num_args = 2)]
    pub range: Vec<usize>,

    /// Select every visible entry
    #[arg(short = 'a', long = "all")]
    pub all: bool,
}
