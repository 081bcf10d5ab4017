//! Rowpick CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # Print the default listing
//! rowpick list
//!
//! # Narrow it down and print clean labels
//! rowpick list --filter grp --hide watched --clean
//!
//! # Play the third and first visible entries, in that order
//! rowpick run play --select 3 1
//!
//! # Move a span of entries without prompting
//! rowpick run move --range 2 5 --input "Season 2" --yes
//!
//! # Copy everything visible
//! rowpick copy --all
//!
//! # Ad-hoc listing without configuration
//! rowpick --source http://localhost:8080/files/list list
//! ```
//!
//! # Configuration
//!
//! Listings and their actions are declared in the user's config directory
//! (`~/.config/rowpick/config.toml` on Linux). An empty file is created on
//! first run.

use rowpick::{
    RowpickError,
    cli::{Cli, Commands},
    commands::{self, list::ListFormat},
    config::{AppConfig, ListingConfig},
    logging,
    remote::HttpTransport,
    session::ListSession,
    ui::{ArboardClipboard, DialoguerInput, OutputWriter, PresetInput, StdoutWriter},
};

type Result<T> = std::result::Result<T, RowpickError>;

/// Resolved listing, ready to be fetched
struct Opened {
    listing: ListingConfig,
    session: ListSession<HttpTransport>,
    quiet: bool,
}

fn open_listing(cli: &Cli) -> Result<Opened> {
    let config = AppConfig::load()?;

    let listing = match &cli.source {
        Some(source) => ListingConfig::new(source.clone()),
        None => config.listing(cli.listing.as_deref())?.clone(),
    };

    let base_url = cli.base_url.as_deref().or(config.base_url.as_deref());
    let transport = HttpTransport::new(base_url)?;
    let session = listing.session(transport);

    Ok(Opened {
        listing,
        session,
        quiet: cli.quiet || config.quiet,
    })
}

async fn run(cli: Cli, output: &dyn OutputWriter) -> Result<()> {
    match &cli.command {
        Commands::Clean { labels } => {
            commands::clean(labels, output);
        }
        Commands::List { view, clean, json } => {
            let Opened {
                mut session, quiet, ..
            } = open_listing(&cli)?;

            let format = if *json {
                ListFormat::Json
            } else if *clean {
                ListFormat::Clean
            } else {
                ListFormat::Raw
            };

            commands::list(&mut session, view, format, output, quiet).await?;
        }
        Commands::Run {
            action,
            select,
            view,
            input,
            yes,
        } => {
            let Opened {
                listing,
                mut session,
                quiet,
            } = open_listing(&cli)?;

            let spec = listing
                .action(action)
                .ok_or_else(|| RowpickError::UnknownAction(action.clone()))?;

            let prompter = PresetInput::new(DialoguerInput::new())
                .with_text(input.clone())
                .assume_yes(*yes);

            commands::run(&mut session, spec, select, view, &prompter, output, quiet).await?;
        }
        Commands::Copy {
            select,
            view,
            clean,
        } => {
            let Opened {
                mut session, quiet, ..
            } = open_listing(&cli)?;

            let mut clipboard = ArboardClipboard::new().handing_over(true);
            commands::copy(&mut session, select, view, *clean, &mut clipboard, output, quiet)
                .await?;
        }
    }

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse_args();
    logging::init(cli.verbose, cli.quiet);

    let output = StdoutWriter::new();
    if let Err(e) = run(cli, &output).await {
        tracing::debug!(error = ?e, "command failed");
        output.error(&e.to_string());
        std::process::exit(1);
    }
}
