//! Logging setup
//!
//! Diagnostics go to stderr through `tracing`; results go to stdout through
//! [`crate::ui::OutputWriter`]. `RUST_LOG` wins over `-v` when set.

use tracing_subscriber::{EnvFilter, fmt};

/// Default directive for a verbosity level
#[must_use]
pub const fn directive(verbose: u8, quiet: bool) -> &'static str {
    match (verbose, quiet) {
        (0, true) => "rowpick=error",
        (0, false) => "rowpick=warn",
        (1, _) => "rowpick=debug,info",
        _ => "rowpick=trace,debug",
    }
}

/// Build the filter from `RUST_LOG`, falling back to the verbosity directive
#[must_use]
pub fn env_filter(verbose: u8, quiet: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive(verbose, quiet)))
}

/// Install the global subscriber
///
/// Does nothing if a subscriber is already installed.
pub fn init(verbose: u8, quiet: bool) {
    let _ = fmt()
        .with_env_filter(env_filter(verbose, quiet))
        .with_writer(std::io::stderr)
        .with_target(verbose > 1)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}
