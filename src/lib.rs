//! Rowpick - selectable, filterable listings backed by a remote server
//!
//! A listing is fetched as an HTML fragment, turned into an ordered registry
//! of entries, and then narrowed with a text filter and view toggles. Entries
//! are selected with replace/toggle/range gestures and the selection is sent
//! to action endpoints or copied to the clipboard in a well-defined order.

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod filter;
pub mod listing;
pub mod logging;
pub mod remote;
pub mod selection;
pub mod session;
pub mod toggles;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum RowpickError {
    /// Refresh, dispatch or copy failed; the message is shown as is
    #[error(transparent)]
    Session(#[from] session::SessionError),
    /// Transport could not be set up
    #[error(transparent)]
    Remote(#[from] remote::RemoteError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// JSON output failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// The listing declares no action of that name
    #[error("Unknown action '{0}'")]
    UnknownAction(String),
    /// A selection index does not address a visible entry
    #[error("No visible entry at index {index} ({visible} visible)")]
    NoSuchEntry { index: usize, visible: usize },
}
