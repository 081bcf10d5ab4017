//! UI error types

use std::io;
use thiserror::Error;

/// Message shown when no clipboard can be reached
pub const CLIPBOARD_UNAVAILABLE: &str =
    "Access to the clipboard is only available in a graphical session";

/// Errors that can occur while prompting the user
#[derive(Debug, Error)]
pub enum InputError {
    /// IO error during input
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Errors that can occur while writing to the clipboard
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// No clipboard backend could be reached
    #[error("{}", CLIPBOARD_UNAVAILABLE)]
    Unavailable,

    /// The backend rejected the write
    #[error("Clipboard error: {0}")]
    Write(String),
}

/// Result type for user input operations
pub type Result<T> = std::result::Result<T, InputError>;
