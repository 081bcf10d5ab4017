//! Session error types

use crate::remote::RemoteError;
use crate::ui::{ClipboardError, InputError};
use thiserror::Error;

/// Errors surfaced to the user by refresh, dispatch and copy
///
/// None of these are fatal; the session stays usable after any of them.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The request never produced a response
    #[error("{0}")]
    Transport(#[from] RemoteError),

    /// The server answered with a non-200 status; the body is the message
    #[error("{body}")]
    Rejected { status: u16, body: String },

    /// Prompting the user failed
    #[error(transparent)]
    Input(#[from] InputError),

    /// Writing the clipboard failed
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

impl SessionError {
    /// HTTP status of a rejection
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for session operations
pub type Result<T> = std::result::Result<T, SessionError>;
