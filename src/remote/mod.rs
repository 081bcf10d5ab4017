//! Remote listing source and action endpoints
//!
//! The session talks to the server through the [`Transport`] trait so the
//! HTTP stack can be swapped for a scripted one in tests.
//!
//! - `http`: reqwest-backed transport
//! - `fragment`: parsing of refresh bodies into listing nodes
//! - `mock`: scripted transport that records every request

pub mod fragment;
pub mod http;
pub mod mock;

pub use fragment::parse_fragment;
pub use http::HttpTransport;
pub use mock::{MockTransport, RecordedRequest, RequestMethod};

use thiserror::Error;

/// Transport-level failures (the request never produced a response)
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The HTTP client failed to send the request or read the body
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// A URL could not be resolved
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// A scripted transport had nothing to reply with
    #[error("Transport unavailable: {0}")]
    Unavailable(String),
}

/// Result type for transport operations
pub type Result<T> = std::result::Result<T, RemoteError>;

/// Status and body of a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteResponse {
    /// HTTP status code
    pub status: u16,

    /// Response body as text
    pub body: String,
}

impl RemoteResponse {
    /// Create a response
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A 200 response with the given body
    #[must_use]
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    /// Only status 200 counts as success
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Request/response transport used by refresh and dispatch
///
/// Implementations never retry and apply no timeout.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Issue a GET request
    ///
    /// # Errors
    ///
    /// Returns `RemoteError` when no response could be obtained. A non-200
    /// response is not an error at this level.
    async fn get(&self, url: &str) -> Result<RemoteResponse>;

    /// Issue a POST request with a form-encoded body
    ///
    /// Field order is preserved; repeated names are allowed.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError` when no response could be obtained.
    async fn post_form(&self, url: &str, form: &[(String, String)]) -> Result<RemoteResponse>;
}
