//! Scripted transport for testing

use super::{RemoteError, RemoteResponse, Result, Transport};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// HTTP method of a recorded request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
}

/// A request seen by [`MockTransport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: RequestMethod,
    pub url: String,
    pub form: Vec<(String, String)>,
}

/// Transport that replays queued replies and records every request
///
/// Replies are consumed in order regardless of method. When the queue is
/// empty, requests fail with `RemoteError::Unavailable`. Clones share the
/// same queue and log.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    replies: Arc<Mutex<VecDeque<std::result::Result<RemoteResponse, String>>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockTransport {
    /// Create a transport with no queued replies
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response
    #[must_use]
    pub fn reply(self, status: u16, body: &str) -> Self {
        self.push(Ok(RemoteResponse::new(status, body)));
        self
    }

    /// Queue a transport failure
    #[must_use]
    pub fn fail(self, message: &str) -> Self {
        self.push(Err(message.to_string()));
        self
    }

    /// Queue a response on a shared handle
    pub fn push_reply(&self, status: u16, body: &str) {
        self.push(Ok(RemoteResponse::new(status, body)));
    }

    /// Queue a transport failure on a shared handle
    pub fn push_failure(&self, message: &str) {
        self.push(Err(message.to_string()));
    }

    /// Every request issued so far
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Number of requests issued so far
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or_default()
    }

    fn push(&self, reply: std::result::Result<RemoteResponse, String>) {
        if let Ok(mut replies) = self.replies.lock() {
            replies.push_back(reply);
        }
    }

    fn respond(&self, request: RecordedRequest) -> Result<RemoteResponse> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }

        let reply = self
            .replies
            .lock()
            .ok()
            .and_then(|mut replies| replies.pop_front());

        match reply {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(RemoteError::Unavailable(message)),
            None => Err(RemoteError::Unavailable("no scripted reply".to_string())),
        }
    }
}

impl Transport for MockTransport {
    async fn get(&self, url: &str) -> Result<RemoteResponse> {
        self.respond(RecordedRequest {
            method: RequestMethod::Get,
            url: url.to_string(),
            form: Vec::new(),
        })
    }

    async fn post_form(&self, url: &str, form: &[(String, String)]) -> Result<RemoteResponse> {
        self.respond(RecordedRequest {
            method: RequestMethod::Post,
            url: url.to_string(),
            form: form.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replies_in_order_and_records() {
        let transport = MockTransport::new().reply(200, "one").fail("down");

        let first = transport.get("/list").await.unwrap();
        assert_eq!(first.body, "one");

        let second = transport
            .post_form("/act", &[("path".into(), "a".into())])
            .await;
        assert!(matches!(second, Err(RemoteError::Unavailable(_))));

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].method, RequestMethod::Post);
        assert_eq!(requests[1].form, vec![("path".to_string(), "a".to_string())]);
    }

    #[tokio::test]
    async fn test_empty_queue_is_unavailable() {
        let transport = MockTransport::new();
        assert!(transport.get("/list").await.is_err());
    }
}
