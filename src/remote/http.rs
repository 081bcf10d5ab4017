//! HTTP transport backed by reqwest

use super::{RemoteError, RemoteResponse, Result, Transport};
use reqwest::{Client, Url};

/// Transport that talks to a real server
///
/// Relative URLs (`/files/play`) are resolved against the configured base.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base: Option<Url>,
}

impl HttpTransport {
    /// Create a transport, optionally anchored at `base_url`
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::InvalidUrl` if the base URL does not parse.
    pub fn new(base_url: Option<&str>) -> Result<Self> {
        let base = base_url
            .map(|url| {
                Url::parse(url).map_err(|e| RemoteError::InvalidUrl {
                    url: url.to_string(),
                    reason: e.to_string(),
                })
            })
            .transpose()?;

        Ok(Self {
            client: Client::new(),
            base,
        })
    }

    /// Resolve a possibly relative URL against the base
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::InvalidUrl` if the URL cannot be resolved.
    pub fn resolve(&self, url: &str) -> Result<Url> {
        let resolved = match &self.base {
            Some(base) => base.join(url),
            None => Url::parse(url),
        };

        resolved.map_err(|e| RemoteError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<RemoteResponse> {
        let url = self.resolve(url)?;
        tracing::debug!(%url, "GET");

        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(RemoteResponse { status, body })
    }

    async fn post_form(&self, url: &str, form: &[(String, String)]) -> Result<RemoteResponse> {
        let url = self.resolve(url)?;
        tracing::debug!(%url, fields = form.len(), "POST");

        let response = self.client.post(url).form(form).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(RemoteResponse { status, body })
    }
}
