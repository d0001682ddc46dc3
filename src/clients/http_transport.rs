//! Outbound HTTP access for the handlers
//!
//! `HttpTransport` is the seam between handler logic and the network, so the
//! handlers can be driven by a canned response in tests.

use async_trait::async_trait;
use reqwest::Client;
use tracing::error;

use crate::core::models::RawResponse;
use crate::errors::HandlerError;

#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issues a GET and returns the status and body, whatever the status is.
    async fn get(&self, url: &str) -> Result<RawResponse, HandlerError>;
}

/// `reqwest`-backed transport. No timeout is configured.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, HandlerError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            error!("GET {} failed: {}", url, e);
            HandlerError::from(e)
        })?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(RawResponse { status, body })
    }
}
