//! HTTP transport implementation
//!
//! A thin reqwest-backed [`WireTransport`]. Connection-level concerns
//! (timeouts, TLS, proxying) live here and in [`crate::config::Config`],
//! never in the bridge.

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, trace};

use super::traits::WireTransport;
use super::types::{HttpMethod, WireRequest, WireResponse};
use crate::config::Config;
use crate::Error;

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with default settings
    pub fn new() -> Result<Self, Error> {
        Self::with_timeout(Duration::from_millis(Config::default().request_timeout))
    }

    /// Create a transport with a per-request timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Create a transport from a configuration
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        Self::with_timeout(Duration::from_millis(config.request_timeout))
    }
}

#[async_trait]
impl WireTransport for HttpTransport {
    async fn send(&self, request: WireRequest) -> Result<WireResponse, Error> {
        debug!(method = %request.method, url = %request.url, "sending request");

        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self
            .client
            .request(method, &request.url)
            .header(reqwest::header::ACCEPT, "application/json");

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        trace!(status, bytes = body.len(), "received response");

        Ok(WireResponse { status, body })
    }
}
