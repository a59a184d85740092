//! Wire layer traits
//!
//! This module defines the abstract interface the bridge uses to reach the
//! remote end. The bridge owns no connection-level configuration: timeouts,
//! TLS and proxying are entirely the transport implementation's concern.

use async_trait::async_trait;

use super::types::{WireRequest, WireResponse};

/// HTTP transport trait
///
/// The single outbound capability the bridge consumes: send one request,
/// get back a status code and an undecoded body. Implementations must not
/// retry on their own; command retry policy belongs to the caller because
/// remote automation commands are frequently non-idempotent.
#[async_trait]
pub trait WireTransport: Send + Sync + std::fmt::Debug {
    /// Send a request and wait for the response
    async fn send(&self, request: WireRequest) -> Result<WireResponse, crate::Error>;
}
