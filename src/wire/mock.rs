//! Mock transport for testing
//!
//! A hand-rolled test double for [`WireTransport`]: canned responses go in,
//! every request is recorded, and a call counter lets tests assert that a
//! code path performed zero I/O. No mocking framework machinery.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use super::traits::WireTransport;
use super::types::{WireRequest, WireResponse};
use crate::Error;

/// Recording transport double with a queue of canned responses
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<WireResponse>>,
    requests: Mutex<Vec<WireRequest>>,
    calls: AtomicUsize,
}

impl MockTransport {
    /// Create an empty mock; every send fails until responses are queued
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock pre-loaded with responses, served in order
    pub fn with_responses(responses: Vec<WireResponse>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Queue one canned response
    pub fn push_response(&self, status: u16, body: impl Into<String>) {
        self.responses
            .lock()
            .expect("mock transport lock poisoned")
            .push_back(WireResponse::new(status, body));
    }

    /// All requests sent so far, in order
    pub fn requests(&self) -> Vec<WireRequest> {
        self.requests
            .lock()
            .expect("mock transport lock poisoned")
            .clone()
    }

    /// The most recent request, if any
    pub fn last_request(&self) -> Option<WireRequest> {
        self.requests
            .lock()
            .expect("mock transport lock poisoned")
            .last()
            .cloned()
    }

    /// Number of sends performed
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl WireTransport for MockTransport {
    async fn send(&self, request: WireRequest) -> Result<WireResponse, Error> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.requests
            .lock()
            .expect("mock transport lock poisoned")
            .push(request);

        self.responses
            .lock()
            .expect("mock transport lock poisoned")
            .pop_front()
            .ok_or_else(|| Error::transport("mock transport has no canned response left"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::types::HttpMethod;

    #[test]
    fn test_mock_serves_responses_in_order() {
        tokio_test::block_on(async {
            let mock = MockTransport::new();
            mock.push_response(200, r#"{"value": 1}"#);
            mock.push_response(404, r#"{"value": 2}"#);

            let request = WireRequest {
                method: HttpMethod::Get,
                url: "http://localhost/status".to_string(),
                body: None,
            };

            let first = mock.send(request.clone()).await.unwrap();
            assert_eq!(first.status, 200);

            let second = mock.send(request.clone()).await.unwrap();
            assert_eq!(second.status, 404);

            assert!(mock.send(request).await.is_err());
            assert_eq!(mock.call_count(), 3);
        });
    }

    #[test]
    fn test_mock_records_requests() {
        tokio_test::block_on(async {
            let mock = MockTransport::with_responses(vec![WireResponse::new(200, "{}")]);

            let request = WireRequest {
                method: HttpMethod::Delete,
                url: "http://localhost/session/s1".to_string(),
                body: None,
            };
            mock.send(request).await.unwrap();

            let recorded = mock.last_request().unwrap();
            assert_eq!(recorded.method, HttpMethod::Delete);
            assert_eq!(recorded.url, "http://localhost/session/s1");
        });
    }
}
