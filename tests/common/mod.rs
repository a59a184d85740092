//! Common test utilities
//!
//! Canned wire envelopes and shared fixtures for the integration tests.

use std::sync::Arc;

use serde_json::{json, Value};
use wirebridge::wire::mock::MockTransport;
use wirebridge::{CapabilitySet, SessionBridge};

/// Initialize test logging once; later calls are no-ops
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Legacy new-session envelope
pub fn legacy_created(session_id: &str, capabilities: Value) -> String {
    json!({"sessionId": session_id, "status": 0, "value": capabilities}).to_string()
}

/// W3C new-session envelope
pub fn w3c_created(session_id: &str, capabilities: Value) -> String {
    json!({"value": {"sessionId": session_id, "capabilities": capabilities}}).to_string()
}

/// Legacy ordinary-command success envelope
pub fn legacy_ok(value: Value) -> String {
    json!({"sessionId": "foo", "status": 0, "value": value}).to_string()
}

/// W3C ordinary-command success envelope
pub fn w3c_ok(value: Value) -> String {
    json!({"value": value}).to_string()
}

/// Desired capabilities used across the tests
pub fn firefox_caps() -> CapabilitySet {
    let mut caps = CapabilitySet::new();
    caps.insert("browserName", json!("firefox"));
    caps
}

/// Bridge over a fresh mock transport
pub fn mock_bridge() -> (Arc<MockTransport>, SessionBridge) {
    init_tracing();
    let mock = Arc::new(MockTransport::new());
    let bridge = SessionBridge::new(mock.clone(), "http://localhost:4444");
    (mock, bridge)
}
