//! End-to-end session negotiation against stub remote ends

mod common;

use common::*;
use serde_json::json;
use wirebridge::wire::HttpMethod;
use wirebridge::{BridgeState, Dialect, Error};

#[tokio::test]
async fn test_create_session_against_legacy_remote_end() {
    let (mock, bridge) = mock_bridge();
    mock.push_response(200, legacy_created("foo", json!({"browserName": "firefox"})));

    bridge.create_session(firefox_caps()).await.unwrap();

    assert_eq!(bridge.state().await, BridgeState::Active);
    assert_eq!(bridge.dialect().await.unwrap(), Dialect::Legacy);
    assert_eq!(bridge.session_id().await.unwrap(), "foo");

    let caps = bridge.capabilities().await.unwrap();
    assert_eq!(caps.get("browserName"), Some(&json!("firefox")));
}

#[tokio::test]
async fn test_create_session_against_w3c_remote_end() {
    let (mock, bridge) = mock_bridge();
    mock.push_response(200, w3c_created("foo", json!({"browserName": "firefox"})));

    bridge.create_session(firefox_caps()).await.unwrap();

    assert_eq!(bridge.dialect().await.unwrap(), Dialect::W3C);
    assert_eq!(bridge.session_id().await.unwrap(), "foo");

    // identical capability read regardless of dialect
    let caps = bridge.capabilities().await.unwrap();
    assert_eq!(caps.get("browserName"), Some(&json!("firefox")));
    assert!(caps.is_spec_compliant());
}

#[tokio::test]
async fn test_creation_request_carries_both_dialect_shapes() {
    let (mock, bridge) = mock_bridge();
    mock.push_response(200, w3c_created("foo", json!({})));

    bridge.create_session(firefox_caps()).await.unwrap();

    let request = mock.last_request().unwrap();
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(request.url, "http://localhost:4444/session");

    let body = request.body.unwrap();
    // legacy shape: flat desiredCapabilities object
    assert_eq!(body["desiredCapabilities"], json!({"browserName": "firefox"}));
    // w3c shape: alwaysMatch plus a single empty firstMatch alternative
    assert_eq!(
        body["capabilities"]["alwaysMatch"],
        json!({"browserName": "firefox"})
    );
    assert_eq!(body["capabilities"]["firstMatch"], json!([{}]));
}

#[tokio::test]
async fn test_unclassifiable_response_fails_the_bridge() {
    let (mock, bridge) = mock_bridge();
    mock.push_response(200, r#"{"foo":"bar"}"#.to_string());

    let result = bridge.create_session(firefox_caps()).await;

    assert!(matches!(result, Err(Error::ProtocolDetection(_))));
    assert_eq!(bridge.state().await, BridgeState::Failed);
}

#[tokio::test]
async fn test_w3c_session_refusal_is_mapped() {
    let (mock, bridge) = mock_bridge();
    mock.push_response(
        500,
        r#"{"value":{"error":"session not created","message":"no suitable browser"}}"#
            .to_string(),
    );

    let result = bridge.create_session(firefox_caps()).await;

    assert!(matches!(result, Err(Error::SessionNotCreated(_))));
    assert_eq!(bridge.state().await, BridgeState::Failed);
}

#[tokio::test]
async fn test_vendor_prefixed_capabilities_forwarded_opaquely() {
    let (mock, bridge) = mock_bridge();
    mock.push_response(200, w3c_created("foo", json!({})));

    let mut caps = firefox_caps();
    caps.insert("moz:firefoxOptions", json!({"args": ["-headless"]}));
    bridge.create_session(caps).await.unwrap();

    let body = mock.last_request().unwrap().body.unwrap();
    assert_eq!(
        body["desiredCapabilities"]["moz:firefoxOptions"]["args"][0],
        "-headless"
    );
    assert_eq!(
        body["capabilities"]["alwaysMatch"]["moz:firefoxOptions"]["args"][0],
        "-headless"
    );
}
