//! New-session negotiation
//!
//! The creation request is deliberately dialect-ambiguous: it carries the
//! legacy `desiredCapabilities` shape and the W3C `capabilities` shape in
//! one body, so either kind of remote end can consume it without the client
//! knowing the dialect in advance. The reply is then classified
//! structurally and the capability set it carries is parsed in the detected
//! dialect.

use serde_json::{json, Value};
use tracing::{debug, info};

use crate::wire::catalog::Command;
use crate::wire::dialect::{detect_new_session, Dialect};
use crate::wire::errors::{error_for_legacy_status, error_for_w3c_code};
use crate::wire::types::{HttpMethod, WireRequest};
use crate::wire::CapabilitySet;
use crate::{Error, Result};

/// Result of a successful handshake
#[derive(Debug, Clone)]
pub struct HandshakeOutcome {
    /// Session id assigned by the remote end
    pub session_id: String,
    /// Dialect the remote end answered in
    pub dialect: Dialect,
    /// Capabilities the remote end actually granted
    pub capabilities: CapabilitySet,
}

/// Build the dual-dialect session-creation request
pub fn build_request(base_url: &str, desired: &CapabilitySet) -> Result<WireRequest> {
    let legacy = desired.serialize(Dialect::Legacy)?;
    let w3c = desired.serialize(Dialect::W3C)?;

    // both shapes side by side: {"desiredCapabilities": ..., "capabilities": ...}
    let body = json!({
        "desiredCapabilities": legacy,
        "capabilities": w3c["capabilities"],
    });

    let path = Command::NewSession
        .spec()
        .w3c
        .expect("newSession is in the catalog")
        .path;

    Ok(WireRequest {
        method: HttpMethod::Post,
        url: format!("{}{}", base_url.trim_end_matches('/'), path),
        body: Some(body),
    })
}

/// Classify and parse a session-creation response.
///
/// Failure envelopes are mapped through the regular error tables before
/// detection runs, so a remote end that refuses the session surfaces as
/// e.g. `SessionNotCreated` rather than a detection failure. A body that
/// matches neither documented shape is `ProtocolDetectionError`; a body
/// that is not JSON at all is `MalformedResponse`. Either one forbids
/// session creation.
pub fn process_response(http_status: u16, body: &str) -> Result<HandshakeOutcome> {
    let decoded: Value = serde_json::from_str(body)
        .map_err(|e| Error::malformed(format!("new-session response: {}", e)))?;

    if let Some(status) = decoded.get("status").and_then(Value::as_i64) {
        if status != 0 {
            let message = decoded
                .get("value")
                .and_then(|v| v.get("message"))
                .and_then(Value::as_str)
                .unwrap_or("session creation refused");
            return Err(error_for_legacy_status(status, message));
        }
    }

    if http_status >= 400 {
        let error = decoded
            .get("value")
            .and_then(|v| v.get("error"))
            .and_then(Value::as_str);
        let message = decoded
            .get("value")
            .and_then(|v| v.get("message"))
            .and_then(Value::as_str)
            .unwrap_or("session creation refused");

        return Err(match error {
            Some(code) => error_for_w3c_code(code, message),
            None => Error::malformed(format!(
                "HTTP {} from remote end without an error payload",
                http_status
            )),
        });
    }

    let detection = detect_new_session(&decoded)?;
    let capabilities = CapabilitySet::from_wire(detection.dialect, &detection.capabilities)?;

    info!(
        session_id = %detection.session_id,
        dialect = %detection.dialect,
        "session negotiated"
    );
    debug!(
        browser = capabilities.browser_name().unwrap_or("<unreported>"),
        "remote end capabilities"
    );

    Ok(HandshakeOutcome {
        session_id: detection.session_id,
        dialect: detection.dialect,
        capabilities,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn firefox_caps() -> CapabilitySet {
        let mut caps = CapabilitySet::new();
        caps.insert("browserName", json!("firefox"));
        caps
    }

    #[test]
    fn test_request_carries_both_dialect_shapes() {
        let request = build_request("http://localhost:4444/", &firefox_caps()).unwrap();

        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, "http://localhost:4444/session");

        let body = request.body.unwrap();
        assert_eq!(body["desiredCapabilities"]["browserName"], "firefox");
        assert_eq!(body["capabilities"]["alwaysMatch"]["browserName"], "firefox");
        assert_eq!(body["capabilities"]["firstMatch"], json!([{}]));
    }

    #[test]
    fn test_process_legacy_response() {
        let outcome = process_response(
            200,
            r#"{"sessionId":"foo","status":0,"value":{"browserName":"firefox"}}"#,
        )
        .unwrap();

        assert_eq!(outcome.dialect, Dialect::Legacy);
        assert_eq!(outcome.session_id, "foo");
        assert_eq!(outcome.capabilities.browser_name(), Some("firefox"));
        assert!(!outcome.capabilities.is_spec_compliant());
    }

    #[test]
    fn test_process_w3c_response() {
        let outcome = process_response(
            200,
            r#"{"value":{"sessionId":"foo","capabilities":{"browserName":"firefox"}}}"#,
        )
        .unwrap();

        assert_eq!(outcome.dialect, Dialect::W3C);
        assert_eq!(outcome.session_id, "foo");
        assert_eq!(outcome.capabilities.browser_name(), Some("firefox"));
        assert!(outcome.capabilities.is_spec_compliant());
    }

    #[test]
    fn test_process_w3c_refusal() {
        let result = process_response(
            500,
            r#"{"value":{"error":"session not created","message":"no browser"}}"#,
        );
        assert!(matches!(result, Err(Error::SessionNotCreated(m)) if m == "no browser"));
    }

    #[test]
    fn test_process_legacy_refusal() {
        let result = process_response(
            200,
            r#"{"sessionId":null,"status":33,"value":{"message":"no browser"}}"#,
        );
        assert!(matches!(result, Err(Error::SessionNotCreated(_))));
    }

    #[test]
    fn test_process_unrecognized_shape() {
        let result = process_response(200, r#"{"foo":"bar"}"#);
        assert!(matches!(result, Err(Error::ProtocolDetection(_))));
    }

    #[test]
    fn test_process_non_json_body() {
        let result = process_response(200, "<html>proxy error</html>");
        assert!(matches!(result, Err(Error::MalformedResponse(_))));
    }
}
