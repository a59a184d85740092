//! Dialect classification of session-creation responses
//!
//! The two dialects are distinguished structurally, never by a version
//! string: real remote ends do not reliably self-report, so the only safe
//! probe is the literal shape of the one response guaranteed to exist, the
//! new-session reply.

use serde_json::Value;
use tracing::debug;

use crate::{Error, Result};

/// Wire-protocol dialect a remote end speaks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Legacy JSON wire protocol (`status` + top-level `sessionId`)
    Legacy,
    /// W3C WebDriver protocol (everything under `value`)
    W3C,
}

impl Dialect {
    /// Whether this is the W3C dialect
    pub fn is_w3c(self) -> bool {
        matches!(self, Dialect::W3C)
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::Legacy => f.write_str("legacy"),
            Dialect::W3C => f.write_str("w3c"),
        }
    }
}

/// Outcome of classifying a new-session response body
#[derive(Debug, Clone)]
pub struct Detection {
    /// Detected dialect, fixed for the session's lifetime
    pub dialect: Dialect,
    /// Session id assigned by the remote end
    pub session_id: String,
    /// Raw capabilities payload, shape per the detected dialect
    pub capabilities: Value,
}

/// Classify the decoded JSON body of a session-creation response.
///
/// W3C: a `value` object carrying `sessionId` and a `capabilities` map,
/// with no wrapping `status` field. Early geckodriver nested the old wire
/// payload under `value.value` instead of `value.capabilities`; that shape
/// also counts as W3C. Legacy: top-level `sessionId` alongside an integer
/// `status`, with `value` as the capabilities. Anything else fails with
/// `ProtocolDetectionError` and no session may be created from it.
pub fn detect_new_session(body: &Value) -> Result<Detection> {
    let has_status = body.get("status").map(Value::is_i64).unwrap_or(false);

    if !has_status {
        if let Some(value) = body.get("value").and_then(Value::as_object) {
            let session_id = value.get("sessionId").and_then(Value::as_str);
            let capabilities = value
                .get("capabilities")
                .filter(|v| v.is_object())
                .or_else(|| value.get("value").filter(|v| v.is_object()));

            if let (Some(session_id), Some(capabilities)) = (session_id, capabilities) {
                debug!(session_id, "new-session response classified as w3c");
                return Ok(Detection {
                    dialect: Dialect::W3C,
                    session_id: session_id.to_string(),
                    capabilities: capabilities.clone(),
                });
            }
        }
    }

    if has_status {
        let session_id = body.get("sessionId").and_then(Value::as_str);
        let value = body.get("value").filter(|v| v.is_object());

        if let (Some(session_id), Some(value)) = (session_id, value) {
            debug!(session_id, "new-session response classified as legacy");
            return Ok(Detection {
                dialect: Dialect::Legacy,
                session_id: session_id.to_string(),
                capabilities: value.clone(),
            });
        }
    }

    Err(Error::protocol_detection(
        "new-session response matches neither the legacy nor the w3c shape",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detect_w3c() {
        let body = json!({
            "value": {"sessionId": "abc", "capabilities": {"browserName": "chrome"}}
        });

        let detection = detect_new_session(&body).unwrap();
        assert_eq!(detection.dialect, Dialect::W3C);
        assert_eq!(detection.session_id, "abc");
        assert_eq!(detection.capabilities["browserName"], "chrome");
    }

    #[test]
    fn test_detect_legacy() {
        let body = json!({
            "sessionId": "abc", "status": 0, "value": {"browserName": "chrome"}
        });

        let detection = detect_new_session(&body).unwrap();
        assert_eq!(detection.dialect, Dialect::Legacy);
        assert_eq!(detection.session_id, "abc");
        assert_eq!(detection.capabilities["browserName"], "chrome");
    }

    #[test]
    fn test_detect_older_geckodriver_shape() {
        // geckodriver 0.15 wrapped the old wire payload in "value" rather
        // than "capabilities"
        let body = json!({
            "value": {"sessionId": "23456789", "value": {"browserName": "firefox"}}
        });

        let detection = detect_new_session(&body).unwrap();
        assert_eq!(detection.dialect, Dialect::W3C);
        assert_eq!(detection.capabilities["browserName"], "firefox");
    }

    #[test]
    fn test_detect_unrecognized_shape_fails() {
        let result = detect_new_session(&json!({"foo": "bar"}));
        assert!(matches!(result, Err(Error::ProtocolDetection(_))));
    }

    #[test]
    fn test_detect_is_deterministic() {
        let body = json!({
            "value": {"sessionId": "abc", "capabilities": {}}
        });

        for _ in 0..3 {
            assert_eq!(detect_new_session(&body).unwrap().dialect, Dialect::W3C);
        }
    }

    #[test]
    fn test_status_field_forces_legacy_reading() {
        // a body with a status integer is never w3c, even if a value object
        // is present
        let body = json!({
            "sessionId": "abc",
            "status": 0,
            "value": {"sessionId": "abc", "capabilities": {}}
        });

        let detection = detect_new_session(&body).unwrap();
        assert_eq!(detection.dialect, Dialect::Legacy);
    }
}
