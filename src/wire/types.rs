//! Wire-level type definitions
//!
//! Dialect-neutral request/response carriers plus the serde envelope types
//! for both remote-end dialects.

use serde::Deserialize;
use serde_json::Value;

/// HTTP method of a translated command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    /// Method name as it appears on the wire
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully translated HTTP request, ready for the transport
#[derive(Debug, Clone)]
pub struct WireRequest {
    /// HTTP method
    pub method: HttpMethod,
    /// Absolute URL
    pub url: String,
    /// JSON body, if the endpoint takes one
    pub body: Option<Value>,
}

/// Raw HTTP response handed back by the transport
#[derive(Debug, Clone)]
pub struct WireResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body, undecoded
    pub body: String,
}

impl WireResponse {
    /// Convenience constructor used heavily by tests
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Legacy JSON wire protocol response envelope
///
/// `{"sessionId": "...", "status": 0, "value": {...}}`. `status` is
/// mandatory; a legacy body without it is malformed.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyEnvelope {
    /// Session id, present on new-session responses
    #[serde(rename = "sessionId", default)]
    pub session_id: Option<String>,
    /// Numeric status, 0 on success
    pub status: i64,
    /// Command payload (capabilities map on new-session)
    #[serde(default)]
    pub value: Value,
}

/// W3C response envelope: `{"value": ...}`
#[derive(Debug, Clone, Deserialize)]
pub struct W3cEnvelope {
    pub value: Value,
}

/// W3C error payload carried inside the envelope's `value`
#[derive(Debug, Clone, Deserialize)]
pub struct W3cErrorValue {
    /// Error-code string, e.g. "no such element"
    pub error: String,
    /// Human-readable message
    pub message: String,
    /// Optional remote stacktrace
    #[serde(default)]
    pub stacktrace: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_envelope_deserialization() {
        let envelope: LegacyEnvelope =
            serde_json::from_str(r#"{"sessionId":"abc","status":0,"value":{"browserName":"chrome"}}"#)
                .unwrap();

        assert_eq!(envelope.session_id.as_deref(), Some("abc"));
        assert_eq!(envelope.status, 0);
        assert_eq!(envelope.value["browserName"], "chrome");
    }

    #[test]
    fn test_legacy_envelope_requires_status() {
        let result = serde_json::from_str::<LegacyEnvelope>(r#"{"value":{}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_w3c_error_value_deserialization() {
        let err: W3cErrorValue = serde_json::from_str(
            r#"{"error":"no such element","message":"not found","stacktrace":""}"#,
        )
        .unwrap();

        assert_eq!(err.error, "no such element");
        assert_eq!(err.message, "not found");
    }
}
