//! Per-command translation between the abstract API and the wire dialects
//!
//! `translate` turns an abstract command plus parameters into the literal
//! HTTP request for the session's dialect; `decode` turns the literal HTTP
//! response back into a dialect-neutral payload, remapping error codes
//! through the fixed tables in [`super::errors`]. Neither function performs
//! I/O, and neither ever retries: remote automation commands are frequently
//! non-idempotent, so retry policy belongs to the caller.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde_json::{json, Map, Value};
use tracing::{debug, trace};

use super::catalog::{Command, Endpoint};
use super::dialect::Dialect;
use super::errors::{error_for_legacy_status, error_for_w3c_code};
use super::types::{HttpMethod, LegacyEnvelope, W3cEnvelope, W3cErrorValue, WireRequest};
use crate::{Error, Result};

/// Abstract command parameters, keyed by their dialect-neutral names
pub type Params = Map<String, Value>;

/// W3C element-reference key
pub const W3C_ELEMENT_KEY: &str = "element-6066-11e4-a52e-4f735466cecf";

/// Legacy element-reference key
pub const LEGACY_ELEMENT_KEY: &str = "ELEMENT";

/// Build the literal HTTP request for a command in the given dialect.
///
/// Fails with `UnknownCommand` when the dialect has no endpoint for the
/// command, and with `MissingParameter` when a required path or body
/// parameter is absent; both happen before any network call.
pub fn translate(
    dialect: Dialect,
    command: Command,
    base_url: &str,
    session_id: Option<&str>,
    params: &Params,
) -> Result<WireRequest> {
    let spec = command.spec();
    let endpoint = match dialect {
        Dialect::Legacy => spec.legacy,
        Dialect::W3C => spec.w3c,
    }
    .ok_or_else(|| {
        Error::unknown_command(format!("{} has no {} endpoint", command, dialect))
    })?;

    let (path, consumed) = substitute_path(endpoint.path, session_id, params)?;
    let url = format!("{}{}", base_url.trim_end_matches('/'), path);

    let body = match endpoint.method {
        HttpMethod::Get | HttpMethod::Delete => None,
        HttpMethod::Post => Some(build_body(dialect, command, endpoint, params, &consumed)?),
    };

    trace!(%command, %dialect, url, "translated command");

    Ok(WireRequest {
        method: endpoint.method,
        url,
        body,
    })
}

/// Substitute `{...}` segments of a URL template. Returns the concrete path
/// and the parameter names consumed by it.
fn substitute_path(
    template: &str,
    session_id: Option<&str>,
    params: &Params,
) -> Result<(String, Vec<String>)> {
    let mut path = String::with_capacity(template.len());
    let mut consumed = Vec::new();
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        let end = rest[start..]
            .find('}')
            .map(|offset| start + offset)
            .ok_or_else(|| Error::malformed(format!("unbalanced URL template '{}'", template)))?;

        path.push_str(&rest[..start]);
        let name = &rest[start + 1..end];

        if name == "sessionId" {
            let session_id =
                session_id.ok_or_else(|| Error::missing_parameter("sessionId"))?;
            path.push_str(session_id);
        } else {
            let value = params
                .get(name)
                .and_then(Value::as_str)
                .ok_or_else(|| Error::missing_parameter(name.to_string()))?;
            path.push_str(value);
            consumed.push(name.to_string());
        }

        rest = &rest[end + 1..];
    }
    path.push_str(rest);

    Ok((path, consumed))
}

/// Assemble the request body: catalog-listed parameters under their wire
/// names (required ones enforced), remaining parameters passed through
/// unchanged, then the per-command shape fixups.
fn build_body(
    dialect: Dialect,
    command: Command,
    endpoint: Endpoint,
    params: &Params,
    consumed_by_path: &[String],
) -> Result<Value> {
    let mut body = Map::new();

    for param in endpoint.body {
        match params.get(param.name) {
            Some(value) => {
                body.insert(param.wire.to_string(), value.clone());
            }
            None if param.required => {
                return Err(Error::missing_parameter(param.name));
            }
            None => {}
        }
    }

    for (key, value) in params {
        let listed = endpoint.body.iter().any(|p| p.name == key.as_str());
        if !listed && !consumed_by_path.contains(key) {
            body.entry(key.clone()).or_insert_with(|| value.clone());
        }
    }

    finish_body(dialect, command, &mut body)?;

    Ok(Value::Object(body))
}

/// Per-command body rewrites that go beyond parameter renaming
fn finish_body(dialect: Dialect, command: Command, body: &mut Map<String, Value>) -> Result<()> {
    match command {
        // legacy wants {"value": [text]}; w3c drivers get both spellings
        // for maximum compatibility
        Command::ElementSendKeys => {
            let text = body
                .get("text")
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or_else(|| Error::InvalidArgument("text must be a string".to_string()))?;

            body.insert("value".to_string(), json!([text]));
            if dialect == Dialect::Legacy {
                body.remove("text");
            }
        }

        // legacy carries exactly one timeout per request as {"type", "ms"}
        Command::SetTimeouts if dialect == Dialect::Legacy => {
            let present: Vec<(&str, Value)> = [
                ("implicit", "implicit"),
                ("pageLoad", "page load"),
                ("script", "script"),
            ]
            .iter()
            .filter_map(|&(name, wire)| body.get(name).map(|v| (wire, v.clone())))
            .collect();

            match present.as_slice() {
                [(kind, ms)] => {
                    let (kind, ms) = (*kind, ms.clone());
                    body.clear();
                    body.insert("type".to_string(), json!(kind));
                    body.insert("ms".to_string(), ms);
                }
                [] => {
                    return Err(Error::missing_parameter(
                        "one of implicit, pageLoad, script",
                    ))
                }
                _ => {
                    return Err(Error::InvalidArgument(
                        "legacy timeouts take one value per request".to_string(),
                    ))
                }
            }
        }

        Command::ExecuteScript | Command::ExecuteAsyncScript => {
            body.entry("args".to_string()).or_insert_with(|| json!([]));
        }

        _ => {}
    }

    Ok(())
}

/// Decode the literal HTTP response of a command into the dialect-neutral
/// payload, or the mapped error. A body that is not valid JSON, or that
/// lacks the fields the detected dialect requires, is `MalformedResponse`,
/// never coerced into a different kind.
pub fn decode(dialect: Dialect, command: Command, status: u16, body: &str) -> Result<Value> {
    debug!(%command, %dialect, status, "decoding response");

    match dialect {
        Dialect::Legacy => decode_legacy(status, body),
        Dialect::W3C => decode_w3c(status, body),
    }
}

fn decode_legacy(status: u16, body: &str) -> Result<Value> {
    let envelope: LegacyEnvelope = serde_json::from_str(body)
        .map_err(|e| Error::malformed(format!("legacy envelope: {}", e)))?;

    if envelope.status != 0 {
        let message = envelope
            .value
            .get("message")
            .and_then(Value::as_str)
            .or_else(|| envelope.value.as_str())
            .unwrap_or("no message provided");
        return Err(error_for_legacy_status(envelope.status, message));
    }

    if !(200..300).contains(&status) {
        return Err(Error::malformed(format!(
            "legacy remote returned HTTP {} with a success body",
            status
        )));
    }

    let mut value = envelope.value;
    promote_element_refs(&mut value);
    Ok(value)
}

fn decode_w3c(status: u16, body: &str) -> Result<Value> {
    let envelope: W3cEnvelope = serde_json::from_str(body)
        .map_err(|e| Error::malformed(format!("w3c envelope: {}", e)))?;

    if (200..300).contains(&status) {
        return Ok(envelope.value);
    }

    if status >= 400 {
        let error: W3cErrorValue = serde_json::from_value(envelope.value)
            .map_err(|e| Error::malformed(format!("w3c error value: {}", e)))?;
        return Err(error_for_w3c_code(&error.error, &error.message));
    }

    Err(Error::malformed(format!(
        "unexpected HTTP {} from w3c remote",
        status
    )))
}

/// Rewrite legacy element references (`{"ELEMENT": id}`) to the W3C form,
/// recursively, so callers see a single reference shape regardless of
/// dialect.
fn promote_element_refs(value: &mut Value) {
    match value {
        Value::Object(map) => {
            if let Some(id) = map.remove(LEGACY_ELEMENT_KEY) {
                map.insert(W3C_ELEMENT_KEY.to_string(), id);
            }
            for nested in map.values_mut() {
                promote_element_refs(nested);
            }
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                promote_element_refs(item);
            }
        }
        _ => {}
    }
}

/// Decode the base64 payload of a takeScreenshot command
pub fn decode_screenshot(value: &Value) -> Result<Vec<u8>> {
    let data = value
        .as_str()
        .ok_or_else(|| Error::malformed("screenshot payload is not a string"))?;

    BASE64
        .decode(data)
        .map_err(|e| Error::malformed(format!("failed to decode screenshot: {}", e)))
}
