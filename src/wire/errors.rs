//! Fixed error-mapping tables
//!
//! Two read-only tables remap remote failures onto the crate's error kinds:
//! the legacy dialect reports a numeric status code, the W3C dialect an
//! error-code string. The legacy table resolves to the equivalent W3C
//! string first so both dialects share one string-to-kind mapping. Both
//! mappings are total: anything unrecognized becomes `UnknownRemote`,
//! never a panic and never a silent coercion.

use crate::Error;

/// Legacy numeric status -> W3C error-code string
static LEGACY_STATUS: phf::Map<u16, &'static str> = phf::phf_map! {
    6u16 => "invalid session id",
    7u16 => "no such element",
    8u16 => "no such frame",
    9u16 => "unknown command",
    10u16 => "stale element reference",
    11u16 => "element not interactable",
    12u16 => "invalid element state",
    13u16 => "unknown error",
    15u16 => "element not selectable",
    17u16 => "javascript error",
    19u16 => "invalid selector",
    21u16 => "timeout",
    23u16 => "no such window",
    24u16 => "invalid cookie domain",
    25u16 => "unable to set cookie",
    26u16 => "unexpected alert open",
    27u16 => "no such alert",
    28u16 => "script timeout",
    29u16 => "invalid argument",
    32u16 => "invalid selector",
    33u16 => "session not created",
    34u16 => "move target out of bounds",
};

/// Map a W3C error-code string to the matching error kind
pub fn error_for_w3c_code(code: &str, message: &str) -> Error {
    let message = message.to_string();
    match code {
        "element click intercepted" => Error::ElementClickIntercepted(message),
        "element not interactable" => Error::ElementNotInteractable(message),
        "element not selectable" => Error::InvalidElementState(message),
        "insecure certificate" => Error::InsecureCertificate(message),
        "invalid argument" => Error::InvalidArgument(message),
        "invalid cookie domain" => Error::InvalidCookieDomain(message),
        "invalid element state" => Error::InvalidElementState(message),
        "invalid selector" => Error::InvalidSelector(message),
        "invalid session id" => Error::InvalidSessionId(message),
        "javascript error" => Error::JavascriptError(message),
        "move target out of bounds" => Error::MoveTargetOutOfBounds(message),
        "no such alert" => Error::NoSuchAlert(message),
        "no such cookie" => Error::NoSuchCookie(message),
        "no such element" => Error::NoSuchElement(message),
        "no such frame" => Error::NoSuchFrame(message),
        "no such window" => Error::NoSuchWindow(message),
        "script timeout" => Error::ScriptTimeout(message),
        "session not created" => Error::SessionNotCreated(message),
        "stale element reference" => Error::StaleElementReference(message),
        "timeout" => Error::Timeout(message),
        "unable to set cookie" => Error::UnableToSetCookie(message),
        "unexpected alert open" => Error::UnexpectedAlertOpen(message),
        "unknown command" | "unknown method" => Error::UnknownCommand(message),
        _ => Error::UnknownRemote {
            code: code.to_string(),
            message,
        },
    }
}

/// Map a legacy numeric status to the matching error kind
pub fn error_for_legacy_status(status: i64, message: &str) -> Error {
    let code = u16::try_from(status)
        .ok()
        .and_then(|status| LEGACY_STATUS.get(&status).copied());

    match code {
        Some(code) => error_for_w3c_code(code, message),
        None => Error::UnknownRemote {
            code: status.to_string(),
            message: message.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_status_mapping() {
        assert!(matches!(
            error_for_legacy_status(7, "not found"),
            Error::NoSuchElement(_)
        ));
        assert!(matches!(
            error_for_legacy_status(10, "gone"),
            Error::StaleElementReference(_)
        ));
        assert!(matches!(
            error_for_legacy_status(21, "slow"),
            Error::Timeout(_)
        ));
        assert!(matches!(
            error_for_legacy_status(6, "dead"),
            Error::InvalidSessionId(_)
        ));
    }

    #[test]
    fn test_unmapped_legacy_status_is_unknown_remote() {
        let err = error_for_legacy_status(999, "boom");
        match err {
            Error::UnknownRemote { code, message } => {
                assert_eq!(code, "999");
                assert_eq!(message, "boom");
            }
            other => panic!("expected UnknownRemote, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_legacy_status_is_unknown_remote() {
        assert!(matches!(
            error_for_legacy_status(-1, "?"),
            Error::UnknownRemote { .. }
        ));
    }

    #[test]
    fn test_w3c_code_mapping() {
        assert!(matches!(
            error_for_w3c_code("no such element", "x"),
            Error::NoSuchElement(_)
        ));
        assert!(matches!(
            error_for_w3c_code("unknown method", "x"),
            Error::UnknownCommand(_)
        ));
        assert!(matches!(
            error_for_w3c_code("unexpected alert open", "x"),
            Error::UnexpectedAlertOpen(_)
        ));
    }

    #[test]
    fn test_unmapped_w3c_code_is_unknown_remote() {
        let err = error_for_w3c_code("made-up-error", "nope");
        match err {
            Error::UnknownRemote { code, message } => {
                assert_eq!(code, "made-up-error");
                assert_eq!(message, "nope");
            }
            other => panic!("expected UnknownRemote, got {:?}", other),
        }
    }

    #[test]
    fn test_legacy_unknown_error_code_keeps_its_name() {
        // status 13 is a defined legacy code but has no dedicated kind;
        // it must surface with its wire name, not vanish
        match error_for_legacy_status(13, "driver exploded") {
            Error::UnknownRemote { code, .. } => assert_eq!(code, "unknown error"),
            other => panic!("expected UnknownRemote, got {:?}", other),
        }
    }
}
