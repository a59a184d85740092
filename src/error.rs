//! Unified error types for Wirebridge
//!
//! One variant per abstract error kind. The wire layer maps both dialects'
//! failure payloads (legacy numeric status codes, W3C error-code strings)
//! onto these variants, so callers never see dialect-specific errors.

use thiserror::Error;

/// Unified Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for Wirebridge
#[derive(Error, Debug)]
pub enum Error {
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// HTTP transport failure, surfaced unchanged from the collaborator
    #[error("Transport error: {0}")]
    Transport(String),

    /// Command issued while the bridge is not in a state that allows it
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Another command is already in flight on this bridge instance
    #[error("Session busy: {0}")]
    SessionBusy(String),

    /// Session-creation response matched neither documented dialect shape
    #[error("Protocol detection failed: {0}")]
    ProtocolDetection(String),

    /// Response body was not valid JSON or lacked required fields
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// alwaysMatch and a firstMatch alternative disagree on a key
    #[error("Capability conflict: {0}")]
    CapabilityConflict(String),

    /// A required path or body parameter was not supplied
    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    /// Remote end no longer knows this session
    #[error("Invalid session id: {0}")]
    InvalidSessionId(String),

    /// No element matched the given locator
    #[error("No such element: {0}")]
    NoSuchElement(String),

    /// Frame target does not exist
    #[error("No such frame: {0}")]
    NoSuchFrame(String),

    /// Window target does not exist
    #[error("No such window: {0}")]
    NoSuchWindow(String),

    /// No user prompt is currently open
    #[error("No such alert: {0}")]
    NoSuchAlert(String),

    /// Named cookie not found
    #[error("No such cookie: {0}")]
    NoSuchCookie(String),

    /// Element reference is no longer attached to the document
    #[error("Stale element reference: {0}")]
    StaleElementReference(String),

    /// Element cannot be interacted with
    #[error("Element not interactable: {0}")]
    ElementNotInteractable(String),

    /// Another element would receive the click
    #[error("Element click intercepted: {0}")]
    ElementClickIntercepted(String),

    /// Element is in a state that forbids the requested action
    #[error("Invalid element state: {0}")]
    InvalidElementState(String),

    /// Locator strategy or expression is invalid
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    /// Remote end rejected an argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Cookie domain does not match the current document
    #[error("Invalid cookie domain: {0}")]
    InvalidCookieDomain(String),

    /// Cookie could not be set
    #[error("Unable to set cookie: {0}")]
    UnableToSetCookie(String),

    /// Injected script threw
    #[error("JavaScript error: {0}")]
    JavascriptError(String),

    /// Injected script did not complete in time
    #[error("Script timeout: {0}")]
    ScriptTimeout(String),

    /// Operation timed out
    #[error("Operation timeout: {0}")]
    Timeout(String),

    /// A user prompt blocked the command
    #[error("Unexpected alert open: {0}")]
    UnexpectedAlertOpen(String),

    /// Pointer target lies outside the viewport
    #[error("Move target out of bounds: {0}")]
    MoveTargetOutOfBounds(String),

    /// Remote end could not create a session
    #[error("Session not created: {0}")]
    SessionNotCreated(String),

    /// TLS certificate was rejected
    #[error("Insecure certificate: {0}")]
    InsecureCertificate(String),

    /// Remote end does not implement the command
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Catch-all for unmapped legacy status codes and W3C error strings
    #[error("Unknown remote error [{code}]: {message}")]
    UnknownRemote { code: String, message: String },
}

impl Error {
    /// Create a new transport error
    pub fn transport<S: Into<String>>(msg: S) -> Self {
        Error::Transport(msg.into())
    }

    /// Create a new invalid state error
    pub fn invalid_state<S: Into<String>>(msg: S) -> Self {
        Error::InvalidState(msg.into())
    }

    /// Create a new protocol detection error
    pub fn protocol_detection<S: Into<String>>(msg: S) -> Self {
        Error::ProtocolDetection(msg.into())
    }

    /// Create a new malformed response error
    pub fn malformed<S: Into<String>>(msg: S) -> Self {
        Error::MalformedResponse(msg.into())
    }

    /// Create a new capability conflict error
    pub fn capability_conflict<S: Into<String>>(msg: S) -> Self {
        Error::CapabilityConflict(msg.into())
    }

    /// Create a new missing parameter error
    pub fn missing_parameter<S: Into<String>>(name: S) -> Self {
        Error::MissingParameter(name.into())
    }

    /// Create a new unknown command error
    pub fn unknown_command<S: Into<String>>(msg: S) -> Self {
        Error::UnknownCommand(msg.into())
    }

    /// Create a new configuration error
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        Error::Configuration(msg.into())
    }

    /// True for errors reported by the remote end (as opposed to errors
    /// raised locally before or after the HTTP round trip).
    pub fn is_remote(&self) -> bool {
        !matches!(
            self,
            Error::Io(_)
                | Error::Serialization(_)
                | Error::Configuration(_)
                | Error::Transport(_)
                | Error::InvalidState(_)
                | Error::SessionBusy(_)
                | Error::ProtocolDetection(_)
                | Error::MalformedResponse(_)
                | Error::CapabilityConflict(_)
                | Error::MissingParameter(_)
        )
    }
}
