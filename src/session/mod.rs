//! # Session layer
//!
//! Session negotiation and command dispatch over the wire layer. A
//! [`SessionBridge`] owns exactly one remote session: it probes the remote
//! end's dialect once, at creation, and every later command is translated
//! under that fixed dialect.
//!
//! ## Module structure
//! - `handshake`: dual-dialect creation request and response classification
//! - `bridge`: the session state machine and command entry point

pub mod handshake;
pub mod bridge;


pub use handshake::HandshakeOutcome;
pub use bridge::{BridgeState, Session, SessionBridge};
