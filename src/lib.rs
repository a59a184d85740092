//! Wirebridge: WebDriver protocol bridge client
//!
//! Speaks to a remote browser-automation endpoint over HTTP in whichever of
//! the two incompatible dialects it implements (the legacy JSON wire
//! protocol or the W3C WebDriver protocol), detecting the dialect at
//! session creation and translating every command, response and capability
//! payload so one client API works against either kind of remote end.

pub mod error;
pub mod config;

pub mod wire;
pub mod session;

// Re-exports
pub use config::Config;
pub use error::{Error, Result};
pub use session::{BridgeState, SessionBridge};
pub use wire::{CapabilitySet, Command, Dialect};

/// Wirebridge library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
