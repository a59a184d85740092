//! # Wire protocol layer
//!
//! Everything that touches the two remote-end dialects lives here: the
//! capability model and its serializations, structural dialect detection,
//! the static command catalog, and the per-command request/response
//! translation with its error-code remapping.
//!
//! ## Module structure
//! - `traits`: the injected HTTP transport interface
//! - `types`: request/response carriers and serde envelope types
//! - `capabilities`: capability sets in both serializations
//! - `dialect`: dialect enum and new-session response classification
//! - `catalog`: static per-dialect command table
//! - `translator`: command translation and response decoding
//! - `errors`: fixed legacy-status and W3C error-string tables
//! - `transport`: reqwest-backed transport implementation
//! - `mock`: recording transport double for tests

pub mod traits;
pub mod types;
pub mod capabilities;
pub mod dialect;
pub mod catalog;
pub mod translator;
pub mod errors;
pub mod transport;
pub mod mock;

pub use traits::WireTransport;
pub use types::{HttpMethod, WireRequest, WireResponse};
pub use capabilities::CapabilitySet;
pub use dialect::{detect_new_session, Detection, Dialect};
pub use catalog::{BodyParam, Command, CommandSpec, Endpoint};
pub use translator::{
    decode, decode_screenshot, translate, Params, LEGACY_ELEMENT_KEY, W3C_ELEMENT_KEY,
};

// Re-export implementation structs
pub use transport::HttpTransport;

// Re-export mock for development/testing
pub use mock::MockTransport;
