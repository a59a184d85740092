//! Session bridge
//!
//! The single entry point consumers use: it negotiates the session (and
//! with it the dialect), then routes every abstract command through the
//! translator. One bridge instance binds to exactly one remote session.
//!
//! Commands are serialized through an internal async mutex held across the
//! transport await: a call issued while another is in flight waits for it
//! (blocking policy). The remote protocol is single-threaded per session,
//! so overlapping commands would be rejected or misordered by the remote
//! end anyway.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::handshake;
use crate::config::Config;
use crate::wire::catalog::Command;
use crate::wire::dialect::Dialect;
use crate::wire::translator::{self, Params};
use crate::wire::{CapabilitySet, HttpTransport, WireTransport};
use crate::{Error, Result};

/// Lifecycle state of a bridge instance
///
/// `Closed` and `Failed` are terminal; `Failed` is reachable from
/// `Negotiating` only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeState {
    Uninitialized,
    Negotiating,
    Active,
    Closed,
    Failed,
}

/// An established session: id, dialect, and the granted capabilities.
/// The dialect is set exactly once, at negotiation, and never changes.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: String,
    pub dialect: Dialect,
    pub capabilities: CapabilitySet,
}

#[derive(Debug)]
struct Inner {
    state: BridgeState,
    session: Option<Session>,
}

/// Protocol bridge bound to one remote session
#[derive(Debug)]
pub struct SessionBridge {
    transport: Arc<dyn WireTransport>,
    base_url: String,
    inner: Mutex<Inner>,
}

impl SessionBridge {
    /// Create a bridge over an injected transport
    pub fn new(transport: Arc<dyn WireTransport>, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            inner: Mutex::new(Inner {
                state: BridgeState::Uninitialized,
                session: None,
            }),
        }
    }

    /// Create a bridge with the reqwest transport, per configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let transport = HttpTransport::from_config(config)?;
        Ok(Self::new(Arc::new(transport), config.remote_url.clone()))
    }

    /// Current lifecycle state
    pub async fn state(&self) -> BridgeState {
        self.inner.lock().await.state
    }

    /// Negotiate a session with the remote end.
    ///
    /// One-shot: any failure (transport, detection, malformed body) moves
    /// the instance to `Failed` permanently and no retry is attempted, since
    /// re-probing the same ambiguous request can create duplicate sessions
    /// on some remote ends. Discard the instance and build a new one.
    pub async fn create_session(&self, desired: CapabilitySet) -> Result<()> {
        let mut inner = self.inner.lock().await;

        if inner.state != BridgeState::Uninitialized {
            return Err(Error::invalid_state(format!(
                "create_session requires an uninitialized bridge (state: {:?})",
                inner.state
            )));
        }
        inner.state = BridgeState::Negotiating;

        info!(base_url = %self.base_url, "negotiating session");

        let outcome = async {
            let request = handshake::build_request(&self.base_url, &desired)?;
            let response = self.transport.send(request).await?;
            handshake::process_response(response.status, &response.body)
        }
        .await;

        match outcome {
            Ok(outcome) => {
                inner.session = Some(Session {
                    id: outcome.session_id,
                    dialect: outcome.dialect,
                    capabilities: outcome.capabilities,
                });
                inner.state = BridgeState::Active;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "session negotiation failed");
                inner.state = BridgeState::Failed;
                Err(e)
            }
        }
    }

    /// Execute an abstract command against the active session
    pub async fn execute(&self, command: Command, params: Params) -> Result<Value> {
        let inner = self.inner.lock().await;

        let (session_id, dialect) = match (&inner.state, &inner.session) {
            (BridgeState::Active, Some(session)) => (session.id.clone(), session.dialect),
            (state, _) => {
                return Err(Error::invalid_state(format!(
                    "execute requires an active session (state: {:?})",
                    state
                )))
            }
        };

        debug!(%command, %dialect, %session_id, "executing command");

        let request =
            translator::translate(dialect, command, &self.base_url, Some(&session_id), &params)?;
        let response = self.transport.send(request).await?;
        translator::decode(dialect, command, response.status, &response.body)
    }

    /// End the session: best-effort.
    ///
    /// The deletion command's outcome is returned, but local state moves to
    /// `Closed` regardless, and calling this again (in any state other than
    /// `Active`) is a no-op `Ok`.
    pub async fn end_session(&self) -> Result<()> {
        let mut inner = self.inner.lock().await;

        match inner.state {
            BridgeState::Active => {}
            // an unused bridge closes without I/O; Closed and Failed are
            // already terminal
            BridgeState::Uninitialized => {
                inner.state = BridgeState::Closed;
                return Ok(());
            }
            _ => return Ok(()),
        }

        let Some((session_id, dialect)) = inner.session.as_ref().map(|s| (s.id.clone(), s.dialect))
        else {
            inner.state = BridgeState::Closed;
            return Ok(());
        };

        info!(%session_id, "ending session");

        let outcome = async {
            let request = translator::translate(
                dialect,
                Command::DeleteSession,
                &self.base_url,
                Some(&session_id),
                &Params::new(),
            )?;
            let response = self.transport.send(request).await?;
            translator::decode(dialect, Command::DeleteSession, response.status, &response.body)
        }
        .await;

        inner.session = None;
        inner.state = BridgeState::Closed;

        match outcome {
            Ok(_) => Ok(()),
            Err(e) => {
                warn!(error = %e, "session deletion failed; local state discarded anyway");
                Err(e)
            }
        }
    }

    /// Read-only snapshot of the granted capabilities
    pub async fn capabilities(&self) -> Result<CapabilitySet> {
        self.with_session(|session| session.capabilities.clone())
            .await
    }

    /// Dialect the remote end was detected to speak
    pub async fn dialect(&self) -> Result<Dialect> {
        self.with_session(|session| session.dialect).await
    }

    /// Session id assigned by the remote end
    pub async fn session_id(&self) -> Result<String> {
        self.with_session(|session| session.id.clone()).await
    }

    /// Whether the remote end answered in the W3C dialect
    pub async fn is_spec_compliant(&self) -> Result<bool> {
        self.with_session(|session| session.capabilities.is_spec_compliant())
            .await
    }

    /// Take a screenshot and decode its base64 payload
    pub async fn screenshot(&self) -> Result<Vec<u8>> {
        let value = self.execute(Command::TakeScreenshot, Params::new()).await?;
        translator::decode_screenshot(&value)
    }

    async fn with_session<T>(&self, read: impl FnOnce(&Session) -> T) -> Result<T> {
        let inner = self.inner.lock().await;
        match (&inner.state, &inner.session) {
            (BridgeState::Active, Some(session)) => Ok(read(session)),
            (state, _) => Err(Error::invalid_state(format!(
                "no active session (state: {:?})",
                state
            ))),
        }
    }
}
