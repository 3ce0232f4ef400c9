//! Auth strategy context.
//!
//! # Responsibilities
//! - Resolve the tenant once per session and hold exactly one strategy
//! - Forward connect/disconnect/is_authenticated/address to it
//! - Publish account-state transitions for observers
//!
//! # Design Decisions
//! - No re-resolution path: a tenant change requires a new context (a new
//!   session); strategies are not hot-swappable mid-session
//! - Session transitions are serialized, so a disconnect's effects are
//!   observable before a later connect's effects
//! - State is pushed over a watch channel; observers recompute, no polling

use std::sync::Arc;

use alloy::primitives::Address;
use tokio::sync::{watch, Mutex};

use crate::account::state::AccountState;
use crate::auth::bridge::BridgeSession;
use crate::auth::strategy::{strategy_for, AuthStrategy, BridgeSet};
use crate::auth::types::AuthResult;
use crate::chains::ChainRegistry;
use crate::config::schema::TenantsConfig;
use crate::tenant::{self, Tenant};

/// Per-session authentication context.
///
/// Holds the one active strategy for the session. Callers never see which
/// tenant is behind it.
pub struct AuthContext {
    tenant: Tenant,
    strategy: Box<dyn AuthStrategy>,
    /// Serializes session transitions (connect/reconnect/disconnect).
    transitions: Mutex<()>,
    account_tx: watch::Sender<AccountState>,
}

impl AuthContext {
    /// Bootstrap the context from the inbound host.
    ///
    /// Resolves the tenant exactly once and constructs its strategy; the
    /// choice is fixed for the lifetime of the context.
    pub fn bootstrap(
        host: Option<&str>,
        registry: Arc<ChainRegistry>,
        config: &TenantsConfig,
        bridges: &BridgeSet,
    ) -> Self {
        let resolved = tenant::resolve(host);
        tracing::info!(host = host.unwrap_or("<none>"), tenant = %resolved, "Auth strategy selected");

        let strategy = strategy_for(resolved, registry, config, bridges);
        let (account_tx, _) = watch::channel(AccountState::disconnected());

        Self {
            tenant: resolved,
            strategy,
            transitions: Mutex::new(()),
            account_tx,
        }
    }

    /// The tenant resolved for this session.
    pub fn tenant(&self) -> Tenant {
        self.tenant
    }

    /// Establish a session with the active strategy's backend.
    ///
    /// A no-op when already authenticated. On failure the published state
    /// returns to disconnected, as if the attempt never happened.
    pub async fn connect(&self) -> AuthResult<()> {
        let _guard = self.transitions.lock().await;

        if self.strategy.is_authenticated().await {
            return Ok(());
        }

        self.account_tx.send_replace(AccountState::connecting());
        match self.strategy.connect().await {
            Ok(()) => {
                self.publish_connected().await;
                Ok(())
            }
            Err(e) => {
                self.account_tx.send_replace(AccountState::disconnected());
                Err(e)
            }
        }
    }

    /// Re-establish a session with the already-active strategy.
    ///
    /// Publishes a reconnecting status while the provider round-trip is in
    /// flight. On failure the previous session, if still held, stays
    /// authoritative.
    pub async fn reconnect(&self) -> AuthResult<()> {
        let _guard = self.transitions.lock().await;

        let previous = self.strategy.address().await;
        self.account_tx
            .send_replace(AccountState::reconnecting(previous));

        match self.strategy.connect().await {
            Ok(()) => {
                self.publish_connected().await;
                Ok(())
            }
            Err(e) => {
                if self.strategy.is_authenticated().await {
                    self.publish_connected().await;
                } else {
                    self.account_tx.send_replace(AccountState::disconnected());
                }
                Err(e)
            }
        }
    }

    /// Tear down the session. Idempotent.
    pub async fn disconnect(&self) {
        let _guard = self.transitions.lock().await;
        self.strategy.disconnect().await;
        self.account_tx.send_replace(AccountState::disconnected());
    }

    /// True iff a session is currently established.
    pub async fn is_authenticated(&self) -> bool {
        self.strategy.is_authenticated().await
    }

    /// The connected account, if any.
    pub async fn address(&self) -> Option<Address> {
        self.strategy.address().await
    }

    /// The active session payload, if any.
    pub async fn session(&self) -> Option<BridgeSession> {
        self.strategy.session().await
    }

    /// Current account-state snapshot.
    pub fn account_state(&self) -> AccountState {
        self.account_tx.borrow().clone()
    }

    /// Subscribe to account-state transitions.
    pub fn subscribe(&self) -> watch::Receiver<AccountState> {
        self.account_tx.subscribe()
    }

    async fn publish_connected(&self) {
        match self.strategy.address().await {
            Some(address) => {
                self.account_tx.send_replace(AccountState::connected(address));
            }
            None => {
                self.account_tx.send_replace(AccountState::disconnected());
            }
        }
    }
}
