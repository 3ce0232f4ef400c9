//! Strategy contract and tenant dispatch.
//!
//! # Responsibilities
//! - Define the strategy-independent authentication contract
//! - Map a resolved tenant to its one strategy implementation
//!
//! # Design Decisions
//! - Dispatch is a match on the tenant enum, not a class hierarchy
//! - Callers never learn which tenant is behind the trait object

use std::sync::Arc;

use alloy::primitives::Address;
use async_trait::async_trait;

use crate::auth::bridge::{BridgeSession, WalletBridge};
use crate::auth::custody::CustodyStrategy;
use crate::auth::embedded::EmbeddedStrategy;
use crate::auth::injected::InjectedStrategy;
use crate::auth::types::AuthResult;
use crate::chains::ChainRegistry;
use crate::config::schema::TenantsConfig;
use crate::tenant::Tenant;

/// Strategy-independent authentication contract.
///
/// Every tenant produces a value conforming to this shape; the concrete
/// backend differs but the shape is invariant.
#[async_trait]
pub trait AuthStrategy: Send + Sync {
    /// The tenant this strategy serves.
    fn tenant(&self) -> Tenant;

    /// Request the underlying provider to establish a session.
    ///
    /// A failed connect leaves state as if never attempted; there is no
    /// partial session.
    async fn connect(&self) -> AuthResult<()>;

    /// Tear down the session. Safe to call when already disconnected.
    async fn disconnect(&self);

    /// True iff a session is currently established.
    async fn is_authenticated(&self) -> bool;

    /// The connected account, if any.
    async fn address(&self) -> Option<Address>;

    /// The full session payload, if any.
    async fn session(&self) -> Option<BridgeSession>;
}

/// Session storage shared by the strategy implementations.
///
/// Holds at most one established session; overwritten only on a successful
/// connect, so a failed attempt never leaves a partial session behind.
pub(crate) struct SessionCell {
    inner: tokio::sync::RwLock<Option<BridgeSession>>,
}

impl SessionCell {
    pub(crate) fn new() -> Self {
        Self {
            inner: tokio::sync::RwLock::new(None),
        }
    }

    pub(crate) async fn store(&self, session: BridgeSession) {
        *self.inner.write().await = Some(session);
    }

    pub(crate) async fn take(&self) -> Option<BridgeSession> {
        self.inner.write().await.take()
    }

    pub(crate) async fn get(&self) -> Option<BridgeSession> {
        self.inner.read().await.clone()
    }

    pub(crate) async fn address(&self) -> Option<Address> {
        self.inner.read().await.as_ref().map(|s| s.address)
    }

    pub(crate) async fn is_established(&self) -> bool {
        self.inner.read().await.is_some()
    }
}

/// The host-supplied connection capabilities, one per wallet backend.
///
/// All three are registered up front; exactly one is selected when the
/// tenant is resolved.
#[derive(Clone)]
pub struct BridgeSet {
    pub injected: Arc<dyn WalletBridge>,
    pub embedded: Arc<dyn WalletBridge>,
    pub custody: Arc<dyn WalletBridge>,
}

impl BridgeSet {
    fn for_tenant(&self, tenant: Tenant) -> Arc<dyn WalletBridge> {
        match tenant {
            Tenant::Web => self.injected.clone(),
            Tenant::Beexo => self.embedded.clone(),
            Tenant::Privy => self.custody.clone(),
        }
    }
}

/// Construct the one strategy implementation for a tenant.
pub fn strategy_for(
    tenant: Tenant,
    registry: Arc<ChainRegistry>,
    config: &TenantsConfig,
    bridges: &BridgeSet,
) -> Box<dyn AuthStrategy> {
    let bridge = bridges.for_tenant(tenant);
    match tenant {
        Tenant::Web => Box::new(InjectedStrategy::new(
            registry,
            config.injected.clone(),
            bridge,
        )),
        Tenant::Beexo => Box::new(EmbeddedStrategy::new(
            registry,
            config.embedded.clone(),
            bridge,
        )),
        Tenant::Privy => Box::new(CustodyStrategy::new(
            registry,
            config.custody.clone(),
            bridge,
        )),
    }
}
