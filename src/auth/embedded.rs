//! Embedded-wallet strategy (Beexo tenant).
//!
//! Mini-app flow: the wallet lives inside the host application and talks to
//! us over a bridge handshake. Sessions established this way are always
//! flagged embedded, whatever the bridge reports.

use std::sync::Arc;
use std::time::Duration;

use alloy::primitives::Address;
use async_trait::async_trait;
use tokio::time::timeout;

use crate::auth::bridge::{BridgeSession, WalletBridge};
use crate::auth::strategy::{AuthStrategy, SessionCell};
use crate::auth::types::{AuthError, AuthResult};
use crate::chains::ChainRegistry;
use crate::config::schema::EmbeddedConfig;
use crate::tenant::Tenant;

pub struct EmbeddedStrategy {
    registry: Arc<ChainRegistry>,
    config: EmbeddedConfig,
    bridge: Arc<dyn WalletBridge>,
    session: SessionCell,
}

impl EmbeddedStrategy {
    pub fn new(
        registry: Arc<ChainRegistry>,
        config: EmbeddedConfig,
        bridge: Arc<dyn WalletBridge>,
    ) -> Self {
        Self {
            registry,
            config,
            bridge,
            session: SessionCell::new(),
        }
    }
}

#[async_trait]
impl AuthStrategy for EmbeddedStrategy {
    fn tenant(&self) -> Tenant {
        Tenant::Beexo
    }

    async fn connect(&self) -> AuthResult<()> {
        let handshake = Duration::from_secs(self.config.handshake_timeout_secs);
        let mut session = match timeout(handshake, self.bridge.request_session()).await {
            Ok(result) => result?,
            Err(_) => {
                return Err(AuthError::HandshakeTimeout(
                    self.config.handshake_timeout_secs,
                ))
            }
        };

        // Mini-app sessions are embedded by definition
        session.embedded = true;

        if !self.registry.contains(session.chain_id) {
            tracing::warn!(
                chain_id = %session.chain_id,
                host_app = %self.config.host_app,
                "Embedded wallet is on an unsupported chain"
            );
        }

        tracing::info!(
            address = %session.address,
            chain_id = %session.chain_id,
            host_app = %self.config.host_app,
            "Embedded wallet session established"
        );
        self.session.store(session).await;
        Ok(())
    }

    async fn disconnect(&self) {
        let Some(session) = self.session.take().await else {
            return;
        };
        if let Err(e) = self.bridge.close_session().await {
            tracing::warn!(error = %e, host_app = %self.config.host_app, "Bridge teardown failed");
        }
        tracing::info!(address = %session.address, "Embedded wallet session closed");
    }

    async fn is_authenticated(&self) -> bool {
        self.session.is_established().await
    }

    async fn address(&self) -> Option<Address> {
        self.session.address().await
    }

    async fn session(&self) -> Option<BridgeSession> {
        self.session.get().await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use super::*;
    use crate::auth::bridge::testing::StaticBridge;
    use crate::chains::ChainId;
    use crate::config::schema::WalletConfig;

    fn strategy_with(bridge: Arc<StaticBridge>) -> EmbeddedStrategy {
        let config = WalletConfig::default();
        let registry = Arc::new(ChainRegistry::from_config(&config).unwrap());
        EmbeddedStrategy::new(registry, config.tenants.embedded, bridge)
    }

    #[tokio::test]
    async fn test_sessions_are_flagged_embedded() {
        let bridge = Arc::new(StaticBridge::new(ChainId(100)));
        let strategy = strategy_with(bridge);

        strategy.connect().await.unwrap();
        let session = strategy.session().await.unwrap();
        assert!(session.embedded);
    }

    #[tokio::test]
    async fn test_rejected_handshake_propagates() {
        let bridge = Arc::new(StaticBridge::new(ChainId(100)));
        bridge.reject_connect.store(true, Ordering::SeqCst);
        let strategy = strategy_with(bridge);

        let err = strategy.connect().await.unwrap_err();
        assert!(matches!(err, AuthError::ConnectRejected(_)));
        assert!(!strategy.is_authenticated().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stalled_handshake_times_out() {
        // Gate never opens: the bridge suspends forever and the paused
        // clock advances straight to the timeout
        let gate = Arc::new(tokio::sync::Notify::new());
        let bridge = Arc::new(StaticBridge::gated(ChainId(100), gate));
        let strategy = strategy_with(bridge.clone());

        let err = strategy.connect().await.unwrap_err();
        assert!(matches!(err, AuthError::HandshakeTimeout(30)));
        assert!(!strategy.is_authenticated().await);
        assert_eq!(strategy.address().await, None);
    }

    #[tokio::test]
    async fn test_disconnect_when_never_connected() {
        let bridge = Arc::new(StaticBridge::new(ChainId(100)));
        let strategy = strategy_with(bridge.clone());

        strategy.disconnect().await;
        assert!(!strategy.is_authenticated().await);
        assert_eq!(bridge.close_calls.load(Ordering::SeqCst), 0);
    }
}
