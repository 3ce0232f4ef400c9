//! Injected-wallet strategy (Web tenant).
//!
//! Standard browser-extension flow: the provider is injected into the page
//! and may simply be absent, which is a connect-time error rather than a
//! startup error.

use std::sync::Arc;

use alloy::primitives::Address;
use async_trait::async_trait;

use crate::auth::bridge::{BridgeSession, WalletBridge};
use crate::auth::strategy::{AuthStrategy, SessionCell};
use crate::auth::types::{AuthError, AuthResult};
use crate::chains::ChainRegistry;
use crate::config::schema::InjectedConfig;
use crate::tenant::Tenant;

pub struct InjectedStrategy {
    registry: Arc<ChainRegistry>,
    config: InjectedConfig,
    bridge: Arc<dyn WalletBridge>,
    session: SessionCell,
}

impl InjectedStrategy {
    pub fn new(
        registry: Arc<ChainRegistry>,
        config: InjectedConfig,
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
impl AuthStrategy for InjectedStrategy {
    fn tenant(&self) -> Tenant {
        Tenant::Web
    }

    async fn connect(&self) -> AuthResult<()> {
        if !self.bridge.is_available() {
            return Err(AuthError::ProviderUnavailable(format!(
                "no injected provider '{}'",
                self.config.provider_name
            )));
        }

        let session = self.bridge.request_session().await?;

        if !self.registry.contains(session.chain_id) {
            // Flagged downstream as wrong-network, not an error here
            tracing::warn!(
                chain_id = %session.chain_id,
                "Injected provider is on an unsupported chain"
            );
        }

        tracing::info!(
            address = %session.address,
            chain_id = %session.chain_id,
            provider = %self.config.provider_name,
            "Injected wallet session established"
        );
        self.session.store(session).await;
        Ok(())
    }

    async fn disconnect(&self) {
        let Some(session) = self.session.take().await else {
            return;
        };
        if let Err(e) = self.bridge.close_session().await {
            tracing::warn!(error = %e, "Injected provider teardown failed");
        }
        tracing::info!(address = %session.address, "Injected wallet session closed");
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
