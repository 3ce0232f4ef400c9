//! Managed-custody strategy (Privy tenant).
//!
//! The custody provider owns key material; we receive a managed session and
//! a remote signing handle. Users who sign in without a wallet get one
//! provisioned by the provider when `create_on_login` is set.

use std::sync::Arc;

use alloy::primitives::Address;
use async_trait::async_trait;

use crate::auth::bridge::{BridgeSession, WalletBridge};
use crate::auth::strategy::{AuthStrategy, SessionCell};
use crate::auth::types::{AuthError, AuthResult};
use crate::chains::ChainRegistry;
use crate::config::schema::CustodyConfig;
use crate::tenant::Tenant;

pub struct CustodyStrategy {
    registry: Arc<ChainRegistry>,
    config: CustodyConfig,
    bridge: Arc<dyn WalletBridge>,
    session: SessionCell,
}

impl CustodyStrategy {
    pub fn new(
        registry: Arc<ChainRegistry>,
        config: CustodyConfig,
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
impl AuthStrategy for CustodyStrategy {
    fn tenant(&self) -> Tenant {
        Tenant::Privy
    }

    async fn connect(&self) -> AuthResult<()> {
        let session = self.bridge.request_session().await?;

        // A custody login without a signing handle means the provider did
        // not provision a wallet for this user
        if session.wallet_client.is_none() {
            if self.config.create_on_login {
                tracing::info!(
                    address = %session.address,
                    app_id = %self.config.app_id,
                    "Custody session established without signer; wallet provisioning pending"
                );
            } else {
                return Err(AuthError::ConnectRejected(
                    "custody account has no wallet and provisioning is disabled".into(),
                ));
            }
        }

        if !self.registry.contains(session.chain_id) {
            tracing::warn!(
                chain_id = %session.chain_id,
                "Custody wallet is on an unsupported chain"
            );
        }

        tracing::info!(
            address = %session.address,
            chain_id = %session.chain_id,
            app_id = %self.config.app_id,
            "Custody session established"
        );
        self.session.store(session).await;
        Ok(())
    }

    async fn disconnect(&self) {
        let Some(session) = self.session.take().await else {
            return;
        };
        if let Err(e) = self.bridge.close_session().await {
            tracing::warn!(error = %e, app_id = %self.config.app_id, "Custody logout failed");
        }
        tracing::info!(address = %session.address, "Custody session closed");
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
