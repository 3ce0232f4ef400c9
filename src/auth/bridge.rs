//! Opaque wallet-provider capability.
//!
//! # Responsibilities
//! - Define the seam between this layer and vendor wallet protocols
//! - Carry the session payload a provider hands back on connect
//!
//! # Design Decisions
//! - Vendor protocols (injected-wallet, mini-app bridge, custody API) are
//!   consumed through trait objects, never reimplemented here
//! - The wallet-client handle is object-safe so strategies can hold it
//!   without knowing the vendor

use std::sync::Arc;

use alloy::primitives::{Address, B256};
use alloy::signers::Signature;
use async_trait::async_trait;

use crate::auth::types::AuthResult;
use crate::chains::ChainId;

/// Provider-specific wallet handle capable of signing.
///
/// Implemented by the host application over whichever vendor client the
/// active tenant uses.
#[async_trait]
pub trait WalletClient: Send + Sync {
    /// The account this client signs for.
    fn address(&self) -> Address;

    /// The chain the client is currently on.
    fn chain_id(&self) -> ChainId;

    /// Sign arbitrary message bytes (with Ethereum prefix).
    async fn sign_message(&self, message: &[u8]) -> AuthResult<Signature>;

    /// Sign a 32-byte hash.
    async fn sign_hash(&self, hash: B256) -> AuthResult<Signature>;
}

/// Session payload returned by a provider on a successful connect.
#[derive(Clone)]
pub struct BridgeSession {
    /// The connected account.
    pub address: Address,

    /// The chain the provider reports.
    pub chain_id: ChainId,

    /// Signing handle, absent for read-only sessions.
    pub wallet_client: Option<Arc<dyn WalletClient>>,

    /// True when the session was established inside a host app rather than
    /// a standalone browser extension.
    pub embedded: bool,

    /// Opaque provider metadata, passed through untouched.
    pub metadata: serde_json::Value,
}

impl std::fmt::Debug for BridgeSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BridgeSession")
            .field("address", &self.address)
            .field("chain_id", &self.chain_id)
            .field("has_wallet_client", &self.wallet_client.is_some())
            .field("embedded", &self.embedded)
            .finish()
    }
}

/// Opaque connection capability for one wallet backend.
///
/// One implementation exists per vendor protocol; the host application
/// supplies them and this layer only calls through the trait.
#[async_trait]
pub trait WalletBridge: Send + Sync {
    /// Ask the provider to establish a session. Suspends until the provider
    /// resolves or rejects.
    async fn request_session(&self) -> AuthResult<BridgeSession>;

    /// Tear down the provider-side session.
    async fn close_session(&self) -> AuthResult<()>;

    /// Whether a provider is reachable in this context at all. Injected
    /// providers may simply be absent from the page.
    fn is_available(&self) -> bool {
        true
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Bridge doubles shared by the auth unit tests.

    use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

    use super::*;
    use crate::auth::types::AuthError;

    pub(crate) const TEST_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    pub(crate) fn fixed_signature() -> Signature {
        Signature::from_scalars_and_parity(B256::with_last_byte(1), B256::with_last_byte(2), false)
    }

    /// Signing handle returning a fixed signature.
    pub(crate) struct StaticClient {
        pub address: Address,
        pub chain_id: ChainId,
    }

    #[async_trait]
    impl WalletClient for StaticClient {
        fn address(&self) -> Address {
            self.address
        }

        fn chain_id(&self) -> ChainId {
            self.chain_id
        }

        async fn sign_message(&self, _message: &[u8]) -> AuthResult<Signature> {
            Ok(fixed_signature())
        }

        async fn sign_hash(&self, _hash: B256) -> AuthResult<Signature> {
            Ok(fixed_signature())
        }
    }

    /// Bridge double with switchable availability and failure mode.
    ///
    /// A gated bridge suspends each session request until the gate is
    /// notified, so tests can observe mid-flight state.
    pub(crate) struct StaticBridge {
        pub chain_id: ChainId,
        pub available: AtomicBool,
        pub reject_connect: AtomicBool,
        pub connect_calls: AtomicU32,
        pub close_calls: AtomicU32,
        pub with_client: bool,
        pub gate: Option<Arc<tokio::sync::Notify>>,
    }

    impl StaticBridge {
        pub(crate) fn new(chain_id: ChainId) -> Self {
            Self {
                chain_id,
                available: AtomicBool::new(true),
                reject_connect: AtomicBool::new(false),
                connect_calls: AtomicU32::new(0),
                close_calls: AtomicU32::new(0),
                with_client: true,
                gate: None,
            }
        }

        pub(crate) fn gated(chain_id: ChainId, gate: Arc<tokio::sync::Notify>) -> Self {
            Self {
                gate: Some(gate),
                ..Self::new(chain_id)
            }
        }

        pub(crate) fn address() -> Address {
            TEST_ADDRESS.parse().unwrap()
        }
    }

    #[async_trait]
    impl WalletBridge for StaticBridge {
        async fn request_session(&self) -> AuthResult<BridgeSession> {
            self.connect_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            if self.reject_connect.load(Ordering::SeqCst) {
                return Err(AuthError::ConnectRejected("user denied".into()));
            }
            let wallet_client: Option<Arc<dyn WalletClient>> = if self.with_client {
                Some(Arc::new(StaticClient {
                    address: Self::address(),
                    chain_id: self.chain_id,
                }))
            } else {
                None
            };
            Ok(BridgeSession {
                address: Self::address(),
                chain_id: self.chain_id,
                wallet_client,
                embedded: false,
                metadata: serde_json::Value::Null,
            })
        }

        async fn close_session(&self) -> AuthResult<()> {
            self.close_calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn is_available(&self) -> bool {
            self.available.load(Ordering::SeqCst)
        }
    }
}
