//! Smart wallet view derivation.
//!
//! # Responsibilities
//! - Combine live account/chain/wallet-client state into one derived view
//! - Adapt the provider wallet-client handle into a signing capability
//! - Flag network mismatches against the registry's default chain
//!
//! # Design Decisions
//! - Derivation is a pure function over an explicit snapshot; the host's
//!   change notification drives recomputation, there is no polling
//! - Signer adaptation is memoized on wallet-client identity so the same
//!   handle is not re-wrapped on every recomputation
//! - An absent wallet client yields `signer: None`, a deliberate signal
//!   callers must check before any write operation

use std::sync::{Arc, Mutex};

use alloy::primitives::{Address, B256};
use alloy::signers::Signature;

use crate::auth::bridge::{BridgeSession, WalletClient};
use crate::auth::context::AuthContext;
use crate::auth::types::AuthResult;
use crate::chains::{ChainId, ChainRegistry};

/// Explicit input to the smart-wallet derivation.
#[derive(Clone)]
pub struct WalletSnapshot {
    pub address: Option<Address>,
    pub is_connected: bool,
    pub chain_id: ChainId,
    pub wallet_client: Option<Arc<dyn WalletClient>>,
    pub is_embedded: bool,
}

impl WalletSnapshot {
    /// Snapshot for a session-less state, pinned to the given chain.
    pub fn disconnected(chain_id: ChainId) -> Self {
        Self {
            address: None,
            is_connected: false,
            chain_id,
            wallet_client: None,
            is_embedded: false,
        }
    }

    /// Snapshot of an established session.
    pub fn from_session(session: &BridgeSession) -> Self {
        Self {
            address: Some(session.address),
            is_connected: true,
            chain_id: session.chain_id,
            wallet_client: session.wallet_client.clone(),
            is_embedded: session.embedded,
        }
    }
}

impl std::fmt::Debug for WalletSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletSnapshot")
            .field("address", &self.address)
            .field("is_connected", &self.is_connected)
            .field("chain_id", &self.chain_id)
            .field("has_wallet_client", &self.wallet_client.is_some())
            .field("is_embedded", &self.is_embedded)
            .finish()
    }
}

/// Chain-agnostic signing capability derived from a wallet-client handle.
#[derive(Clone)]
pub struct SliceSigner {
    client: Arc<dyn WalletClient>,
    chain_id: ChainId,
}

impl SliceSigner {
    pub fn address(&self) -> Address {
        self.client.address()
    }

    pub fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    /// Sign arbitrary message bytes (with Ethereum prefix).
    pub async fn sign_message(&self, message: &[u8]) -> AuthResult<Signature> {
        self.client.sign_message(message).await
    }

    /// Sign a 32-byte hash.
    pub async fn sign_hash(&self, hash: B256) -> AuthResult<Signature> {
        self.client.sign_hash(hash).await
    }
}

impl std::fmt::Debug for SliceSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SliceSigner")
            .field("address", &self.address())
            .field("chain_id", &self.chain_id)
            .finish()
    }
}

impl PartialEq for SliceSigner {
    fn eq(&self, other: &Self) -> bool {
        self.address() == other.address() && self.chain_id == other.chain_id
    }
}

/// Derived smart-wallet view.
///
/// Recomputed whenever underlying account/chain/wallet-client state
/// changes.
#[derive(Debug, Clone)]
pub struct SmartWalletView {
    pub address: Option<Address>,
    pub signer: Option<SliceSigner>,
    pub chain_id: ChainId,
    pub is_connected: bool,
    pub is_wrong_network: bool,
    pub is_embedded: bool,
}

/// Computes [`SmartWalletView`]s from snapshots.
pub struct SmartWalletAdapter {
    registry: Arc<ChainRegistry>,
    /// Last adapted signer, keyed on wallet-client identity.
    memo: Mutex<Option<(usize, SliceSigner)>>,
}

impl SmartWalletAdapter {
    pub fn new(registry: Arc<ChainRegistry>) -> Self {
        Self {
            registry,
            memo: Mutex::new(None),
        }
    }

    /// Snapshot the current context session, or a disconnected snapshot on
    /// the default chain when no session is held.
    pub async fn snapshot(&self, ctx: &AuthContext) -> WalletSnapshot {
        match ctx.session().await {
            Some(session) => WalletSnapshot::from_session(&session),
            None => WalletSnapshot::disconnected(self.registry.default_chain().id),
        }
    }

    /// Derive the smart-wallet view from a snapshot.
    pub fn view(&self, snapshot: &WalletSnapshot) -> SmartWalletView {
        let signer = snapshot
            .wallet_client
            .as_ref()
            .map(|client| self.adapt(client));

        let is_wrong_network = !self.registry.is_default(snapshot.chain_id);
        if is_wrong_network && snapshot.is_connected {
            tracing::debug!(
                chain_id = %snapshot.chain_id,
                default_chain = %self.registry.default_chain().id,
                "Wallet is on the wrong network"
            );
        }

        SmartWalletView {
            address: snapshot.address,
            signer,
            chain_id: snapshot.chain_id,
            is_connected: snapshot.is_connected,
            is_wrong_network,
            is_embedded: snapshot.is_embedded,
        }
    }

    /// Wrap the wallet-client handle, reusing the previous wrapper when the
    /// handle identity is unchanged.
    fn adapt(&self, client: &Arc<dyn WalletClient>) -> SliceSigner {
        let key = Arc::as_ptr(client).cast::<()>() as usize;
        let mut memo = match self.memo.lock() {
            Ok(memo) => memo,
            // A poisoned memo only loses the cache; rebuild the signer
            Err(poisoned) => poisoned.into_inner(),
        };

        if let Some((cached_key, signer)) = memo.as_ref() {
            if *cached_key == key {
                return signer.clone();
            }
        }

        let signer = SliceSigner {
            client: client.clone(),
            chain_id: client.chain_id(),
        };
        *memo = Some((key, signer.clone()));
        signer
    }
}
