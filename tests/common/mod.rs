//! Shared utilities for integration testing.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use alloy::primitives::{Address, B256};
use alloy::signers::Signature;
use async_trait::async_trait;
use tokio::sync::Mutex;

use wallet_auth::auth::bridge::BridgeSession;
use wallet_auth::auth::types::{AuthError, AuthResult};
use wallet_auth::auth::{BridgeSet, WalletBridge, WalletClient};
use wallet_auth::chains::ChainId;

pub const JUROR_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

/// Outcome scripted for one connect attempt.
#[derive(Clone)]
pub enum ConnectOutcome {
    Accept { chain_id: u64, embedded: bool },
    Reject(&'static str),
}

/// Wallet client returning fixed signatures, counting signing calls.
pub struct CountingClient {
    address: Address,
    chain_id: ChainId,
    pub sign_calls: AtomicU32,
}

#[async_trait]
impl WalletClient for CountingClient {
    fn address(&self) -> Address {
        self.address
    }

    fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    async fn sign_message(&self, _message: &[u8]) -> AuthResult<Signature> {
        self.sign_calls.fetch_add(1, Ordering::SeqCst);
        Ok(Signature::from_scalars_and_parity(
            B256::with_last_byte(1),
            B256::with_last_byte(2),
            false,
        ))
    }

    async fn sign_hash(&self, _hash: B256) -> AuthResult<Signature> {
        self.sign_calls.fetch_add(1, Ordering::SeqCst);
        Ok(Signature::from_scalars_and_parity(
            B256::with_last_byte(1),
            B256::with_last_byte(2),
            false,
        ))
    }
}

/// Programmable bridge: connect attempts consume scripted outcomes in
/// order; the last outcome repeats once the script runs out.
pub struct ScriptedBridge {
    script: Mutex<Vec<ConnectOutcome>>,
    pub connect_calls: AtomicU32,
    pub close_calls: AtomicU32,
}

impl ScriptedBridge {
    pub fn new(script: Vec<ConnectOutcome>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script),
            connect_calls: AtomicU32::new(0),
            close_calls: AtomicU32::new(0),
        })
    }

    pub fn accepting(chain_id: u64) -> Arc<Self> {
        Self::new(vec![ConnectOutcome::Accept {
            chain_id,
            embedded: false,
        }])
    }
}

#[async_trait]
impl WalletBridge for ScriptedBridge {
    async fn request_session(&self) -> AuthResult<BridgeSession> {
        self.connect_calls.fetch_add(1, Ordering::SeqCst);

        let mut script = self.script.lock().await;
        let outcome = if script.len() > 1 {
            script.remove(0)
        } else {
            script
                .first()
                .cloned()
                .unwrap_or(ConnectOutcome::Reject("script exhausted"))
        };

        match outcome {
            ConnectOutcome::Accept { chain_id, embedded } => {
                let address: Address = JUROR_ADDRESS.parse().map_err(|_| {
                    AuthError::Bridge("bad test address".into())
                })?;
                Ok(BridgeSession {
                    address,
                    chain_id: ChainId(chain_id),
                    wallet_client: Some(Arc::new(CountingClient {
                        address,
                        chain_id: ChainId(chain_id),
                        sign_calls: AtomicU32::new(0),
                    })),
                    embedded,
                    metadata: serde_json::json!({ "source": "scripted" }),
                })
            }
            ConnectOutcome::Reject(reason) => Err(AuthError::ConnectRejected(reason.into())),
        }
    }

    async fn close_session(&self) -> AuthResult<()> {
        self.close_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// A bridge set backed by one scripted bridge per tenant.
pub fn scripted_bridges(
    injected: Arc<ScriptedBridge>,
    embedded: Arc<ScriptedBridge>,
    custody: Arc<ScriptedBridge>,
) -> BridgeSet {
    BridgeSet {
        injected,
        embedded,
        custody,
    }
}
