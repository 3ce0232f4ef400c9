//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the wallet
//! authentication layer. All types derive Serde traits for deserialization
//! from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the wallet authentication layer.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct WalletConfig {
    /// Supported chains and the default chain.
    pub chains: ChainsConfig,

    /// Per-tenant connector settings.
    pub tenants: TenantsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Chain set configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ChainsConfig {
    /// Chain id the application expects the active wallet to be on.
    pub default_chain: u64,

    /// Active chain definitions. Every entry needs a transport (rpc_url).
    pub active: Vec<ChainEntry>,
}

impl Default for ChainsConfig {
    fn default() -> Self {
        Self {
            default_chain: 100,
            active: vec![ChainEntry {
                chain_id: 100,
                name: "gnosis".to_string(),
                rpc_url: "https://rpc.gnosischain.com".to_string(),
                ws_url: None,
            }],
        }
    }
}

/// A single supported chain plus its transport endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChainEntry {
    /// Chain id (EIP-155).
    pub chain_id: u64,

    /// Human-readable chain name for logging.
    pub name: String,

    /// HTTP JSON-RPC endpoint.
    pub rpc_url: String,

    /// Optional WebSocket endpoint.
    #[serde(default)]
    pub ws_url: Option<String>,
}

/// Per-tenant connector settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct TenantsConfig {
    /// Web tenant: standard injected-wallet flow.
    pub injected: InjectedConfig,

    /// Beexo tenant: embedded/mini-app wallet flow.
    pub embedded: EmbeddedConfig,

    /// Privy tenant: managed-custody flow.
    pub custody: CustodyConfig,
}

/// Injected-wallet connector settings (Web tenant).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct InjectedConfig {
    /// Name of the injected provider handle, for logging.
    pub provider_name: String,
}

impl Default for InjectedConfig {
    fn default() -> Self {
        Self {
            provider_name: "ethereum".to_string(),
        }
    }
}

/// Embedded-wallet connector settings (Beexo tenant).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EmbeddedConfig {
    /// Host application identifier used in the bridge handshake.
    pub host_app: String,

    /// Handshake timeout in seconds.
    pub handshake_timeout_secs: u64,
}

impl Default for EmbeddedConfig {
    fn default() -> Self {
        Self {
            host_app: "beexo".to_string(),
            handshake_timeout_secs: 30,
        }
    }
}

/// Managed-custody connector settings (Privy tenant).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CustodyConfig {
    /// Custody provider application id.
    pub app_id: String,

    /// Create an embedded wallet for users who sign in without one.
    pub create_on_login: bool,
}

impl Default for CustodyConfig {
    fn default() -> Self {
        Self {
            app_id: String::new(),
            create_on_login: true,
        }
    }
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default log level (overridable via RUST_LOG).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
