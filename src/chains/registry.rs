//! Static chain configuration.
//!
//! # Responsibilities
//! - Hold the active chain set, transport map, and default chain
//! - Answer chain-membership and default-chain queries
//! - Parse transport endpoints into typed URLs at construction

use std::collections::HashMap;

use url::Url;

use crate::config::loader::ConfigError;
use crate::config::schema::WalletConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Chain ID type for strong typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainId(pub u64);

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ChainId> for u64 {
    fn from(id: ChainId) -> Self {
        id.0
    }
}

impl std::fmt::Display for ChainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A supported chain definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainDef {
    pub id: ChainId,
    pub name: String,
}

/// Transport endpoints for one chain.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub rpc_url: Url,
    pub ws_url: Option<Url>,
}

/// Immutable, process-wide chain registry.
///
/// Constructed once at startup from validated configuration and shared by
/// reference (`Arc`) with every strategy. Guarantees a non-empty chain set
/// and a transport entry for every active chain.
#[derive(Debug, Clone)]
pub struct ChainRegistry {
    chains: Vec<ChainDef>,
    transports: HashMap<ChainId, TransportConfig>,
    default_chain: ChainId,
    /// Position of the default chain in `chains`, fixed at construction.
    default_index: usize,
}

impl ChainRegistry {
    /// Build the registry from configuration.
    ///
    /// Runs semantic validation first, so a missing transport or an
    /// inactive default chain surfaces here, at startup.
    pub fn from_config(config: &WalletConfig) -> Result<Self, ConfigError> {
        validate_config(config).map_err(ConfigError::Validation)?;

        let mut chains = Vec::with_capacity(config.chains.active.len());
        let mut transports = HashMap::with_capacity(config.chains.active.len());

        for entry in &config.chains.active {
            let id = ChainId(entry.chain_id);
            // Validation already checked parseability
            let rpc_url = entry.rpc_url.parse::<Url>().map_err(|e| {
                ConfigError::Validation(vec![ValidationError::InvalidUrl {
                    chain_id: entry.chain_id,
                    url: entry.rpc_url.clone(),
                    reason: e.to_string(),
                }])
            })?;
            let ws_url = match &entry.ws_url {
                Some(raw) => Some(raw.parse::<Url>().map_err(|e| {
                    ConfigError::Validation(vec![ValidationError::InvalidUrl {
                        chain_id: entry.chain_id,
                        url: raw.clone(),
                        reason: e.to_string(),
                    }])
                })?),
                None => None,
            };

            chains.push(ChainDef {
                id,
                name: entry.name.clone(),
            });
            transports.insert(id, TransportConfig { rpc_url, ws_url });
        }

        let default_chain = ChainId(config.chains.default_chain);
        let default_index = chains
            .iter()
            .position(|c| c.id == default_chain)
            .ok_or_else(|| {
                ConfigError::Validation(vec![ValidationError::DefaultChainNotActive(
                    config.chains.default_chain,
                )])
            })?;

        tracing::info!(
            chains = chains.len(),
            default_chain = config.chains.default_chain,
            "Chain registry initialized"
        );

        Ok(Self {
            chains,
            transports,
            default_chain,
            default_index,
        })
    }

    /// All active chains. Never empty.
    pub fn active_chains(&self) -> &[ChainDef] {
        &self.chains
    }

    /// Transport endpoints for a chain, if it is active.
    pub fn transport(&self, id: ChainId) -> Option<&TransportConfig> {
        self.transports.get(&id)
    }

    /// The chain the application expects the active wallet to be on.
    pub fn default_chain(&self) -> &ChainDef {
        // default_index was located at construction, after validation
        &self.chains[self.default_index]
    }

    /// True iff the given chain id is the default chain.
    pub fn is_default(&self, id: ChainId) -> bool {
        id == self.default_chain
    }

    /// True iff the given chain id is in the active set.
    pub fn contains(&self, id: ChainId) -> bool {
        self.transports.contains_key(&id)
    }
}
