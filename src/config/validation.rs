//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check every active chain has a usable transport
//! - Check the default chain is in the active set
//! - Detect duplicate chain ids
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: WalletConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::WalletConfig;

/// A single semantic configuration error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The active chain set is empty.
    #[error("at least one active chain is required")]
    EmptyChainSet,

    /// Two active entries share a chain id.
    #[error("duplicate chain id {0}")]
    DuplicateChainId(u64),

    /// An active chain has no transport endpoint.
    #[error("chain {0} has no rpc_url")]
    MissingTransport(u64),

    /// A transport endpoint is not a valid URL.
    #[error("chain {chain_id} has invalid URL '{url}': {reason}")]
    InvalidUrl {
        chain_id: u64,
        url: String,
        reason: String,
    },

    /// The default chain is not in the active set.
    #[error("default chain {0} is not in the active set")]
    DefaultChainNotActive(u64),

    /// A timeout is configured as zero, which would fail every operation
    /// that actually suspends.
    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &WalletConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.chains.active.is_empty() {
        errors.push(ValidationError::EmptyChainSet);
    }

    let mut seen = HashSet::new();
    for entry in &config.chains.active {
        if !seen.insert(entry.chain_id) {
            errors.push(ValidationError::DuplicateChainId(entry.chain_id));
        }

        if entry.rpc_url.is_empty() {
            errors.push(ValidationError::MissingTransport(entry.chain_id));
        } else if let Err(e) = entry.rpc_url.parse::<url::Url>() {
            errors.push(ValidationError::InvalidUrl {
                chain_id: entry.chain_id,
                url: entry.rpc_url.clone(),
                reason: e.to_string(),
            });
        }

        if let Some(ws_url) = &entry.ws_url {
            if let Err(e) = ws_url.parse::<url::Url>() {
                errors.push(ValidationError::InvalidUrl {
                    chain_id: entry.chain_id,
                    url: ws_url.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    if !config.chains.active.is_empty() && !seen.contains(&config.chains.default_chain) {
        errors.push(ValidationError::DefaultChainNotActive(
            config.chains.default_chain,
        ));
    }

    if config.tenants.embedded.handshake_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout(
            "tenants.embedded.handshake_timeout_secs",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
