//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::WalletConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<WalletConfig, ConfigError> {
    let config: WalletConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<WalletConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_config() {
        let config = parse_config(
            r#"
            [chains]
            default_chain = 100

            [[chains.active]]
            chain_id = 100
            name = "gnosis"
            rpc_url = "https://rpc.gnosischain.com"
            "#,
        )
        .unwrap();
        assert_eq!(config.chains.default_chain, 100);
    }

    #[test]
    fn test_parse_error_surfaces() {
        let result = parse_config("chains = 7");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_validation_error_surfaces() {
        let result = parse_config(
            r#"
            [chains]
            default_chain = 1
            "#,
        );
        let err = result.unwrap_err();
        assert!(err.to_string().contains("default chain 1"));
    }

    #[test]
    fn test_zero_handshake_timeout_rejected_at_load() {
        let result = parse_config(
            r#"
            [tenants.embedded]
            handshake_timeout_secs = 0
            "#,
        );
        let err = result.unwrap_err();
        assert!(err.to_string().contains("handshake_timeout_secs"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_config(Path::new("/nonexistent/wallet.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
