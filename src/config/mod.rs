//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → WalletConfig (validated, immutable)
//!     → chains::ChainRegistry built once at startup
//!     → shared via Arc to all strategies
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; a tenant/chain change requires a new
//!   session
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{ObservabilityConfig, TenantsConfig, WalletConfig};
pub use validation::ValidationError;
