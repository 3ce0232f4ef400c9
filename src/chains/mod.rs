//! Chain registry subsystem.
//!
//! # Data Flow
//! ```text
//! WalletConfig (validated)
//!     → registry.rs (ChainRegistry::from_config)
//!     → immutable registry, shared via Arc
//!     → read by strategies and the smart-wallet adapter
//! ```
//!
//! # Design Decisions
//! - Built once at process start; no mutation afterward
//! - Every active chain must have a transport; violations are a startup
//!   error, not a call-time error
//! - The default chain drives the wrong-network flag

pub mod registry;

pub use registry::{ChainDef, ChainId, ChainRegistry, TransportConfig};
