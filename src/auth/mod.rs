//! Wallet authentication subsystem.
//!
//! # Data Flow
//! ```text
//! inbound host
//!     → tenant::resolve (once per session)
//!     → strategy.rs (tagged-union dispatch to one implementation)
//!     → injected.rs | embedded.rs | custody.rs (provider round-trips
//!       through the opaque bridge.rs capability)
//!     → context.rs (forwarding + account-state publication)
//!     → account facades (consumed by the UI layer)
//! ```
//!
//! # Invariants
//! - Exactly one strategy is active per session; the tenant never changes
//!   after resolution
//! - A failed connect leaves no partial session
//! - Disconnect is idempotent and its effects are observable before any
//!   subsequent connect's effects

pub mod bridge;
pub mod context;
pub mod custody;
pub mod embedded;
pub mod injected;
pub mod strategy;
pub mod types;

pub use bridge::{BridgeSession, WalletBridge, WalletClient};
pub use context::AuthContext;
pub use strategy::{strategy_for, AuthStrategy, BridgeSet};
pub use types::{AuthError, AuthResult};
