//! Tenant resolution subsystem.
//!
//! # Data Flow
//! ```text
//! inbound host string (request/browser context)
//!     → resolver.rs (prefix match, port stripped)
//!     → Tenant (fixed for the session)
//!     → auth::context (strategy selection)
//! ```
//!
//! # Design Decisions
//! - Resolution is pure and total; unmatched hosts fall back to Web
//! - Prefix match, not substring match ("framework.com" is Web)
//! - The Web fallback is the last rule evaluated so new prefixes can be
//!   inserted without touching existing behavior

pub mod resolver;

pub use resolver::{resolve, Tenant};
