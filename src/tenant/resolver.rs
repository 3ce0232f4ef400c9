//! Host-to-tenant resolution.
//!
//! # Responsibilities
//! - Map an inbound host string to a deployment tenant
//! - Strip the port before matching
//! - Fall back to Web for anything unrecognized
//!
//! # Design Decisions
//! - Host matching is case-insensitive (per HTTP spec)
//! - Checks run in fixed priority order; Web is always last

use serde::{Deserialize, Serialize};

/// Deployment tenant, selecting which wallet backend is used.
///
/// Determined once per session from the resolved host and never mutated
/// afterward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tenant {
    /// Standard web deployment; injected browser wallet.
    Web,
    /// Beexo mini-app deployment; embedded wallet bridge.
    Beexo,
    /// Frame deployment; Privy managed custody.
    Privy,
}

impl std::fmt::Display for Tenant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tenant::Web => write!(f, "web"),
            Tenant::Beexo => write!(f, "beexo"),
            Tenant::Privy => write!(f, "privy"),
        }
    }
}

/// Resolve a host string to a tenant.
///
/// Total over all inputs: `None`, empty, and unmatched hosts resolve to
/// [`Tenant::Web`]. The port (anything after `:`) is stripped before
/// matching.
pub fn resolve(host: Option<&str>) -> Tenant {
    let Some(host) = host else {
        return Tenant::Web;
    };

    // Strip port, normalize case
    let hostname = host
        .split(':')
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();

    if hostname.starts_with("beexo.") || hostname.starts_with("mini.") {
        Tenant::Beexo
    } else if hostname.starts_with("frame.") {
        Tenant::Privy
    } else {
        Tenant::Web
    }
}
