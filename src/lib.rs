//! Tenant-Aware Wallet Authentication Library

pub mod account;
pub mod auth;
pub mod chains;
pub mod config;
pub mod observability;
pub mod tenant;

pub use account::{slice_account, slice_connect, SmartWalletAdapter, SmartWalletView};
pub use auth::{AuthContext, AuthError, BridgeSet, WalletBridge, WalletClient};
pub use chains::ChainRegistry;
pub use config::WalletConfig;
pub use tenant::{resolve, Tenant};
