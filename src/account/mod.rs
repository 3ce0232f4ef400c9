//! Account facades and derived views.
//!
//! # Data Flow
//! ```text
//! auth::context (watch channel + session reads)
//!     → state.rs (AccountState snapshots)
//!     → facade.rs (slice_account / slice_connect rename layer)
//!     → smart_wallet.rs (SmartWalletView: signer, wrong-network flag)
//!     → UI layer (the entire public surface of this core)
//! ```
//!
//! # Design Decisions
//! - Facades hold no state of their own; they exist so the wallet backend
//!   can be swapped without touching call sites
//! - The smart-wallet view is recomputed from explicit snapshots; only the
//!   signer wrapper is cached, keyed on client identity

pub mod facade;
pub mod smart_wallet;
pub mod state;

pub use facade::{connect_label, slice_account, slice_connect, SliceAccount, SliceConnect};
pub use smart_wallet::{SliceSigner, SmartWalletAdapter, SmartWalletView, WalletSnapshot};
pub use state::{AccountState, AccountStatus};
