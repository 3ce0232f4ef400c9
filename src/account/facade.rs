//! Provider-agnostic account/connect facades.
//!
//! # Responsibilities
//! - Re-export live account state and the connect/disconnect operations
//!   under stable names, decoupled from the concrete backend
//! - Derive the connect-button label
//!
//! # Design Decisions
//! - No independent state; everything is sourced from the auth context
//! - Swapping the wallet backend must never touch call sites of these
//!   facades

use alloy::primitives::Address;

use crate::account::state::{AccountState, AccountStatus};
use crate::auth::context::AuthContext;
use crate::auth::types::AuthResult;

/// Stable account view consumed by the UI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceAccount {
    pub address: Option<Address>,
    pub is_connected: bool,
    pub status: AccountStatus,
}

/// Current account state under the provider-agnostic name.
pub fn slice_account(ctx: &AuthContext) -> SliceAccount {
    let AccountState {
        address,
        is_connected,
        status,
    } = ctx.account_state();
    SliceAccount {
        address,
        is_connected,
        status,
    }
}

/// Stable connection handle consumed by the UI layer.
pub struct SliceConnect<'a> {
    ctx: &'a AuthContext,
}

/// Connection operations under the provider-agnostic name.
pub fn slice_connect(ctx: &AuthContext) -> SliceConnect<'_> {
    SliceConnect { ctx }
}

impl SliceConnect<'_> {
    pub async fn connect(&self) -> AuthResult<()> {
        self.ctx.connect().await
    }

    pub async fn disconnect(&self) {
        self.ctx.disconnect().await
    }

    pub async fn is_authenticated(&self) -> bool {
        self.ctx.is_authenticated().await
    }

    /// Label for the connect button.
    pub async fn label(&self) -> &'static str {
        connect_label(self.ctx.is_authenticated().await)
    }
}

/// Pure label derivation.
pub fn connect_label(is_authenticated: bool) -> &'static str {
    if is_authenticated {
        "Disconnect"
    } else {
        "Connect Wallet"
    }
}
