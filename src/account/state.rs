//! Live account/connection state.

use alloy::primitives::Address;

/// Connection lifecycle status, as reported to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountStatus {
    Connecting,
    Connected,
    Disconnected,
    Reconnecting,
}

impl std::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountStatus::Connecting => write!(f, "connecting"),
            AccountStatus::Connected => write!(f, "connected"),
            AccountStatus::Disconnected => write!(f, "disconnected"),
            AccountStatus::Reconnecting => write!(f, "reconnecting"),
        }
    }
}

/// Snapshot of the active strategy's account state.
///
/// Observed, never owned, by the facades; published on the auth context's
/// watch channel whenever a session transition completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountState {
    pub address: Option<Address>,
    pub is_connected: bool,
    pub status: AccountStatus,
}

impl AccountState {
    pub fn disconnected() -> Self {
        Self {
            address: None,
            is_connected: false,
            status: AccountStatus::Disconnected,
        }
    }

    pub fn connecting() -> Self {
        Self {
            address: None,
            is_connected: false,
            status: AccountStatus::Connecting,
        }
    }

    pub fn reconnecting(address: Option<Address>) -> Self {
        Self {
            address,
            is_connected: false,
            status: AccountStatus::Reconnecting,
        }
    }

    pub fn connected(address: Address) -> Self {
        Self {
            address: Some(address),
            is_connected: true,
            status: AccountStatus::Connected,
        }
    }
}

impl Default for AccountState {
    fn default() -> Self {
        Self::disconnected()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_keep_fields_consistent() {
        let state = AccountState::disconnected();
        assert!(!state.is_connected);
        assert!(state.address.is_none());

        let address: Address = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
            .parse()
            .unwrap();
        let state = AccountState::connected(address);
        assert!(state.is_connected);
        assert_eq!(state.address, Some(address));
        assert_eq!(state.status, AccountStatus::Connected);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(AccountStatus::Reconnecting.to_string(), "reconnecting");
        assert_eq!(AccountStatus::Disconnected.to_string(), "disconnected");
    }
}
