//! Authentication error definitions.

use thiserror::Error;

/// Errors that can occur while establishing or tearing down a session.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No wallet provider is available in this context (e.g. no injected
    /// provider in the page).
    #[error("wallet provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// The provider rejected the connect attempt (user denial, handshake
    /// failure, custody login failure).
    #[error("connect rejected: {0}")]
    ConnectRejected(String),

    /// The provider did not complete the handshake in time.
    #[error("provider handshake timed out after {0} seconds")]
    HandshakeTimeout(u64),

    /// Transport-level bridge failure.
    #[error("bridge error: {0}")]
    Bridge(String),

    /// The wallet-client handle refused a signing request.
    #[error("signing failed: {0}")]
    Signing(String),
}

/// Result type for authentication operations.
pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AuthError::HandshakeTimeout(30);
        assert_eq!(
            err.to_string(),
            "provider handshake timed out after 30 seconds"
        );

        let err = AuthError::ProviderUnavailable("no injected provider".into());
        assert!(err.to_string().contains("no injected provider"));
    }
}
