//! Error types for proxy operations.

/// Errors that can occur when interacting with the network proxy.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// HTTP request failed (connection, timeout, body read).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The response body is not the expected JSON.
    #[error("decode error: {0}")]
    DecodeError(#[from] serde_json::Error),

    /// The node answered with an error envelope; carries the server's
    /// message, or its code when no message was given.
    #[error("proxy request error: {0}")]
    ProtocolError(String),

    /// The transaction could not be serialized for submission.
    #[error("transaction error: {0}")]
    Transaction(#[from] mvx_transaction::TransactionError),

    /// An address could not be encoded for the request path.
    #[error("primitives error: {0}")]
    Primitives(#[from] mvx_primitives::PrimitivesError),

    /// A token identifier is neither in display form nor valid hex.
    #[error("invalid token identifier: {0}")]
    InvalidTokenIdentifier(String),
}
