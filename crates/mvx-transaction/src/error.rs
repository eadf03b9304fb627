/// Error types for transaction operations.
#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    /// The canonical form could not be produced (e.g. an address failed to encode).
    #[error("cannot serialize transaction: {0}")]
    Serialization(String),
    /// The signer failed, or the serialization preceding it did.
    #[error("cannot sign transaction: {0}")]
    Signing(String),
}
