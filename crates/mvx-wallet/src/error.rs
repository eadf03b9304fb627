/// Error types for wallet operations.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("invalid secret key: {0}")]
    InvalidSecretKey(String),
    #[error("invalid signature: {0}")]
    InvalidSignature(String),
    #[error("primitives error: {0}")]
    Primitives(#[from] mvx_primitives::PrimitivesError),
}
