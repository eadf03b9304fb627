/// Unified error type for all primitives operations.
///
/// Covers address decoding/encoding, hex input and decimal number parsing.
#[derive(Debug, thiserror::Error)]
pub enum PrimitivesError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid address prefix: expected '{expected}', got '{got}'")]
    InvalidHrp { expected: String, got: String },

    #[error("invalid address length: expected {expected}, got {got}")]
    InvalidAddressLength { expected: usize, got: usize },

    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("invalid number: {0}")]
    InvalidNumber(String),
}

impl From<hex::FromHexError> for PrimitivesError {
    fn from(e: hex::FromHexError) -> Self {
        PrimitivesError::InvalidHex(e.to_string())
    }
}
