/// MultiversX SDK - Primitives shared by the transaction and network layers.
///
/// This crate provides the foundational building blocks for the SDK:
/// - Big-endian codec for arbitrary-precision unsigned values
/// - BLAKE2b-256 hashing used for transaction identifiers
/// - Bech32 addresses over raw 32-byte public keys
/// - Serde helpers for decimal-string encoded big integers

pub mod address;
pub mod bigint;
pub mod hash;

mod error;
pub use address::Address;
pub use error::PrimitivesError;
pub use num_bigint::BigUint;
