//! Hash function primitives for the SDK.
//!
//! Transaction identifiers on the network are BLAKE2b digests truncated to
//! a 32-byte output (BLAKE2b parameterised for 256 bits, not a truncated
//! BLAKE2b-512).

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};

/// Length in bytes of a transaction hash.
pub const TRANSACTION_HASH_LENGTH: usize = 32;

type Blake2b256 = Blake2b<U32>;

/// Compute the BLAKE2b-256 hash of the input data.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte BLAKE2b digest.
pub fn blake2b_256(data: &[u8]) -> [u8; TRANSACTION_HASH_LENGTH] {
    let mut hasher = Blake2b256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute the BLAKE2b-256 hash of the input data as lowercase hex.
pub fn blake2b_256_hex(data: &[u8]) -> String {
    hex::encode(blake2b_256(data))
}
