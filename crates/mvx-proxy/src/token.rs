//! Token identifier helpers.
//!
//! Identifiers are displayed as `TICKER-abcdef`; some callers hold them as
//! the hex encoding of that text instead. NFT/SFT identifiers append the
//! nonce as even-length lowercase hex: `TICKER-abcdef-0a`.

use crate::error::ProxyError;

/// Bring a token identifier to its display form.
///
/// Identifiers containing `-` are returned unchanged; anything else is
/// treated as hex and decoded to UTF-8 text.
pub fn normalize_token_identifier(identifier: &str) -> Result<String, ProxyError> {
    if identifier.contains('-') {
        return Ok(identifier.to_string());
    }

    let bytes = hex::decode(identifier)
        .map_err(|e| ProxyError::InvalidTokenIdentifier(format!("'{}': {}", identifier, e)))?;
    String::from_utf8(bytes)
        .map_err(|e| ProxyError::InvalidTokenIdentifier(format!("'{}': {}", identifier, e)))
}

/// Even-length, zero-padded, lowercase hex of an NFT nonce.
pub fn nonce_hex(nonce: u64) -> String {
    let digits = format!("{:x}", nonce);
    if digits.len() % 2 == 1 {
        format!("0{}", digits)
    } else {
        digits
    }
}

/// Full identifier of one NFT/SFT instance.
pub fn nft_identifier(collection: &str, nonce: u64) -> Result<String, ProxyError> {
    let collection = normalize_token_identifier(collection)?;
    Ok(format!("{}-{}", collection, nonce_hex(nonce)))
}
