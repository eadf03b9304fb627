//! Ed25519 signer bound to one account.

use ed25519_dalek::{Signature, Signer as _, SigningKey, Verifier, VerifyingKey};
use mvx_primitives::Address;
use mvx_transaction::Signer;

use crate::WalletError;

/// Length in bytes of an Ed25519 secret key seed.
pub const SECRET_KEY_LENGTH: usize = 32;

/// An account signer holding an Ed25519 secret key.
pub struct Wallet {
    signing_key: SigningKey,
}

impl Wallet {
    /// Create a wallet from a 32-byte secret key seed.
    pub fn from_secret_key(secret_key: &[u8]) -> Result<Self, WalletError> {
        let seed: [u8; SECRET_KEY_LENGTH] = secret_key.try_into().map_err(|_| {
            WalletError::InvalidSecretKey(format!(
                "expected {} bytes, got {}",
                SECRET_KEY_LENGTH,
                secret_key.len()
            ))
        })?;
        Ok(Wallet {
            signing_key: SigningKey::from_bytes(&seed),
        })
    }

    /// Create a wallet from a hex-encoded secret key seed.
    pub fn from_secret_key_hex(secret_key_hex: &str) -> Result<Self, WalletError> {
        let bytes = hex::decode(secret_key_hex)
            .map_err(|e| WalletError::InvalidSecretKey(e.to_string()))?;
        Self::from_secret_key(&bytes)
    }

    /// The 32-byte public key.
    pub fn public_key(&self) -> [u8; 32] {
        self.signing_key.verifying_key().to_bytes()
    }

    /// The account address of this wallet.
    pub fn address(&self) -> Address {
        Address::from_pubkey_bytes(self.public_key())
    }

    /// Verify `signature` over `message` against this wallet's public key.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> Result<(), WalletError> {
        verify_signature(&self.public_key(), message, signature)
    }
}

impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet")
            .field("address", &self.address().to_string())
            .finish_non_exhaustive()
    }
}

impl Signer for Wallet {
    type Error = WalletError;

    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, WalletError> {
        Ok(self.signing_key.sign(message).to_bytes().to_vec())
    }
}

/// Verify an Ed25519 `signature` over `message` for the given public key.
pub fn verify_signature(public_key: &[u8; 32], message: &[u8], signature: &[u8]) -> Result<(), WalletError> {
    let key = VerifyingKey::from_bytes(public_key)
        .map_err(|e| WalletError::InvalidSignature(e.to_string()))?;
    let signature = Signature::from_slice(signature)
        .map_err(|e| WalletError::InvalidSignature(e.to_string()))?;
    key.verify(message, &signature)
        .map_err(|e| WalletError::InvalidSignature(e.to_string()))
}
