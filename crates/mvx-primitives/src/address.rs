/// Account address handling.
///
/// An address is a raw 32-byte public key. Its human-readable form is the
/// bech32 encoding of the key under the `erd` prefix.

use std::fmt;
use std::str::FromStr;

use bech32::primitives::decode::CheckedHrpstring;
use bech32::{Bech32, Hrp};

use crate::PrimitivesError;

/// Human-readable prefix of every account address.
pub const ADDRESS_HRP: &str = "erd";

/// Length in bytes of an account public key.
pub const PUBKEY_LENGTH: usize = 32;

/// An account address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Address {
    pubkey: [u8; PUBKEY_LENGTH],
}

impl Address {
    /// The distinguished zero address (all-zero public key).
    ///
    /// Used as the default sender and receiver of a fresh transaction.
    pub const fn zero() -> Self {
        Address {
            pubkey: [0u8; PUBKEY_LENGTH],
        }
    }

    /// Create an address from a 32-byte public key.
    pub const fn from_pubkey_bytes(pubkey: [u8; PUBKEY_LENGTH]) -> Self {
        Address { pubkey }
    }

    /// Create an address from a raw public key.
    ///
    /// # Returns
    /// The address, or `InvalidAddressLength` unless `pubkey` is 32 bytes.
    pub fn from_public_key(pubkey: &[u8]) -> Result<Self, PrimitivesError> {
        let pubkey: [u8; PUBKEY_LENGTH] =
            pubkey
                .try_into()
                .map_err(|_| PrimitivesError::InvalidAddressLength {
                    expected: PUBKEY_LENGTH,
                    got: pubkey.len(),
                })?;
        Ok(Address { pubkey })
    }

    /// Create an address from a hex-encoded public key.
    pub fn from_hex(pubkey_hex: &str) -> Result<Self, PrimitivesError> {
        let bytes = hex::decode(pubkey_hex)?;
        Self::from_public_key(&bytes)
    }

    /// Parse a bech32 address string.
    ///
    /// Validates the checksum, the `erd` prefix and the payload length.
    /// Only the original bech32 checksum is accepted, never bech32m.
    pub fn from_bech32(addr: &str) -> Result<Self, PrimitivesError> {
        let checked = CheckedHrpstring::new::<Bech32>(addr)
            .map_err(|e| PrimitivesError::InvalidAddress(format!("'{}': {}", addr, e)))?;
        let hrp = checked.hrp();
        let data: Vec<u8> = checked.byte_iter().collect();

        if hrp.as_str() != ADDRESS_HRP {
            return Err(PrimitivesError::InvalidHrp {
                expected: ADDRESS_HRP.to_string(),
                got: hrp.to_string(),
            });
        }

        Self::from_public_key(&data)
    }

    /// Encode this address as a bech32 string.
    ///
    /// Encoding a well-formed key under the static prefix does not fail in
    /// practice; the error path surfaces codec failures instead of panicking.
    pub fn bech32(&self) -> Result<String, PrimitivesError> {
        let hrp = Hrp::parse(ADDRESS_HRP)
            .map_err(|e| PrimitivesError::InvalidAddress(e.to_string()))?;
        bech32::encode::<Bech32>(hrp, &self.pubkey)
            .map_err(|e| PrimitivesError::InvalidAddress(e.to_string()))
    }

    /// The raw 32-byte public key.
    pub fn pubkey(&self) -> &[u8; PUBKEY_LENGTH] {
        &self.pubkey
    }

    /// The public key as lowercase hex.
    pub fn to_hex(&self) -> String {
        hex::encode(self.pubkey)
    }

    /// Whether this is the zero address.
    pub fn is_zero(&self) -> bool {
        self.pubkey == [0u8; PUBKEY_LENGTH]
    }
}

impl Default for Address {
    fn default() -> Self {
        Self::zero()
    }
}

impl FromStr for Address {
    type Err = PrimitivesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bech32(s)
    }
}

impl fmt::Display for Address {
    /// Display the address as its bech32 string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = self.bech32().map_err(|_| fmt::Error)?;
        f.write_str(&encoded)
    }
}

#[cfg(test)]
mod tests {
    //! Tests for address parsing and encoding.
    //!
    //! Vectors are the well-known devnet test accounts (alice, bob) and the
    //! zero address.

    use super::*;

    const ALICE_BECH32: &str = "erd1qyu5wthldzr8wx5c9ucg8kjagg0jfs53s8nr3zpz3hypefsdd8ssycr6th";
    const ALICE_HEX: &str = "0139472eff6886771a982f3083da5d421f24c29181e63888228dc81ca60d69e1";
    const BOB_BECH32: &str = "erd1spyavw0956vq68xj8y4tenjpq2wd5a9p2c6j8gsz7ztyrnpxrruqzu66jx";
    const BOB_HEX: &str = "8049d639e5a6980d1cd2392abcce41029cda74a1563523a202f09641cc2618f8";

    #[test]
    fn test_from_bech32_known_vectors() {
        let alice = Address::from_bech32(ALICE_BECH32).unwrap();
        assert_eq!(alice.to_hex(), ALICE_HEX);

        let bob = Address::from_bech32(BOB_BECH32).unwrap();
        assert_eq!(bob.to_hex(), BOB_HEX);
    }

    #[test]
    fn test_bech32_from_hex() {
        let alice = Address::from_hex(ALICE_HEX).unwrap();
        assert_eq!(alice.bech32().unwrap(), ALICE_BECH32);
        assert_eq!(alice.to_string(), ALICE_BECH32);
    }

    #[test]
    fn test_zero_address() {
        let zero = Address::zero();
        assert!(zero.is_zero());
        assert_eq!(zero.pubkey(), &[0u8; 32]);
        let encoded = zero.bech32().unwrap();
        assert!(encoded.starts_with("erd1qqqqqqqq"));
        assert_eq!(Address::from_bech32(&encoded).unwrap(), zero);
        assert_eq!(Address::default(), zero);
    }

    #[test]
    fn test_bad_checksum() {
        let mut tampered = ALICE_BECH32.to_string();
        tampered.pop();
        tampered.push('q');
        assert!(matches!(
            Address::from_bech32(&tampered),
            Err(PrimitivesError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_bech32m_rejected() {
        let hrp = Hrp::parse(ADDRESS_HRP).unwrap();
        let bech32m = bech32::encode::<bech32::Bech32m>(hrp, &[7u8; 32]).unwrap();
        assert!(bech32m.starts_with("erd1"));
        assert!(matches!(
            Address::from_bech32(&bech32m),
            Err(PrimitivesError::InvalidAddress(_))
        ));

        let bech32 = bech32::encode::<Bech32>(hrp, &[7u8; 32]).unwrap();
        assert_eq!(Address::from_bech32(&bech32).unwrap().pubkey(), &[7u8; 32]);
    }

    #[test]
    fn test_from_pubkey_bytes() {
        let alice = Address::from_pubkey_bytes(Address::from_hex(ALICE_HEX).unwrap().pubkey);
        assert_eq!(alice.bech32().unwrap(), ALICE_BECH32);
    }

    #[test]
    fn test_wrong_prefix() {
        let hrp = Hrp::parse("abc").unwrap();
        let other = bech32::encode::<Bech32>(hrp, &[7u8; 32]).unwrap();
        match Address::from_bech32(&other) {
            Err(PrimitivesError::InvalidHrp { expected, got }) => {
                assert_eq!(expected, "erd");
                assert_eq!(got, "abc");
            }
            other => panic!("expected InvalidHrp, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_length() {
        let hrp = Hrp::parse(ADDRESS_HRP).unwrap();
        let short = bech32::encode::<Bech32>(hrp, &[1u8; 20]).unwrap();
        assert!(matches!(
            Address::from_bech32(&short),
            Err(PrimitivesError::InvalidAddressLength { expected: 32, got: 20 })
        ));
        assert!(Address::from_public_key(&[0u8; 33]).is_err());
    }

    #[test]
    fn test_from_str() {
        let bob: Address = BOB_BECH32.parse().unwrap();
        assert_eq!(bob.to_hex(), BOB_HEX);
        assert!("not-an-address".parse::<Address>().is_err());
    }
}
