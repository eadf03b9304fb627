use proptest::prelude::*;

use mvx_primitives::bigint::{from_unsigned_bytes_be, parse_decimal, to_unsigned_bytes_be};
use mvx_primitives::{Address, BigUint};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn unsigned_bytes_have_no_leading_zero(bytes in prop::collection::vec(any::<u8>(), 0..40)) {
        let value = from_unsigned_bytes_be(&bytes);
        let encoded = to_unsigned_bytes_be(&value);
        prop_assert!(encoded.first() != Some(&0));
        prop_assert_eq!(from_unsigned_bytes_be(&encoded), value);
    }

    #[test]
    fn decimal_text_matches_u128(v in any::<u128>()) {
        let parsed = parse_decimal(&v.to_string()).unwrap();
        prop_assert_eq!(parsed, BigUint::from(v));
    }

    #[test]
    fn address_bech32_recovers_pubkey(key in prop::array::uniform32(any::<u8>())) {
        let addr = Address::from_public_key(&key).unwrap();
        let encoded = addr.bech32().unwrap();
        prop_assert!(encoded.starts_with("erd1"));
        let decoded = Address::from_bech32(&encoded).unwrap();
        prop_assert_eq!(decoded.pubkey(), &key);
    }
}
