//! Codec for arbitrary-precision unsigned values.
//!
//! Transaction values exceed the native integer range, so they are carried
//! as [`BigUint`]. The binary transaction format stores them as the minimal
//! big-endian magnitude (no sign byte, no two's-complement padding), and the
//! JSON formats carry them as base-10 strings.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::PrimitivesError;

/// Encode a value as its minimal big-endian byte string.
///
/// Zero encodes as the empty byte string.
///
/// # Arguments
/// * `value` - The value to encode.
///
/// # Returns
/// The big-endian magnitude bytes, without leading zeros.
pub fn to_unsigned_bytes_be(value: &BigUint) -> Vec<u8> {
    if value.is_zero() {
        return Vec::new();
    }
    value.to_bytes_be()
}

/// Decode a big-endian byte string into a value.
///
/// The empty byte string decodes as zero; leading zero bytes are ignored.
pub fn from_unsigned_bytes_be(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Parse a base-10 string into a value.
///
/// # Returns
/// The parsed value, or `PrimitivesError::InvalidNumber` when the text is
/// empty or contains anything other than ASCII digits.
pub fn parse_decimal(text: &str) -> Result<BigUint, PrimitivesError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PrimitivesError::InvalidNumber(text.to_string()));
    }
    BigUint::parse_bytes(text.as_bytes(), 10)
        .ok_or_else(|| PrimitivesError::InvalidNumber(text.to_string()))
}

/// Serde adapter carrying a [`BigUint`] as a base-10 string.
///
/// Deserialization also accepts JSON integers of any size, since node
/// responses are not consistent about quoting balances. Integers beyond
/// `u64` need serde_json's `arbitrary_precision` feature, which hands the
/// number over as its literal text.
pub mod decimal {
    use num_bigint::BigUint;
    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_str_radix(10))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BigUint, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DecimalVisitor)
    }

    pub(super) struct DecimalVisitor;

    impl<'de> Visitor<'de> for DecimalVisitor {
        type Value = BigUint;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a non-negative integer or its base-10 string form")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<BigUint, E> {
            Ok(BigUint::from(v))
        }

        fn visit_u128<E: de::Error>(self, v: u128) -> Result<BigUint, E> {
            Ok(BigUint::from(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<BigUint, E> {
            u64::try_from(v)
                .map(BigUint::from)
                .map_err(|_| E::custom(format!("negative value {}", v)))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<BigUint, E> {
            super::parse_decimal(v).map_err(E::custom)
        }

        // serde_json with `arbitrary_precision` presents every number as a
        // single-entry map keyed by this token.
        fn visit_map<A: de::MapAccess<'de>>(self, mut map: A) -> Result<BigUint, A::Error> {
            match map.next_key::<String>()? {
                Some(key) if key == ARBITRARY_NUMBER_TOKEN => {
                    let text: String = map.next_value()?;
                    super::parse_decimal(&text).map_err(de::Error::custom)
                }
                _ => Err(de::Error::invalid_type(de::Unexpected::Map, &self)),
            }
        }
    }

    const ARBITRARY_NUMBER_TOKEN: &str = "$serde_json::private::Number";
}

/// Like [`decimal`], but for optional fields: `null` and absent map to `None`.
///
/// Use together with `#[serde(default)]`.
pub mod decimal_opt {
    use num_bigint::BigUint;
    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S>(value: &Option<BigUint>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => serializer.serialize_some(&v.to_str_radix(10)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<BigUint>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(OptionalDecimalVisitor)
    }

    struct OptionalDecimalVisitor;

    impl<'de> Visitor<'de> for OptionalDecimalVisitor {
        type Value = Option<BigUint>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("null, a non-negative integer or its base-10 string form")
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer
                .deserialize_any(super::decimal::DecimalVisitor)
                .map(Some)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Amount {
        #[serde(with = "decimal")]
        value: BigUint,
        #[serde(default, with = "decimal_opt")]
        fee: Option<BigUint>,
    }

    #[test]
    fn zero_encodes_empty() {
        assert!(to_unsigned_bytes_be(&BigUint::zero()).is_empty());
        assert_eq!(from_unsigned_bytes_be(&[]), BigUint::zero());
    }

    #[test]
    fn encodes_minimal_big_endian() {
        assert_eq!(to_unsigned_bytes_be(&BigUint::from(1u32)), vec![0x01]);
        assert_eq!(to_unsigned_bytes_be(&BigUint::from(255u32)), vec![0xff]);
        assert_eq!(to_unsigned_bytes_be(&BigUint::from(256u32)), vec![0x01, 0x00]);
        // 1 EGLD = 10^18
        let one_egld = parse_decimal("1000000000000000000").unwrap();
        assert_eq!(
            hex::encode(to_unsigned_bytes_be(&one_egld)),
            "0de0b6b3a7640000"
        );
    }

    #[test]
    fn high_bit_gets_no_sign_padding() {
        let v = BigUint::from(0x80u32);
        assert_eq!(to_unsigned_bytes_be(&v), vec![0x80]);
    }

    #[test]
    fn decode_ignores_leading_zeros() {
        assert_eq!(from_unsigned_bytes_be(&[0, 0, 1, 0]), BigUint::from(256u32));
    }

    #[test]
    fn parse_decimal_rejects_garbage() {
        assert!(parse_decimal("").is_err());
        assert!(parse_decimal("-1").is_err());
        assert!(parse_decimal("12a").is_err());
        assert!(parse_decimal("+5").is_err());
    }

    #[test]
    fn parse_decimal_beyond_u128() {
        let text = "340282366920938463463374607431768211456"; // 2^128
        let v = parse_decimal(text).unwrap();
        assert_eq!(v.to_str_radix(10), text);
    }

    #[test]
    fn decimal_serde_string_and_number() {
        let a: Amount = serde_json::from_str(r#"{"value":"123456789012345678901234567890"}"#).unwrap();
        assert_eq!(a.value.to_str_radix(10), "123456789012345678901234567890");
        assert!(a.fee.is_none());

        let b: Amount = serde_json::from_str(r#"{"value":42,"fee":"7"}"#).unwrap();
        assert_eq!(b.value, BigUint::from(42u32));
        assert_eq!(b.fee, Some(BigUint::from(7u32)));

        let c: Amount = serde_json::from_str(r#"{"value":"0","fee":null}"#).unwrap();
        assert!(c.fee.is_none());
    }

    #[test]
    fn decimal_serde_number_beyond_u64() {
        let a: Amount =
            serde_json::from_str(r#"{"value":100000000000000000000,"fee":340282366920938463463374607431768211456}"#)
                .unwrap();
        assert_eq!(a.value.to_str_radix(10), "100000000000000000000");
        assert_eq!(
            a.fee.map(|f| f.to_str_radix(10)),
            Some("340282366920938463463374607431768211456".to_string())
        );

        let v = serde_json::json!({"value": 18446744073709551616u128});
        let b: Amount = serde_json::from_value(v).unwrap();
        assert_eq!(b.value.to_str_radix(10), "18446744073709551616");
    }

    #[test]
    fn decimal_serde_rejects_fractions() {
        let r: Result<Amount, _> = serde_json::from_str(r#"{"value":1.5}"#);
        assert!(r.is_err());
    }

    #[test]
    fn decimal_serde_rejects_negative() {
        let r: Result<Amount, _> = serde_json::from_str(r#"{"value":-3}"#);
        assert!(r.is_err());
    }

    #[test]
    fn decimal_serializes_as_string() {
        let a = Amount {
            value: BigUint::from(10u32),
            fee: None,
        };
        assert_eq!(serde_json::to_string(&a).unwrap(), r#"{"value":"10","fee":null}"#);
    }
}
