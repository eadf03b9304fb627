//! Canonical JSON form of a transaction.
//!
//! The JSON text produced here is the exact payload that gets signed and
//! submitted, so it must be reproduced bit-for-bit by every client:
//!
//! `nonce, value, receiver, sender, gasPrice, gasLimit, [data], chainID, version, [signature]`
//!
//! - `value` is a base-10 string.
//! - `data` is base64 of the UTF-8 bytes, present only when non-empty.
//! - `signature` is hex, present only when the transaction has been signed.
//! - Addresses are bech32.
//!
//! Field order follows struct declaration order. `serde_json` never
//! HTML-escapes `<`, `>` or `&`, which the signature check depends on.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::Serialize;

use crate::transaction::{Transaction, VERSION};
use crate::TransactionError;

/// Field-ordered canonical representation of a [`Transaction`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalTransaction {
    pub nonce: u64,
    pub value: String,
    pub receiver: String,
    pub sender: String,
    pub gas_price: u64,
    pub gas_limit: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(rename = "chainID")]
    pub chain_id: String,
    pub version: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

impl CanonicalTransaction {
    /// Build the canonical representation of `tx`.
    ///
    /// # Arguments
    /// * `tx` - The transaction.
    /// * `with_signature` - Whether to carry the stored signature (if any).
    ///   The signable form never carries it.
    ///
    /// # Returns
    /// The canonical form, or `TransactionError::Serialization` if either
    /// address cannot be encoded.
    pub fn from_transaction(tx: &Transaction, with_signature: bool) -> Result<Self, TransactionError> {
        let receiver = tx
            .receiver
            .bech32()
            .map_err(|e| TransactionError::Serialization(format!("receiver: {}", e)))?;
        let sender = tx
            .sender
            .bech32()
            .map_err(|e| TransactionError::Serialization(format!("sender: {}", e)))?;

        let data = if tx.data.is_empty() {
            None
        } else {
            Some(BASE64.encode(tx.data.as_bytes()))
        };

        let signature = if with_signature && !tx.signature_bytes().is_empty() {
            Some(tx.signature())
        } else {
            None
        };

        Ok(CanonicalTransaction {
            nonce: tx.nonce,
            value: tx.value.to_str_radix(10),
            receiver,
            sender,
            gas_price: tx.gas_price,
            gas_limit: tx.gas_limit,
            data,
            chain_id: tx.chain_id.clone(),
            version: VERSION,
            signature,
        })
    }

    /// Render the canonical JSON text.
    pub fn to_json(&self) -> Result<String, TransactionError> {
        serde_json::to_string(self).map_err(|e| TransactionError::Serialization(e.to_string()))
    }

    /// Render as an insertion-ordered JSON object.
    pub fn to_map(&self) -> Result<serde_json::Map<String, serde_json::Value>, TransactionError> {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => Ok(map),
            Ok(other) => Err(TransactionError::Serialization(format!(
                "expected a JSON object, got {}",
                other
            ))),
            Err(e) => Err(TransactionError::Serialization(e.to_string())),
        }
    }
}
