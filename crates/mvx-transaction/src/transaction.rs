//! Core transaction type.
//!
//! A transaction is mutable until it is sent. The caller fills in the input
//! fields; the signature and hash are derived artifacts owned by the
//! transaction and only change through [`Transaction::sign`],
//! [`Transaction::apply_signature`], [`Transaction::compute_hash`] and
//! [`Transaction::send`].

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use mvx_primitives::hash::blake2b_256;
use mvx_primitives::{Address, BigUint};
use prost::Message;

use crate::network_config::NetworkConfig;
use crate::proto::ProtoTransaction;
use crate::serializer::CanonicalTransaction;
use crate::signer::{Broadcaster, Signer};
use crate::TransactionError;

/// Transaction format version. Included in both encodings.
pub const VERSION: u32 = 1;

/// A value-transfer or smart-contract-call transaction.
///
/// # Canonical JSON
///
/// | Key       | Source                             |
/// |-----------|------------------------------------|
/// | nonce     | `nonce`                            |
/// | value     | `value` as base-10 string          |
/// | receiver  | `receiver` as bech32               |
/// | sender    | `sender` as bech32                 |
/// | gasPrice  | `gas_price`                        |
/// | gasLimit  | `gas_limit`                        |
/// | data      | base64 of `data`, only if non-empty |
/// | chainID   | `chain_id`                         |
/// | version   | [`VERSION`]                        |
/// | signature | hex signature, only once signed    |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    /// Sender account sequence number.
    pub nonce: u64,

    /// Amount transferred, in the smallest denomination.
    pub value: BigUint,

    /// Sending account.
    pub sender: Address,

    /// Receiving account (or contract).
    pub receiver: Address,

    /// Price per unit of gas.
    pub gas_price: u64,

    /// Maximum gas the transaction may consume.
    pub gas_limit: u64,

    /// Free-form payload (e.g. a contract call), UTF-8.
    pub data: String,

    /// Chain the transaction is meant for.
    pub chain_id: String,

    signature: Vec<u8>,
    tx_hash: String,
}

impl Transaction {
    /// Create a transaction with defaults taken from `config`.
    ///
    /// Nonce and value are zero, sender and receiver are the zero address,
    /// data is empty and gas price, gas limit and chain ID come from the
    /// network configuration.
    pub fn new(config: &NetworkConfig) -> Self {
        Transaction {
            nonce: 0,
            value: BigUint::default(),
            sender: Address::zero(),
            receiver: Address::zero(),
            gas_price: config.min_gas_price,
            gas_limit: config.min_gas_limit,
            data: String::new(),
            chain_id: config.chain_id.clone(),
            signature: Vec::new(),
            tx_hash: String::new(),
        }
    }

    // -----------------------------------------------------------------
    // Derived artifacts
    // -----------------------------------------------------------------

    /// The signature as lowercase hex; empty until signed.
    pub fn signature(&self) -> String {
        hex::encode(&self.signature)
    }

    /// The raw signature bytes; empty until signed.
    pub fn signature_bytes(&self) -> &[u8] {
        &self.signature
    }

    /// Whether a signature is stored.
    pub fn is_signed(&self) -> bool {
        !self.signature.is_empty()
    }

    /// The transaction hash as hex; empty until computed locally or
    /// assigned by the network on send.
    pub fn tx_hash(&self) -> &str {
        &self.tx_hash
    }

    /// Base64 encoding of the UTF-8 bytes of `data`.
    pub fn data_encoded(&self) -> String {
        BASE64.encode(self.data.as_bytes())
    }

    // -----------------------------------------------------------------
    // Canonical JSON
    // -----------------------------------------------------------------

    /// The field-ordered canonical form, including the signature if set.
    pub fn to_canonical(&self) -> Result<CanonicalTransaction, TransactionError> {
        CanonicalTransaction::from_transaction(self, true)
    }

    /// The canonical form as an insertion-ordered JSON object.
    pub fn to_map(&self) -> Result<serde_json::Map<String, serde_json::Value>, TransactionError> {
        self.to_canonical()?.to_map()
    }

    /// Serialize to canonical JSON text, including the signature if set.
    ///
    /// Pure function of the current field values.
    pub fn serialize(&self) -> Result<String, TransactionError> {
        self.to_canonical()?.to_json()
    }

    /// The bytes a signer must sign: the canonical JSON without the
    /// signature field.
    pub fn signable_bytes(&self) -> Result<Vec<u8>, TransactionError> {
        let json = CanonicalTransaction::from_transaction(self, false)?.to_json()?;
        Ok(json.into_bytes())
    }

    // -----------------------------------------------------------------
    // Signing
    // -----------------------------------------------------------------

    /// Sign the transaction and store the signature.
    ///
    /// Any previously stored signature is replaced. The signable bytes never
    /// include the old signature, so re-signing an unchanged transaction
    /// with a deterministic signer yields the same signature.
    pub fn sign<S: Signer>(&mut self, signer: &S) -> Result<(), TransactionError> {
        let message = self
            .signable_bytes()
            .map_err(|e| TransactionError::Signing(e.to_string()))?;

        let signature = signer
            .sign(&message)
            .map_err(|e| TransactionError::Signing(e.to_string()))?;

        if signature.is_empty() {
            return Err(TransactionError::Signing("signer returned an empty signature".to_string()));
        }

        self.signature = signature;
        tracing::debug!(nonce = self.nonce, "transaction signed");
        Ok(())
    }

    /// Store a signature produced outside of [`Transaction::sign`], e.g. by a
    /// hardware device that was handed [`Transaction::signable_bytes`].
    pub fn apply_signature(&mut self, signature: &[u8]) {
        self.signature = signature.to_vec();
    }

    // -----------------------------------------------------------------
    // Hashing
    // -----------------------------------------------------------------

    /// The protobuf message the hash is computed over.
    pub fn to_proto(&self) -> ProtoTransaction {
        ProtoTransaction::from(self)
    }

    /// The protobuf-encoded bytes the hash is computed over.
    pub fn to_proto_bytes(&self) -> Vec<u8> {
        self.to_proto().encode_to_vec()
    }

    /// Compute the transaction hash locally, store it and return it.
    ///
    /// BLAKE2b-256 over the protobuf encoding, hex-encoded. Includes the
    /// signature when one is stored. Never contacts the network, and is
    /// repeatable: an unchanged transaction always hashes the same.
    pub fn compute_hash(&mut self) -> String {
        let digest = blake2b_256(&self.to_proto_bytes());
        self.tx_hash = hex::encode(digest);
        tracing::debug!(nonce = self.nonce, tx_hash = %self.tx_hash, "transaction hash computed");
        self.tx_hash.clone()
    }

    // -----------------------------------------------------------------
    // Submission
    // -----------------------------------------------------------------

    /// Submit the transaction and store the hash the network assigned.
    ///
    /// Overwrites any locally computed hash.
    pub async fn send<B: Broadcaster>(&mut self, broadcaster: &B) -> Result<String, B::Error> {
        let tx_hash = broadcaster.send_transaction(self).await?;
        tracing::debug!(nonce = self.nonce, tx_hash = %tx_hash, "transaction accepted");
        self.tx_hash = tx_hash.clone();
        Ok(tx_hash)
    }
}

impl Default for Transaction {
    /// A transaction seeded from [`NetworkConfig::default`].
    fn default() -> Self {
        Self::new(&NetworkConfig::default())
    }
}
