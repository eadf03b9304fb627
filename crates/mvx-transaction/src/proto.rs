//! Protobuf binary form of a transaction.
//!
//! The transaction hash is computed over this encoding, never over the JSON
//! text, so JSON formatting choices cannot change a transaction's identity.
//! Field tags match the network's canonical `Transaction` schema and are a
//! protocol contract.
//!
//! | Tag | Field     | Wire type |
//! |-----|-----------|-----------|
//! | 1   | Nonce     | uint64    |
//! | 2   | Value     | bytes     |
//! | 3   | RcvAddr   | bytes     |
//! | 5   | SndAddr   | bytes     |
//! | 7   | GasPrice  | uint64    |
//! | 8   | GasLimit  | uint64    |
//! | 9   | Data      | bytes     |
//! | 10  | ChainID   | bytes     |
//! | 11  | Version   | uint32    |
//! | 12  | Signature | bytes     |
//!
//! Tags 4 and 6 (receiver/sender user names) and 13 onwards are never set
//! by this SDK. Zero values and empty byte strings are omitted on the wire.

use mvx_primitives::bigint::to_unsigned_bytes_be;

use crate::transaction::{Transaction, VERSION};

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoTransaction {
    #[prost(uint64, tag = "1")]
    pub nonce: u64,

    #[prost(bytes = "vec", tag = "2")]
    pub value: Vec<u8>,

    #[prost(bytes = "vec", tag = "3")]
    pub rcv_addr: Vec<u8>,

    #[prost(bytes = "vec", tag = "5")]
    pub snd_addr: Vec<u8>,

    #[prost(uint64, tag = "7")]
    pub gas_price: u64,

    #[prost(uint64, tag = "8")]
    pub gas_limit: u64,

    #[prost(bytes = "vec", tag = "9")]
    pub data: Vec<u8>,

    #[prost(bytes = "vec", tag = "10")]
    pub chain_id: Vec<u8>,

    #[prost(uint32, tag = "11")]
    pub version: u32,

    #[prost(bytes = "vec", tag = "12")]
    pub signature: Vec<u8>,
}

impl From<&Transaction> for ProtoTransaction {
    fn from(tx: &Transaction) -> ProtoTransaction {
        ProtoTransaction {
            nonce:     tx.nonce,
            value:     to_unsigned_bytes_be(&tx.value),
            rcv_addr:  tx.receiver.pubkey().to_vec(),
            snd_addr:  tx.sender.pubkey().to_vec(),
            gas_price: tx.gas_price,
            gas_limit: tx.gas_limit,
            data:      tx.data.as_bytes().to_vec(),
            chain_id:  tx.chain_id.as_bytes().to_vec(),
            version:   VERSION,
            signature: tx.signature_bytes().to_vec(),
        }
    }
}
