//! Proxy data types: configuration, response envelope, and payload models.

use std::time::Duration;

use mvx_primitives::bigint::{decimal, decimal_opt};
use mvx_transaction::NetworkConfig;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::error::ProxyError;

/// The `code` value of a successful envelope.
pub const SUCCESS_CODE: &str = "successful";

/// Configuration for a [`ProxyClient`](crate::ProxyClient).
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// Base URL of the proxy (e.g. `https://gateway.multiversx.com`).
    pub base_url: String,
    /// Overall request timeout. `None` leaves the transport default.
    pub timeout: Option<Duration>,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            base_url: "https://gateway.multiversx.com".to_string(),
            timeout: None,
        }
    }
}

// -----------------------------------------------------------------------
// Envelope
// -----------------------------------------------------------------------

/// Envelope wrapping every proxy reply: `{data, error, code}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseEnvelope<T> {
    /// Operation payload; absent or `null` on failure.
    pub data: Option<T>,
    /// Human-readable error, empty or absent on success.
    pub error: Option<String>,
    /// Machine-readable status, `successful` on success.
    pub code: Option<String>,
}

impl<T> ResponseEnvelope<T> {
    /// Whether the envelope signals success.
    pub fn is_success(&self) -> bool {
        self.error.as_deref().unwrap_or_default().is_empty()
            && self.code.as_deref() == Some(SUCCESS_CODE)
    }

    /// Unwrap the payload.
    ///
    /// # Returns
    /// The payload, or `ProxyError::ProtocolError` carrying the server's
    /// error message when one is set, otherwise its code. A successful
    /// envelope without data is also a protocol error.
    pub fn into_result(self) -> Result<T, ProxyError> {
        if let Some(error) = self.error.filter(|e| !e.is_empty()) {
            return Err(ProxyError::ProtocolError(error));
        }

        let code = self.code.unwrap_or_default();
        if code != SUCCESS_CODE {
            return Err(ProxyError::ProtocolError(code));
        }

        self.data
            .ok_or_else(|| ProxyError::ProtocolError("missing response data".to_string()))
    }
}

// -----------------------------------------------------------------------
// Network config
// -----------------------------------------------------------------------

/// `data` of the `network/config` envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkConfigWrapper {
    pub config: NetworkConfigPayload,
}

/// Network parameters as reported by the proxy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfigPayload {
    #[serde(rename = "erd_chain_id")]
    pub chain_id: String,
    #[serde(rename = "erd_gas_per_data_byte")]
    pub gas_per_data_byte: u64,
    #[serde(rename = "erd_min_gas_limit")]
    pub min_gas_limit: u64,
    #[serde(rename = "erd_min_gas_price")]
    pub min_gas_price: u64,
    #[serde(rename = "erd_min_transaction_version")]
    pub min_transaction_version: u32,
}

impl From<NetworkConfigPayload> for NetworkConfig {
    fn from(payload: NetworkConfigPayload) -> Self {
        NetworkConfig {
            chain_id: payload.chain_id,
            gas_per_data_byte: payload.gas_per_data_byte,
            min_gas_limit: payload.min_gas_limit,
            min_gas_price: payload.min_gas_price,
            min_transaction_version: payload.min_transaction_version,
        }
    }
}

// -----------------------------------------------------------------------
// Account
// -----------------------------------------------------------------------

/// `data` of the `address/{bech32}` envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountWrapper {
    pub account: AccountOnNetwork,
}

/// Account state as reported by the proxy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountOnNetwork {
    /// Next nonce the account must use.
    #[serde(default)]
    pub nonce: u64,
    /// Balance in the smallest denomination.
    #[serde(with = "decimal")]
    pub balance: BigUint,
}

// -----------------------------------------------------------------------
// Tokens
// -----------------------------------------------------------------------

/// Outcome of a token balance lookup.
///
/// The network answers "no such token for this account" without an error
/// code, so a missing record is a regular outcome rather than a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenLookup<T> {
    /// The account holds a record for the token.
    Found(T),
    /// The account holds no record for the token.
    NotFound,
}

impl<T> TokenLookup<T> {
    /// Whether a record was found.
    pub fn is_found(&self) -> bool {
        matches!(self, TokenLookup::Found(_))
    }

    /// The record, if found.
    pub fn found(self) -> Option<T> {
        match self {
            TokenLookup::Found(value) => Some(value),
            TokenLookup::NotFound => None,
        }
    }
}

impl<T: Default> TokenLookup<T> {
    /// The record, or the empty (all-zero) record when not found.
    pub fn unwrap_or_default(self) -> T {
        self.found().unwrap_or_default()
    }
}

/// Fungible token (ESDT) record of an account.
///
/// The default value is the empty record: zero amounts and empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EsdtData {
    pub name: String,
    pub decimals: u32,
    pub owner: String,
    pub minted: BigUint,
    pub balance: BigUint,
    pub burnt: BigUint,
}

impl EsdtData {
    /// The record reported for tokens the account does not hold.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Raw ESDT body; every field may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EsdtDataPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub decimals: Option<u32>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default, with = "decimal_opt")]
    pub minted: Option<BigUint>,
    #[serde(default, with = "decimal_opt")]
    pub balance: Option<BigUint>,
    #[serde(default, with = "decimal_opt")]
    pub burnt: Option<BigUint>,
}

impl EsdtDataPayload {
    /// Classify the raw body: a record without a balance is not found.
    pub fn into_lookup(self) -> TokenLookup<EsdtData> {
        match self.balance {
            Some(balance) => TokenLookup::Found(EsdtData {
                name: self.name.unwrap_or_default(),
                decimals: self.decimals.unwrap_or_default(),
                owner: self.owner.unwrap_or_default(),
                minted: self.minted.unwrap_or_default(),
                balance,
                burnt: self.burnt.unwrap_or_default(),
            }),
            None => TokenLookup::NotFound,
        }
    }
}

/// Raw NFT/SFT body; only the balance is of interest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NftDataPayload {
    #[serde(default, with = "decimal_opt")]
    pub balance: Option<BigUint>,
}

impl NftDataPayload {
    /// Classify the raw body: a record without a balance is not found.
    pub fn into_lookup(self) -> TokenLookup<BigUint> {
        match self.balance {
            Some(balance) => TokenLookup::Found(balance),
            None => TokenLookup::NotFound,
        }
    }
}

// -----------------------------------------------------------------------
// Transaction submission
// -----------------------------------------------------------------------

/// `data` of the `transaction/send` envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct SendTransactionPayload {
    #[serde(rename = "txHash")]
    pub tx_hash: String,
}
