//! # mvx-proxy
//!
//! Client for the HTTP interface of a network proxy: chain configuration,
//! account state, token balances, and transaction submission.
//!
//! Every reply is wrapped in a `{data, error, code}` envelope; any reply
//! whose `error` is set or whose `code` is not `successful` surfaces as
//! [`ProxyError::ProtocolError`]. Token balance lookups are the exception:
//! a missing record means a zero balance, not a failure.
//!
//! # Example
//!
//! ```no_run
//! use mvx_proxy::{ProxyClient, ProxyConfig};
//! use mvx_primitives::Address;
//!
//! # async fn example() -> Result<(), mvx_proxy::ProxyError> {
//! let client = ProxyClient::new(ProxyConfig {
//!     base_url: "https://devnet-gateway.multiversx.com".to_string(),
//!     ..Default::default()
//! })?;
//!
//! let config = client.get_network_config().await?;
//! println!("chain: {}", config.chain_id);
//!
//! let alice = Address::from_bech32(
//!     "erd1qyu5wthldzr8wx5c9ucg8kjagg0jfs53s8nr3zpz3hypefsdd8ssycr6th",
//! )?;
//! let account = client.get_account(&alice).await?;
//! println!("nonce {} balance {}", account.nonce, account.balance);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod token;
pub mod types;


pub use client::ProxyClient;
pub use error::ProxyError;
pub use token::{nft_identifier, nonce_hex, normalize_token_identifier};
pub use types::{
    AccountOnNetwork, EsdtData, ProxyConfig, ResponseEnvelope, TokenLookup, SUCCESS_CODE,
};
