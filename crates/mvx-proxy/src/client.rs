//! Proxy HTTP client for network state queries and transaction submission.

use mvx_primitives::Address;
use mvx_transaction::{Broadcaster, NetworkConfig, Transaction};
use num_bigint::BigUint;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;

use crate::error::ProxyError;
use crate::token::{nft_identifier, normalize_token_identifier};
use crate::types::{
    AccountOnNetwork, AccountWrapper, EsdtData, EsdtDataPayload, NetworkConfigWrapper,
    NftDataPayload, ProxyConfig, ResponseEnvelope, SendTransactionPayload, TokenLookup,
};

/// Content type of every POST body.
const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// HTTP client for the network proxy.
///
/// Every operation is exactly one request/response round trip; nothing is
/// retried. Cloning shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ProxyClient {
    /// Client configuration.
    config: ProxyConfig,
    /// Underlying HTTP client.
    client: reqwest::Client,
}

impl ProxyClient {
    /// Create a new proxy client with the given configuration.
    pub fn new(config: ProxyConfig) -> Result<Self, ProxyError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self::with_client(config, client))
    }

    /// Create a proxy client on top of an existing transport handle.
    pub fn with_client(mut config: ProxyConfig, client: reqwest::Client) -> Self {
        let trimmed = config.base_url.trim_end_matches('/').len();
        config.base_url.truncate(trimmed);
        Self { config, client }
    }

    /// The configured base URL, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Fetch the network's transaction parameters.
    pub async fn get_network_config(&self) -> Result<NetworkConfig, ProxyError> {
        let envelope: ResponseEnvelope<NetworkConfigWrapper> = self.do_get("network/config").await?;
        let wrapper = self.unwrap_envelope("network/config", envelope)?;
        Ok(wrapper.config.into())
    }

    /// Fetch the nonce and balance of an account.
    pub async fn get_account(&self, address: &Address) -> Result<AccountOnNetwork, ProxyError> {
        let path = format!("address/{}", address.bech32()?);
        let envelope: ResponseEnvelope<AccountWrapper> = self.do_get(&path).await?;
        Ok(self.unwrap_envelope(&path, envelope)?.account)
    }

    /// Look up an account's fungible token record.
    ///
    /// `token_identifier` may be in display form (`MEX-abcdef`) or hex.
    pub async fn lookup_esdt_data(
        &self,
        address: &Address,
        token_identifier: &str,
    ) -> Result<TokenLookup<EsdtData>, ProxyError> {
        let token = normalize_token_identifier(token_identifier)?;
        let path = format!("accounts/{}/tokens/{}", address.bech32()?, token);
        let payload: Option<EsdtDataPayload> = self.do_get_optional(&path).await?;
        Ok(payload.unwrap_or_default().into_lookup())
    }

    /// Fetch an account's fungible token record.
    ///
    /// Tokens the account does not hold yield [`EsdtData::empty`] rather
    /// than an error.
    pub async fn get_esdt_data(
        &self,
        address: &Address,
        token_identifier: &str,
    ) -> Result<EsdtData, ProxyError> {
        Ok(self
            .lookup_esdt_data(address, token_identifier)
            .await?
            .unwrap_or_default())
    }

    /// Look up an account's balance of one NFT/SFT instance.
    pub async fn lookup_nft_balance(
        &self,
        address: &Address,
        token_identifier: &str,
        nonce: u64,
    ) -> Result<TokenLookup<BigUint>, ProxyError> {
        let nft_id = nft_identifier(token_identifier, nonce)?;
        let path = format!("accounts/{}/nfts/{}", address.bech32()?, nft_id);
        let payload: Option<NftDataPayload> = self.do_get_optional(&path).await?;
        Ok(payload.unwrap_or_default().into_lookup())
    }

    /// Fetch an account's balance of one NFT/SFT instance.
    ///
    /// Instances the account does not hold yield zero rather than an error.
    pub async fn get_nft_balance(
        &self,
        address: &Address,
        token_identifier: &str,
        nonce: u64,
    ) -> Result<BigUint, ProxyError> {
        Ok(self
            .lookup_nft_balance(address, token_identifier, nonce)
            .await?
            .unwrap_or_default())
    }

    /// Submit a signed transaction and return the hash the network assigned.
    pub async fn send_transaction(&self, tx: &Transaction) -> Result<String, ProxyError> {
        let body = tx.serialize()?;
        let envelope: ResponseEnvelope<SendTransactionPayload> =
            self.do_post("transaction/send", body).await?;
        let payload = self.unwrap_envelope("transaction/send", envelope)?;
        tracing::debug!(nonce = tx.nonce, tx_hash = %payload.tx_hash, "transaction submitted");
        Ok(payload.tx_hash)
    }

    /// Perform a GET request and deserialize the response body.
    async fn do_get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ProxyError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");

        let resp = self.client.get(&url).send().await?;
        let text = resp.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Perform a GET request whose body may be empty; an empty body decodes
    /// as `None`.
    async fn do_get_optional<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, ProxyError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");

        let resp = self.client.get(&url).send().await?;
        let text = resp.text().await?;
        if text.trim().is_empty() {
            return Ok(None);
        }
        Ok(serde_json::from_str(&text)?)
    }

    /// Perform a POST request with a JSON body and deserialize the response body.
    async fn do_post<T: DeserializeOwned>(&self, path: &str, body: String) -> Result<T, ProxyError> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");

        let resp = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))
            .body(body)
            .send()
            .await?;
        let text = resp.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Unwrap an envelope, logging protocol errors.
    fn unwrap_envelope<T>(&self, path: &str, envelope: ResponseEnvelope<T>) -> Result<T, ProxyError> {
        envelope.into_result().map_err(|e| {
            tracing::warn!(path, error = %e, "proxy returned an error");
            e
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url, path)
    }
}

impl Broadcaster for ProxyClient {
    type Error = ProxyError;

    async fn send_transaction(&self, tx: &Transaction) -> Result<String, ProxyError> {
        ProxyClient::send_transaction(self, tx).await
    }
}
