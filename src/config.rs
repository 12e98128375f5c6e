//! Client configuration.

use serde::Deserialize;

use crate::helpers::BaseUrl;

/// Settings shared by every request an [`ExchangeClient`](crate::ExchangeClient) sends.
///
/// Deserializable so it can sit inside an application's own config file:
///
/// ```
/// use hyperliquid_exchange_req::{BaseUrl, ExchangeConfig};
///
/// let config: ExchangeConfig = serde_json::from_str(r#"{"base_url": "testnet"}"#).unwrap();
/// assert_eq!(config.base_url, BaseUrl::Testnet);
/// assert!(config.vault_address.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExchangeConfig {
    /// API host; mainnet unless set.
    pub base_url: BaseUrl,
    /// Vault or sub-account to act for, applied when a request sets none.
    pub vault_address: Option<String>,
    /// Expiry (ms timestamp) applied when a request sets none.
    pub expires_after: Option<u64>,
}

impl ExchangeConfig {
    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            base_url,
            ..Default::default()
        }
    }

    pub fn with_vault_address(mut self, vault_address: impl Into<String>) -> Self {
        self.vault_address = Some(vault_address.into());
        self
    }

    pub fn with_expires_after(mut self, expires_after: u64) -> Self {
        self.expires_after = Some(expires_after);
        self
    }

    pub fn is_mainnet(&self) -> bool {
        self.base_url.is_mainnet()
    }
}
