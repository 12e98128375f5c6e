//! Core ExchangeClient implementation.
//!
//! The ExchangeClient binds the request layer to its collaborators:
//! - a [`Transport`] that posts the encoded envelope
//! - an [`ActionSigner`] that signs the binary encoding of the action
//! - a [`NonceSource`] for requests that carry no explicit nonce
//!
//! Facades for each action are added in submodules:
//! - `orders` - Order placement
//! - `cancels` - Cancellation by oid and by cloid
//! - `modifies` - Batch modify
//! - `accounts` - Leverage updates

use std::sync::Arc;

use log::debug;

use crate::{
    config::ExchangeConfig,
    exchange::{
        actions::ExchangeAction,
        exchange_responses::ExchangeResponseStatus,
        request::ExchangeRequest,
        signing::{ActionSigner, LocalSigner, NonceSource, TimestampNonce},
    },
    prelude::*,
    req::{Endpoint, HttpClient, Transport},
    Error,
};

pub struct ExchangeClient {
    pub transport: Arc<dyn Transport>,
    pub signer: Arc<dyn ActionSigner>,
    pub nonces: Arc<dyn NonceSource>,
    pub vault_address: Option<String>,
    pub expires_after: Option<u64>,
}

// Security: signer details stay out of Debug output
impl std::fmt::Debug for ExchangeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExchangeClient")
            .field("signer", &"<redacted>")
            .field("vault_address", &self.vault_address)
            .field("expires_after", &self.expires_after)
            .finish()
    }
}

impl ExchangeClient {
    /// Client posting over HTTP to `config.base_url`, with timestamp nonces.
    pub fn new(config: ExchangeConfig, signer: impl ActionSigner + 'static) -> ExchangeClient {
        ExchangeClient {
            transport: Arc::new(HttpClient::new(None, config.base_url)),
            signer: Arc::new(signer),
            nonces: Arc::new(TimestampNonce::new()),
            vault_address: config.vault_address,
            expires_after: config.expires_after,
        }
    }

    /// Client signing with a local private key for the network in `config`.
    pub fn from_private_key(config: ExchangeConfig, private_key: &str) -> Result<ExchangeClient> {
        let signer = LocalSigner::from_private_key(private_key, config.is_mainnet())?;
        Ok(Self::new(config, signer))
    }

    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Arc::new(transport);
        self
    }

    pub fn with_nonce_source(mut self, nonces: impl NonceSource + 'static) -> Self {
        self.nonces = Arc::new(nonces);
        self
    }

    /// Fill the envelope fields the caller left unset and sign it.
    ///
    /// An explicit nonce, vault or expiry on the request wins over the
    /// client's defaults.
    pub fn sign_request<A: ExchangeAction>(
        &self,
        mut req: ExchangeRequest<A>,
    ) -> Result<ExchangeRequest<A>> {
        if req.nonce().is_none() {
            req.set_nonce(self.nonces.next_nonce());
        }
        if req.vault_address().is_none() {
            if let Some(vault_address) = &self.vault_address {
                req.set_vault_address(vault_address.clone());
            }
        }
        if req.expires_after().is_none() {
            if let Some(expires_after) = self.expires_after {
                req.set_expires_after(expires_after);
            }
        }

        let payload = req.signing_payload()?;
        let signature = self.signer.sign_l1_action(&payload)?;
        req.set_signature(signature);
        Ok(req)
    }

    /// Sign and post one request. Failures are returned as-is; nothing is retried.
    pub async fn execute<A: ExchangeAction>(
        &self,
        req: ExchangeRequest<A>,
    ) -> Result<ExchangeResponseStatus> {
        let req = self.sign_request(req)?;
        let body = req.to_json_string()?;
        self.post(body).await
    }

    pub(crate) async fn post(&self, body: String) -> Result<ExchangeResponseStatus> {
        // Note: Not logging request payload as it contains signatures
        debug!("Sending exchange request");
        let output = self.transport.post(Endpoint::Exchange, body).await?;
        // Note: Not logging response as it may contain sensitive data
        debug!("Received exchange response");
        serde_json::from_str(&output).map_err(|e| Error::json_parse(e.to_string()))
    }
}
