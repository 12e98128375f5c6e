//! Test doubles for exchange client tests.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;

use crate::{
    exchange::{
        exchange_client::ExchangeClient,
        signing::{LocalSigner, NonceSource},
    },
    prelude::*,
    req::{Endpoint, Transport},
};

pub(crate) const PRIVATE_KEY: &str =
    "e908f86dbb4d55ac876378565aafeabc187f6690f046459397b17d9b9a19688e";

pub(crate) const CANCEL_OK: &str =
    r#"{"status":"ok","response":{"type":"cancel","data":{"statuses":["success"]}}}"#;

/// Records every posted body and answers with a canned response.
#[derive(Clone)]
pub(crate) struct RecordingTransport {
    response: String,
    sent: Arc<Mutex<Vec<(Endpoint, String)>>>,
}

impl RecordingTransport {
    pub(crate) fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            sent: Arc::default(),
        }
    }

    pub(crate) fn sent(&self) -> Vec<(Endpoint, serde_json::Value)> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|(endpoint, body)| (*endpoint, serde_json::from_str(body).unwrap()))
            .collect()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn post(&self, endpoint: Endpoint, body: String) -> Result<String> {
        self.sent.lock().unwrap().push((endpoint, body));
        Ok(self.response.clone())
    }
}

/// Counts up from 1000.
#[derive(Debug)]
pub(crate) struct CountingNonce(AtomicU64);

impl Default for CountingNonce {
    fn default() -> Self {
        Self(AtomicU64::new(1000))
    }
}

impl NonceSource for CountingNonce {
    fn next_nonce(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst)
    }
}

pub(crate) fn test_client(transport: &RecordingTransport) -> ExchangeClient {
    let signer = LocalSigner::from_private_key(PRIVATE_KEY, false).unwrap();
    ExchangeClient::new(Default::default(), signer)
        .with_transport(transport.clone())
        .with_nonce_source(CountingNonce::default())
}
