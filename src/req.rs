use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use tracing::warn;

use crate::{prelude::*, BaseUrl, Error};

/// API endpoint a request is posted to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Exchange,
    Info,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Exchange => "/exchange",
            Endpoint::Info => "/info",
        }
    }
}

/// Delivers an encoded request body and returns the raw response text.
///
/// Retry and rate limiting, if any, belong to the implementation.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(&self, endpoint: Endpoint, body: String) -> Result<String>;
}

#[derive(Deserialize, Debug)]
struct ErrorData {
    data: String,
    code: u16,
    msg: String,
}

#[derive(Debug, Clone)]
pub struct HttpClient {
    pub client: Client,
    pub base_url: String,
}

async fn parse_response(response: Response) -> Result<String> {
    let status_code = response.status().as_u16();
    let text = response
        .text()
        .await
        .map_err(|e| Error::GenericRequest(e.to_string()))?;

    if status_code < 400 {
        return Ok(text);
    }
    classify_error(status_code, text)
}

fn classify_error(status_code: u16, text: String) -> Result<String> {
    if (400..500).contains(&status_code) {
        let client_error = match serde_json::from_str::<ErrorData>(&text) {
            Ok(error_data) => Error::client_error(
                status_code,
                Some(error_data.code),
                error_data.msg,
                Some(error_data.data),
            ),
            Err(err) => Error::client_error(status_code, None, text, Some(err.to_string())),
        };
        return Err(client_error);
    }

    Err(Error::server_error(status_code, text))
}

impl HttpClient {
    pub fn new(client: Option<Client>, base_url: BaseUrl) -> Self {
        Self {
            client: client.unwrap_or_default(),
            base_url: base_url.get_url(),
        }
    }

    pub fn is_mainnet(&self) -> bool {
        self.base_url == BaseUrl::Mainnet.get_url()
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn post(&self, endpoint: Endpoint, body: String) -> Result<String> {
        let url_path = endpoint.path();
        let full_url = format!("{}{url_path}", self.base_url);

        let response = self
            .client
            .post(&full_url)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| Error::GenericRequest(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                status = status.as_u16(),
                url = %url_path,
                "Exchange returned error status"
            );
        }
        parse_response(response).await
    }
}
