//! Per-action accumulators handed out by [`ExchangeClient`].
//!
//! An [`ActionApi`] owns one request envelope, created on the first call that
//! touches it. The action-specific methods live next to the action they build
//! (`orders.rs`, `cancels.rs`, `modifies.rs`, `accounts.rs`).

use crate::{
    exchange::{
        actions::ExchangeAction, exchange_client::ExchangeClient,
        exchange_responses::ExchangeResponseStatus, request::ExchangeRequest,
    },
    prelude::*,
};

#[must_use = "an action does nothing until it is sent or turned into a request"]
#[derive(Debug)]
pub struct ActionApi<'a, A> {
    client: &'a ExchangeClient,
    req: Option<ExchangeRequest<A>>,
}

impl<'a, A: ExchangeAction> ActionApi<'a, A> {
    pub(crate) fn new(client: &'a ExchangeClient) -> Self {
        Self { client, req: None }
    }

    pub(crate) fn req_mut(&mut self) -> &mut ExchangeRequest<A> {
        self.req.get_or_insert_with(ExchangeRequest::default)
    }

    pub(crate) fn action_mut(&mut self) -> &mut A {
        self.req_mut().action_mut()
    }

    /// The envelope built so far; `None` until the first mutation.
    pub fn request(&self) -> Option<&ExchangeRequest<A>> {
        self.req.as_ref()
    }

    /// The envelope, created empty if nothing was added yet.
    pub fn into_request(self) -> ExchangeRequest<A> {
        self.req.unwrap_or_default()
    }

    /// Use this nonce instead of one from the client's nonce source.
    pub fn nonce(mut self, nonce: u64) -> Self {
        self.req_mut().set_nonce(nonce);
        self
    }

    /// Act for this vault instead of the client's default.
    pub fn vault_address(mut self, vault_address: impl Into<String>) -> Self {
        self.req_mut().set_vault_address(vault_address);
        self
    }

    /// Reject the request after this timestamp (ms).
    pub fn expires_after(mut self, expires_after: u64) -> Self {
        self.req_mut().set_expires_after(expires_after);
        self
    }

    /// Sign the envelope and post it to the exchange.
    pub async fn send(self) -> Result<ExchangeResponseStatus> {
        let client = self.client;
        client.execute(self.into_request()).await
    }
}
