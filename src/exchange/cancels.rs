//! Cancel-related methods for ExchangeClient.
//!
//! This module contains the cancel accumulators:
//! - Cancellation by exchange order id
//! - Cancellation by client order id (cloid)

use uuid::Uuid;

use crate::exchange::{
    actions::{CancelAction, CancelByCloidAction},
    api::ActionApi,
    cancel::{Cancel, CancelByCloid},
    exchange_client::ExchangeClient,
};

pub type CancelApi<'a> = ActionApi<'a, CancelAction>;
pub type CancelByCloidApi<'a> = ActionApi<'a, CancelByCloidAction>;

impl ExchangeClient {
    /// Start a cancel-by-oid action.
    pub fn cancel(&self) -> CancelApi<'_> {
        ActionApi::new(self)
    }

    /// Start a cancel-by-cloid action.
    pub fn cancel_by_cloid(&self) -> CancelByCloidApi<'_> {
        ActionApi::new(self)
    }
}

impl CancelApi<'_> {
    pub fn add_cancel_order(mut self, cancels: impl IntoIterator<Item = Cancel>) -> Self {
        self.action_mut().cancels.extend(cancels);
        self
    }

    pub fn add_cancel(self, asset: u32, oid: u64) -> Self {
        self.add_cancel_order([Cancel::new(asset, oid)])
    }
}

impl CancelByCloidApi<'_> {
    pub fn add_cancel_by_cloid(mut self, cancels: impl IntoIterator<Item = CancelByCloid>) -> Self {
        self.action_mut().cancels.extend(cancels);
        self
    }

    pub fn add_cancel_uuid(self, asset: u32, cloid: Uuid) -> Self {
        self.add_cancel_by_cloid([CancelByCloid::from_uuid(asset, cloid)])
    }
}
