//! Batch modify for ExchangeClient.

use crate::exchange::{
    actions::BatchModifyAction,
    api::ActionApi,
    exchange_client::ExchangeClient,
    modify::{Modify, ModifyOption},
};

pub type BatchModifyApi<'a> = ActionApi<'a, BatchModifyAction>;

impl ExchangeClient {
    /// Start a batch modify action.
    pub fn batch_modify(&self) -> BatchModifyApi<'_> {
        ActionApi::new(self)
    }
}

impl BatchModifyApi<'_> {
    /// Append one modify configured by `options`, applied in order.
    pub fn add_modify(self, options: impl IntoIterator<Item = ModifyOption>) -> Self {
        self.push_modify(Modify::from_options(options))
    }

    /// Append an already built modify.
    pub fn push_modify(mut self, modify: Modify) -> Self {
        self.action_mut().modifies.push(modify);
        self
    }
}
