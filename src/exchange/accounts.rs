//! Account-level settings for ExchangeClient.

use crate::{
    exchange::{actions::UpdateLeverageAction, api::ActionApi, exchange_client::ExchangeClient},
    helpers::owned,
};

pub type UpdateLeverageApi<'a> = ActionApi<'a, UpdateLeverageAction>;

impl ExchangeClient {
    /// Start an update-leverage action.
    pub fn update_leverage(&self) -> UpdateLeverageApi<'_> {
        ActionApi::new(self)
    }
}

impl UpdateLeverageApi<'_> {
    pub fn asset(mut self, asset: u32) -> Self {
        self.action_mut().asset = owned(&asset);
        self
    }

    /// `true` for cross margin, `false` for isolated.
    pub fn is_cross(mut self, is_cross: bool) -> Self {
        self.action_mut().is_cross = owned(&is_cross);
        self
    }

    pub fn leverage(mut self, leverage: u32) -> Self {
        self.action_mut().leverage = owned(&leverage);
        self
    }
}
