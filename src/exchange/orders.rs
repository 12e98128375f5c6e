//! Order placement for ExchangeClient.
//!
//! ```
//! use hyperliquid_exchange_req::{ExchangeClient, ExchangeConfig, Grouping, LocalSigner, OrderBuilder, Tif};
//!
//! # fn main() -> Result<(), hyperliquid_exchange_req::Error> {
//! let signer = LocalSigner::from_private_key(
//!     "e908f86dbb4d55ac876378565aafeabc187f6690f046459397b17d9b9a19688e",
//!     false,
//! )?;
//! let client = ExchangeClient::new(ExchangeConfig::default(), signer);
//!
//! let mut builder = OrderBuilder::new();
//! builder.asset(0).is_buy(true).size("0.01").reduce_only(false).limit_tif(Tif::Gtc);
//! let req = client
//!     .order()
//!     .grouping(Grouping::Na)
//!     .add_order(builder.price("100").build())
//!     .add_order(builder.price("99").build())
//!     .nonce(1)
//!     .into_request();
//!
//! let prices: Vec<_> = req.action().orders().iter().filter_map(|o| o.price()).collect();
//! assert_eq!(prices, ["100", "99"]);
//! # Ok(())
//! # }
//! ```

use crate::exchange::{
    actions::{Grouping, OrderAction},
    api::ActionApi,
    builder::BuilderInfo,
    exchange_client::ExchangeClient,
    order::Order,
};

pub type OrderApi<'a> = ActionApi<'a, OrderAction>;

impl ExchangeClient {
    /// Start an order action.
    pub fn order(&self) -> OrderApi<'_> {
        ActionApi::new(self)
    }
}

impl OrderApi<'_> {
    /// Overwrite the action's `type` tag.
    pub fn action_type(mut self, action_type: impl Into<String>) -> Self {
        self.action_mut().action_type = Some(action_type.into());
        self
    }

    pub fn grouping(mut self, grouping: Grouping) -> Self {
        self.action_mut().grouping = Some(grouping);
        self
    }

    /// Attach a builder fee (tenths of a basis point).
    pub fn builder(mut self, builder: impl Into<String>, fee: u64) -> Self {
        self.action_mut().builder = Some(BuilderInfo::new(builder, fee));
        self
    }

    /// Append orders after the ones already added.
    pub fn add_orders(mut self, orders: impl IntoIterator<Item = Order>) -> Self {
        self.action_mut().orders.extend(orders);
        self
    }

    pub fn add_order(self, order: Order) -> Self {
        self.add_orders([order])
    }
}
