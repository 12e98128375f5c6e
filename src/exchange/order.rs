//! Order placement types and the reusable [`OrderBuilder`].

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

use crate::{exchange::request::RequiredFields, helpers::owned, serde_utils::required};

/// Time-in-force of a limit order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub enum Tif {
    /// Add liquidity only (post-only).
    Alo,
    /// Immediate or cancel.
    Ioc,
    /// Good till cancel.
    Gtc,
}

impl Tif {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tif::Alo => "Alo",
            Tif::Ioc => "Ioc",
            Tif::Gtc => "Gtc",
        }
    }
}

impl Serialize for Tif {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.as_str())
    }
}

impl fmt::Display for Tif {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tif {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Alo" => Ok(Tif::Alo),
            "Ioc" => Ok(Tif::Ioc),
            "Gtc" => Ok(Tif::Gtc),
            other => Err(format!("unknown time-in-force: {other}")),
        }
    }
}

/// Take-profit / stop-loss tag of a trigger order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tpsl {
    Tp,
    Sl,
}

impl Tpsl {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tpsl::Tp => "tp",
            Tpsl::Sl => "sl",
        }
    }
}

impl Serialize for Tpsl {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.as_str())
    }
}

impl fmt::Display for Tpsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tpsl {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tp" => Ok(Tpsl::Tp),
            "sl" => Ok(Tpsl::Sl),
            other => Err(format!("unknown tpsl: {other}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limit {
    pub tif: Tif,
}

/// Field order matters: it is part of the signed binary encoding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trigger {
    pub is_market: bool,
    pub trigger_px: String,
    pub tpsl: Tpsl,
}

/// Limit or trigger parameters of an order. Encodes as `{"limit": {..}}` or
/// `{"trigger": {..}}`; the other branch is never present.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderType {
    Limit(Limit),
    Trigger(Trigger),
}

impl OrderType {
    pub fn limit(&self) -> Option<&Limit> {
        match self {
            OrderType::Limit(limit) => Some(limit),
            OrderType::Trigger(_) => None,
        }
    }

    pub fn trigger(&self) -> Option<&Trigger> {
        match self {
            OrderType::Trigger(trigger) => Some(trigger),
            OrderType::Limit(_) => None,
        }
    }
}

/// A finalized order line item.
///
/// Produced by [`OrderBuilder::build`]; there are no setters. Every field the
/// exchange requires is still an `Option` here so that an incomplete order can
/// be built, and is reported as missing only when the request is encoded.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    #[serde(rename = "a", serialize_with = "required")]
    asset: Option<u32>,
    #[serde(rename = "b", serialize_with = "required")]
    is_buy: Option<bool>,
    /// Decimal string; never a float, the exact text is signed.
    #[serde(rename = "p", serialize_with = "required")]
    price: Option<String>,
    #[serde(rename = "s", serialize_with = "required")]
    size: Option<String>,
    #[serde(rename = "r", serialize_with = "required")]
    reduce_only: Option<bool>,
    #[serde(rename = "t", serialize_with = "required")]
    order_type: Option<OrderType>,
    #[serde(rename = "c", skip_serializing_if = "Option::is_none")]
    client_order_id: Option<String>,
}

impl Order {
    pub fn builder() -> OrderBuilder {
        OrderBuilder::new()
    }

    pub fn asset(&self) -> Option<u32> {
        self.asset
    }

    pub fn is_buy(&self) -> Option<bool> {
        self.is_buy
    }

    pub fn price(&self) -> Option<&str> {
        self.price.as_deref()
    }

    pub fn size(&self) -> Option<&str> {
        self.size.as_deref()
    }

    pub fn reduce_only(&self) -> Option<bool> {
        self.reduce_only
    }

    pub fn order_type(&self) -> Option<&OrderType> {
        self.order_type.as_ref()
    }

    pub fn client_order_id(&self) -> Option<&str> {
        self.client_order_id.as_deref()
    }
}

impl RequiredFields for Order {
    fn first_missing(&self) -> Option<String> {
        let fields = [
            ("a", self.asset.is_none()),
            ("b", self.is_buy.is_none()),
            ("p", self.price.is_none()),
            ("s", self.size.is_none()),
            ("r", self.reduce_only.is_none()),
            ("t", self.order_type.is_none()),
        ];
        fields
            .into_iter()
            .find(|(_, missing)| *missing)
            .map(|(key, _)| key.to_string())
    }
}

/// Accumulates order fields and stamps out independent [`Order`] snapshots.
///
/// A builder can be reused as a template, e.g. for a price ladder:
///
/// ```
/// use hyperliquid_exchange_req::{OrderBuilder, Tif};
///
/// let mut builder = OrderBuilder::new();
/// builder.asset(0).is_buy(true).size("0.1").reduce_only(false).limit_tif(Tif::Alo);
///
/// let ladder: Vec<_> = ["100.0", "99.5", "99.0"]
///     .into_iter()
///     .map(|px| builder.price(px).build())
///     .collect();
/// assert_eq!(ladder[0].price(), Some("100.0"));
/// assert_eq!(ladder[2].price(), Some("99.0"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct OrderBuilder {
    order: Order,
}

impl OrderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the current state.
    ///
    /// The snapshot owns all of its data, nested order type included, so later
    /// changes to the builder never reach orders built earlier.
    pub fn build(&self) -> Order {
        self.order.clone()
    }

    /// Asset index of the instrument.
    pub fn asset(&mut self, asset: u32) -> &mut Self {
        self.order.asset = owned(&asset);
        self
    }

    /// `true` for a buy, `false` for a sell.
    pub fn is_buy(&mut self, is_buy: bool) -> &mut Self {
        self.order.is_buy = owned(&is_buy);
        self
    }

    pub fn price(&mut self, price: impl Into<String>) -> &mut Self {
        self.order.price = Some(price.into());
        self
    }

    pub fn size(&mut self, size: impl Into<String>) -> &mut Self {
        self.order.size = Some(size.into());
        self
    }

    /// Only decrease an existing position, never open a new one.
    pub fn reduce_only(&mut self, reduce_only: bool) -> &mut Self {
        self.order.reduce_only = owned(&reduce_only);
        self
    }

    pub fn client_order_id(&mut self, cloid: impl Into<String>) -> &mut Self {
        self.order.client_order_id = Some(cloid.into());
        self
    }

    /// Makes this a limit order, replacing any trigger parameters.
    pub fn limit_tif(&mut self, tif: Tif) -> &mut Self {
        self.order.order_type = Some(OrderType::Limit(Limit { tif }));
        self
    }

    /// Makes this a trigger order, replacing any limit parameters.
    pub fn trigger(
        &mut self,
        is_market: bool,
        trigger_px: impl Into<String>,
        tpsl: Tpsl,
    ) -> &mut Self {
        self.order.order_type = Some(OrderType::Trigger(Trigger {
            is_market,
            trigger_px: trigger_px.into(),
            tpsl,
        }));
        self
    }
}
