//! Action payloads carried by an [`ExchangeRequest`](crate::ExchangeRequest).
//!
//! Each payload starts with its `type` tag. Field declaration order is the
//! wire order in both encodings.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

use crate::{
    exchange::{
        builder::BuilderInfo,
        cancel::{Cancel, CancelByCloid},
        modify::Modify,
        order::Order,
        request::RequiredFields,
    },
    serde_utils::required,
};

/// A payload that can be wrapped in an exchange request.
pub trait ExchangeAction: Serialize + RequiredFields + Clone + fmt::Debug {
    /// Value of the `type` tag.
    const TYPE: &'static str;

    /// An action with only its type tag set.
    fn empty() -> Self;
}

/// How the orders of one order action relate to each other.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Grouping {
    /// Independent orders.
    Na,
    /// A parent order followed by its take-profit / stop-loss children.
    NormalTpsl,
    /// Take-profit / stop-loss orders attached to the current position.
    PositionTpsl,
}

impl Grouping {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grouping::Na => "na",
            Grouping::NormalTpsl => "normalTpsl",
            Grouping::PositionTpsl => "positionTpsl",
        }
    }
}

impl Serialize for Grouping {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.as_str())
    }
}

impl fmt::Display for Grouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grouping {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "na" => Ok(Grouping::Na),
            "normalTpsl" => Ok(Grouping::NormalTpsl),
            "positionTpsl" => Ok(Grouping::PositionTpsl),
            other => Err(format!("unknown grouping: {other}")),
        }
    }
}

fn first_missing_in<T: RequiredFields>(field: &str, items: &[T]) -> Option<String> {
    items.iter().enumerate().find_map(|(i, item)| {
        item.first_missing()
            .map(|path| format!("{field}[{i}].{path}"))
    })
}

/// Place one or more orders.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderAction {
    #[serde(rename = "type", serialize_with = "required")]
    pub(crate) action_type: Option<String>,
    pub(crate) orders: Vec<Order>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) grouping: Option<Grouping>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) builder: Option<BuilderInfo>,
}

impl OrderAction {
    pub fn new(orders: Vec<Order>) -> Self {
        Self {
            orders,
            ..Self::empty()
        }
    }

    pub fn action_type(&self) -> Option<&str> {
        self.action_type.as_deref()
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn grouping(&self) -> Option<Grouping> {
        self.grouping
    }

    pub fn builder(&self) -> Option<&BuilderInfo> {
        self.builder.as_ref()
    }
}

impl ExchangeAction for OrderAction {
    const TYPE: &'static str = "order";

    fn empty() -> Self {
        Self {
            action_type: Some(Self::TYPE.to_string()),
            ..Default::default()
        }
    }
}

impl RequiredFields for OrderAction {
    fn first_missing(&self) -> Option<String> {
        if self.action_type.is_none() {
            return Some("type".to_string());
        }
        first_missing_in("orders", &self.orders)
    }
}

/// Cancel orders by exchange order id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CancelAction {
    #[serde(rename = "type", serialize_with = "required")]
    pub(crate) action_type: Option<String>,
    pub(crate) cancels: Vec<Cancel>,
}

impl CancelAction {
    pub fn new(cancels: Vec<Cancel>) -> Self {
        Self {
            cancels,
            ..Self::empty()
        }
    }

    pub fn cancels(&self) -> &[Cancel] {
        &self.cancels
    }
}

impl ExchangeAction for CancelAction {
    const TYPE: &'static str = "cancel";

    fn empty() -> Self {
        Self {
            action_type: Some(Self::TYPE.to_string()),
            cancels: Vec::new(),
        }
    }
}

impl RequiredFields for CancelAction {
    fn first_missing(&self) -> Option<String> {
        self.action_type.is_none().then(|| "type".to_string())
    }
}

/// Cancel orders by client order id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CancelByCloidAction {
    #[serde(rename = "type", serialize_with = "required")]
    pub(crate) action_type: Option<String>,
    pub(crate) cancels: Vec<CancelByCloid>,
}

impl CancelByCloidAction {
    pub fn new(cancels: Vec<CancelByCloid>) -> Self {
        Self {
            cancels,
            ..Self::empty()
        }
    }

    pub fn cancels(&self) -> &[CancelByCloid] {
        &self.cancels
    }
}

impl ExchangeAction for CancelByCloidAction {
    const TYPE: &'static str = "cancelByCloid";

    fn empty() -> Self {
        Self {
            action_type: Some(Self::TYPE.to_string()),
            cancels: Vec::new(),
        }
    }
}

impl RequiredFields for CancelByCloidAction {
    fn first_missing(&self) -> Option<String> {
        self.action_type.is_none().then(|| "type".to_string())
    }
}

/// Replace several resting orders in one request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchModifyAction {
    #[serde(rename = "type", serialize_with = "required")]
    pub(crate) action_type: Option<String>,
    pub(crate) modifies: Vec<Modify>,
}

impl BatchModifyAction {
    pub fn new(modifies: Vec<Modify>) -> Self {
        Self {
            modifies,
            ..Self::empty()
        }
    }

    pub fn modifies(&self) -> &[Modify] {
        &self.modifies
    }
}

impl ExchangeAction for BatchModifyAction {
    const TYPE: &'static str = "batchModify";

    fn empty() -> Self {
        Self {
            action_type: Some(Self::TYPE.to_string()),
            modifies: Vec::new(),
        }
    }
}

impl RequiredFields for BatchModifyAction {
    fn first_missing(&self) -> Option<String> {
        if self.action_type.is_none() {
            return Some("type".to_string());
        }
        first_missing_in("modifies", &self.modifies)
    }
}

/// Set cross or isolated leverage for one asset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateLeverageAction {
    #[serde(rename = "type", serialize_with = "required")]
    pub(crate) action_type: Option<String>,
    #[serde(serialize_with = "required")]
    pub(crate) asset: Option<u32>,
    #[serde(serialize_with = "required")]
    pub(crate) is_cross: Option<bool>,
    #[serde(serialize_with = "required")]
    pub(crate) leverage: Option<u32>,
}

impl UpdateLeverageAction {
    pub fn new(asset: u32, is_cross: bool, leverage: u32) -> Self {
        Self {
            asset: Some(asset),
            is_cross: Some(is_cross),
            leverage: Some(leverage),
            ..Self::empty()
        }
    }

    pub fn asset(&self) -> Option<u32> {
        self.asset
    }

    pub fn is_cross(&self) -> Option<bool> {
        self.is_cross
    }

    pub fn leverage(&self) -> Option<u32> {
        self.leverage
    }
}

impl ExchangeAction for UpdateLeverageAction {
    const TYPE: &'static str = "updateLeverage";

    fn empty() -> Self {
        Self {
            action_type: Some(Self::TYPE.to_string()),
            ..Default::default()
        }
    }
}

impl RequiredFields for UpdateLeverageAction {
    fn first_missing(&self) -> Option<String> {
        let fields = [
            ("type", self.action_type.is_none()),
            ("asset", self.asset.is_none()),
            ("isCross", self.is_cross.is_none()),
            ("leverage", self.leverage.is_none()),
        ];
        fields
            .into_iter()
            .find(|(_, missing)| *missing)
            .map(|(key, _)| key.to_string())
    }
}
