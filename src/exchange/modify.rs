//! Order modification records used by batch modify.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    exchange::{order::Order, request::RequiredFields},
    helpers::uuid_to_hex_string,
    serde_utils::required,
};

/// Identifies the order being modified: the exchange-assigned numeric id or
/// the client order id. Encoded as the bare number or string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderId {
    Oid(u64),
    Cloid(String),
}

impl From<u64> for OrderId {
    fn from(oid: u64) -> Self {
        OrderId::Oid(oid)
    }
}

impl From<Uuid> for OrderId {
    fn from(cloid: Uuid) -> Self {
        OrderId::Cloid(uuid_to_hex_string(cloid))
    }
}

/// Replacement of an existing order.
///
/// Built from [`ModifyOption`]s; a modify with no identifier stays
/// incomplete and is rejected at encoding time instead of defaulting to oid 0.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modify {
    #[serde(serialize_with = "required")]
    oid: Option<OrderId>,
    #[serde(serialize_with = "required")]
    order: Option<Order>,
}

impl Modify {
    pub fn by_order_id(oid: u64, order: Order) -> Self {
        Self::from_options([ModifyOption::by_order_id(oid, order)])
    }

    pub fn by_client_id(cloid: impl Into<String>, order: Order) -> Self {
        Self::from_options([ModifyOption::by_client_id(cloid, order)])
    }

    /// Applies the options in order; a later identifier replaces an earlier one.
    pub fn from_options(options: impl IntoIterator<Item = ModifyOption>) -> Self {
        let mut modify = Modify::default();
        for option in options {
            option.apply(&mut modify);
        }
        modify
    }

    pub fn oid(&self) -> Option<&OrderId> {
        self.oid.as_ref()
    }

    pub fn order(&self) -> Option<&Order> {
        self.order.as_ref()
    }
}

impl RequiredFields for Modify {
    fn first_missing(&self) -> Option<String> {
        if self.oid.is_none() {
            return Some("oid".to_string());
        }
        match &self.order {
            None => Some("order".to_string()),
            Some(order) => order.first_missing().map(|path| format!("order.{path}")),
        }
    }
}

/// One configuration step for a [`Modify`]: sets its identifier and its
/// replacement order together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModifyOption {
    ByOrderId { oid: u64, order: Order },
    ByClientId { cloid: String, order: Order },
}

impl ModifyOption {
    pub fn by_order_id(oid: u64, order: Order) -> Self {
        ModifyOption::ByOrderId { oid, order }
    }

    pub fn by_client_id(cloid: impl Into<String>, order: Order) -> Self {
        ModifyOption::ByClientId {
            cloid: cloid.into(),
            order,
        }
    }

    pub fn by_client_uuid(cloid: Uuid, order: Order) -> Self {
        Self::by_client_id(uuid_to_hex_string(cloid), order)
    }

    pub(crate) fn apply(self, modify: &mut Modify) {
        let (oid, order) = match self {
            ModifyOption::ByOrderId { oid, order } => (OrderId::Oid(oid), order),
            ModifyOption::ByClientId { cloid, order } => (OrderId::Cloid(cloid), order),
        };
        modify.oid = Some(oid);
        modify.order = Some(order);
    }
}

/// Reusable accumulator for [`Modify`] records.
#[derive(Clone, Debug, Default)]
pub struct ModifyBuilder {
    modify: Modify,
}

impl ModifyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn by_order_id(&mut self, oid: u64, order: Order) -> &mut Self {
        self.apply(ModifyOption::by_order_id(oid, order))
    }

    pub fn by_client_id(&mut self, cloid: impl Into<String>, order: Order) -> &mut Self {
        self.apply(ModifyOption::by_client_id(cloid, order))
    }

    pub fn apply(&mut self, option: ModifyOption) -> &mut Self {
        option.apply(&mut self.modify);
        self
    }

    /// Snapshot of the current state; later calls do not affect it.
    pub fn build(&self) -> Modify {
        self.modify.clone()
    }
}
