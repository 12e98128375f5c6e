use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::helpers::uuid_to_hex_string;

/// Cancel an order by its exchange-assigned id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cancel {
    #[serde(rename = "a", alias = "asset")]
    pub asset: u32,
    #[serde(rename = "o", alias = "oid")]
    pub oid: u64,
}

impl Cancel {
    pub fn new(asset: u32, oid: u64) -> Self {
        Self { asset, oid }
    }
}

/// Cancel an order by the client order id it was placed with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelByCloid {
    pub asset: u32,
    pub cloid: String,
}

impl CancelByCloid {
    pub fn new(asset: u32, cloid: impl Into<String>) -> Self {
        Self {
            asset,
            cloid: cloid.into(),
        }
    }

    pub fn from_uuid(asset: u32, cloid: Uuid) -> Self {
        Self::new(asset, uuid_to_hex_string(cloid))
    }
}
