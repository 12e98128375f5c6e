use serde::{Deserialize, Serialize};

/// Builder fee attached to an order action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderInfo {
    /// Address that receives the fee.
    #[serde(rename = "b")]
    pub builder: String,
    /// Fee in tenths of a basis point; `10` charges 1bp of notional.
    #[serde(rename = "f")]
    pub fee: u64,
}

impl BuilderInfo {
    pub fn new(builder: impl Into<String>, fee: u64) -> Self {
        Self {
            builder: builder.into(),
            fee,
        }
    }
}
