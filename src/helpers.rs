use serde::Deserialize;
use uuid::Uuid;

use crate::consts::{LOCAL_API_URL, MAINNET_API_URL, TESTNET_API_URL};

/// Returns an owned copy of `value` marked as present.
///
/// Builders and facades store every settable field as an `Option`, so a field
/// explicitly set to a zero-like value (leverage `0`, `reduce_only = false`)
/// stays distinguishable from a field that was never set.
pub fn owned<T: ToOwned + ?Sized>(value: &T) -> Option<T::Owned> {
    Some(value.to_owned())
}

/// Renders a client order id the way the exchange expects it: `0x` followed by
/// 32 lowercase hex characters.
pub fn uuid_to_hex_string(uuid: Uuid) -> String {
    format!("0x{}", uuid.simple())
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseUrl {
    Localhost,
    Testnet,
    #[default]
    Mainnet,
}

impl BaseUrl {
    pub fn get_url(&self) -> String {
        match self {
            BaseUrl::Localhost => LOCAL_API_URL.to_string(),
            BaseUrl::Mainnet => MAINNET_API_URL.to_string(),
            BaseUrl::Testnet => TESTNET_API_URL.to_string(),
        }
    }

    pub fn is_mainnet(&self) -> bool {
        matches!(self, BaseUrl::Mainnet)
    }
}
