#![deny(unreachable_pub)]

// Core modules
mod config;
mod consts;
mod errors;
mod helpers;
mod prelude;
mod req;
mod serde_utils;

// Feature modules
mod exchange;

// Re-exports
pub use config::ExchangeConfig;
pub use consts::{LOCAL_API_URL, MAINNET_API_URL, TESTNET_API_URL};
pub use errors::{Error, HttpErrorKind};
pub use exchange::*;
pub use helpers::{owned, uuid_to_hex_string, BaseUrl};
pub use req::{Endpoint, HttpClient, Transport};
pub use serde_utils::serialize_signature;
