//! Exchange module for building and sending Hyperliquid exchange requests.
//!
//! This module provides the request envelope, the action payloads and the
//! `ExchangeClient` that signs and posts them.
//!
//! # Submodules
//! - `accounts` - Leverage updates
//! - `cancels` - Order cancellation by oid and by cloid
//! - `modifies` - Batch modify
//! - `orders` - Order placement

// Type definition modules
mod actions;
mod builder;
mod cancel;
mod exchange_client;
mod exchange_responses;
mod modify;
mod order;
mod request;
mod signing;

// Method implementation modules (impl ExchangeClient)
mod accounts;
mod api;
mod cancels;
mod modifies;
mod orders;

#[cfg(test)]
mod testing;

pub use accounts::*;
pub use actions::*;
pub use api::*;
pub use builder::*;
pub use cancel::*;
pub use cancels::*;
pub use exchange_client::*;
pub use exchange_responses::*;
pub use modifies::*;
pub use modify::*;
pub use order::*;
pub use orders::*;
pub use request::*;
pub use signing::*;
