//! Builds a three-level bid ladder on testnet and prints the signed request.
//!
//! Run with: cargo run --example order_ladder
//!
//! Reads `HL_PRIVATE_KEY` (a `.env` file works). Set `HL_SEND=1` to post the
//! request instead of only printing it.

use std::env;

use hyperliquid_exchange_req::{
    uuid_to_hex_string, BaseUrl, ExchangeClient, ExchangeConfig, Grouping, OrderBuilder, Tif,
};
use log::info;
use uuid::Uuid;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let private_key =
        env::var("HL_PRIVATE_KEY").expect("HL_PRIVATE_KEY environment variable not set");
    let client =
        ExchangeClient::from_private_key(ExchangeConfig::new(BaseUrl::Testnet), &private_key)?;

    let mut builder = OrderBuilder::new();
    builder
        .asset(0)
        .is_buy(true)
        .size("0.001")
        .reduce_only(false)
        .limit_tif(Tif::Alo);
    let ladder: Vec<_> = ["60000", "59900", "59800"]
        .into_iter()
        .map(|px| {
            builder
                .price(px)
                .client_order_id(uuid_to_hex_string(Uuid::new_v4()))
                .build()
        })
        .collect();

    let api = client.order().grouping(Grouping::Na).add_orders(ladder);

    if env::var("HL_SEND").as_deref() == Ok("1") {
        let status = api.send().await?;
        info!("exchange answered: {status:?}");
        for (level, status) in status.statuses().iter().enumerate() {
            println!("level {level}: {status:?}");
        }
    } else {
        let req = client.sign_request(api.into_request())?;
        println!("{}", serde_json::to_string_pretty(&req.to_json()?)?);
    }
    Ok(())
}
