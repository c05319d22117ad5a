//! Example: Spot private trading endpoints.
//!
//! Places a far-from-market limit order, queries it and cancels it. Requests and
//! responses are logged to `~/log/bitget/log.txt`.
//!
//! Run with: cargo run --example spot_private_trading

use std::sync::Arc;

use bitget_api_client::auth::EnvCredentials;
use bitget_api_client::spot::rest::BitgetRestClient;
use bitget_api_client::spot::rest::account::AccountAssetsRequest;
use bitget_api_client::spot::rest::trade::{
    CancelOrderRequest, OrderInfoRequest, OrdersRequest, PlaceOrderRequest,
};
use bitget_api_client::types::Side;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let credentials = match EnvCredentials::try_from_env() {
        Some(creds) => Arc::new(creds),
        None => {
            println!(
                "Set BITGET_API_KEY, BITGET_API_SECRET and BITGET_API_PASSPHRASE to run this example."
            );
            return Ok(());
        }
    };

    let client = BitgetRestClient::builder()
        .credentials(credentials)
        .logging(true)
        .build();

    let assets = client
        .get_account_assets(Some(&AccountAssetsRequest {
            coin: Some("USDT".into()),
            ..Default::default()
        }))
        .await?;
    println!("USDT balance: {}", assets["data"]);

    let order = PlaceOrderRequest::limit(
        "BTCUSDT",
        Side::Buy,
        Decimal::new(10_000, 0),
        Decimal::new(1, 4),
    )
    .client_oid("example-order-1");
    let placed = client.place_order(&order).await?;
    let order_id = placed["data"]["orderId"].as_str().unwrap_or_default().to_string();
    println!("Placed order {order_id}");

    let info = client
        .get_order_info(&OrderInfoRequest {
            order_id: Some(order_id.clone()),
            ..Default::default()
        })
        .await?;
    println!("Order status: {}", info["data"][0]["status"]);

    let open = client
        .get_unfilled_orders(Some(&OrdersRequest {
            symbol: Some("BTCUSDT".into()),
            ..Default::default()
        }))
        .await?;
    println!("Open orders: {}", open["data"].as_array().map_or(0, Vec::len));

    let cancelled = client
        .cancel_order(&CancelOrderRequest::by_order_id("BTCUSDT", order_id))
        .await?;
    println!("Cancelled: {}", cancelled["data"]);

    Ok(())
}
