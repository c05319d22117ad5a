//! Example: Fetching public market data from Bitget.
//!
//! No credentials are needed. Set `RUST_LOG=debug` to see the request traces.
//!
//! Run with: cargo run --example public_data

use bitget_api_client::spot::rest::BitgetRestClient;
use bitget_api_client::spot::rest::market::{
    CandlesRequest, CoinsRequest, MarketFillsRequest, OrderbookRequest, TickersRequest,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = BitgetRestClient::new();

    println!("=== Coin (BTC) ===");
    let coins = client.get_coins(Some(&CoinsRequest::for_coin("BTC"))).await?;
    for chain in coins["data"][0]["chains"].as_array().into_iter().flatten() {
        println!(
            "{}: withdraw fee {}, min withdraw {}",
            chain["chain"], chain["withdrawFee"], chain["minWithdrawAmount"]
        );
    }

    println!("\n=== Ticker (BTCUSDT) ===");
    let tickers = client
        .get_tickers(&TickersRequest::for_symbol("BTCUSDT"))
        .await?;
    let ticker = &tickers["data"][0];
    println!("Last: {}", ticker["lastPr"]);
    println!("Bid: {} / Ask: {}", ticker["bidPr"], ticker["askPr"]);
    println!("24h volume: {}", ticker["baseVolume"]);

    println!("\n=== Order book (top 5) ===");
    let book = client
        .get_orderbook(&OrderbookRequest::new("BTCUSDT").limit(5))
        .await?;
    for level in book["data"]["asks"].as_array().into_iter().flatten() {
        println!("ask {} x {}", level[0], level[1]);
    }
    for level in book["data"]["bids"].as_array().into_iter().flatten() {
        println!("bid {} x {}", level[0], level[1]);
    }

    println!("\n=== Candles (1h, last 3) ===");
    let candles = client
        .get_candles(&CandlesRequest::new("BTCUSDT", "1h").limit(3))
        .await?;
    for candle in candles["data"].as_array().into_iter().flatten() {
        println!(
            "ts={} open={} high={} low={} close={}",
            candle[0], candle[1], candle[2], candle[3], candle[4]
        );
    }

    println!("\n=== Recent trades ===");
    let mut fills_request = MarketFillsRequest::new("BTCUSDT");
    fills_request.limit = Some(5);
    let fills = client.get_market_fills(&fills_request).await?;
    for fill in fills["data"].as_array().into_iter().flatten() {
        println!("{} {} @ {}", fill["side"], fill["size"], fill["price"]);
    }

    Ok(())
}
