//! Market data endpoints (no authentication required).
//!
//! Requests are still signed when the client has credentials.

mod types;

pub use types::*;

use serde_json::Value;

use crate::error::BitgetError;
use crate::spot::rest::BitgetRestClient;
use crate::spot::rest::endpoints::market;

impl BitgetRestClient {
    /// Get coin info, including the chains each coin supports.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use bitget_api_client::spot::rest::BitgetRestClient;
    /// use bitget_api_client::spot::rest::market::CoinsRequest;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = BitgetRestClient::new();
    ///     let coins = client.get_coins(Some(&CoinsRequest::for_coin("BTC"))).await?;
    ///     for chain in coins["data"][0]["chains"].as_array().into_iter().flatten() {
    ///         println!("{} withdraw fee {}", chain["chain"], chain["withdrawFee"]);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_coins(&self, request: Option<&CoinsRequest>) -> Result<Value, BitgetError> {
        self.public_get(market::COINS, &request).await
    }

    /// Get symbol (trading pair) info.
    pub async fn get_symbols(&self, request: Option<&SymbolsRequest>) -> Result<Value, BitgetError> {
        self.public_get(market::SYMBOLS, &request).await
    }

    /// Get VIP fee rates.
    pub async fn get_vip_fee_rate(&self) -> Result<Value, BitgetError> {
        self.public_get(market::VIP_FEE_RATE, &()).await
    }

    /// Get 24h ticker information.
    pub async fn get_tickers(&self, request: &TickersRequest) -> Result<Value, BitgetError> {
        self.public_get(market::TICKERS, request).await
    }

    /// Get merged order book depth.
    pub async fn get_merge_depth(&self, request: &MergeDepthRequest) -> Result<Value, BitgetError> {
        self.public_get(market::MERGE_DEPTH, request).await
    }

    /// Get the order book.
    pub async fn get_orderbook(&self, request: &OrderbookRequest) -> Result<Value, BitgetError> {
        self.public_get(market::ORDERBOOK, request).await
    }

    /// Get candlesticks.
    pub async fn get_candles(&self, request: &CandlesRequest) -> Result<Value, BitgetError> {
        self.public_get(market::CANDLES, request).await
    }

    /// Get historical candlesticks.
    pub async fn get_history_candles(
        &self,
        request: &HistoryCandlesRequest,
    ) -> Result<Value, BitgetError> {
        self.public_get(market::HISTORY_CANDLES, request).await
    }

    /// Get recent public trades.
    pub async fn get_market_fills(&self, request: &MarketFillsRequest) -> Result<Value, BitgetError> {
        self.public_get(market::FILLS, request).await
    }

    /// Get public trade history.
    pub async fn get_market_fills_history(
        &self,
        request: &MarketFillsHistoryRequest,
    ) -> Result<Value, BitgetError> {
        self.public_get(market::FILLS_HISTORY, request).await
    }
}
