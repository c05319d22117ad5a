//! Request types for market data endpoints.

use serde::Serialize;
use serde_with::skip_serializing_none;

/// Request for coin info.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct CoinsRequest {
    /// Coin to filter by (e.g. "BTC"); all coins when absent.
    pub coin: Option<String>,
}

impl CoinsRequest {
    /// Request a single coin.
    pub fn for_coin(coin: impl Into<String>) -> Self {
        Self {
            coin: Some(coin.into()),
        }
    }
}

/// Request for symbol info.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct SymbolsRequest {
    /// Trading pair to filter by (e.g. "BTCUSDT"); all symbols when absent.
    pub symbol: Option<String>,
}

impl SymbolsRequest {
    /// Request a single symbol.
    pub fn for_symbol(symbol: impl Into<String>) -> Self {
        Self {
            symbol: Some(symbol.into()),
        }
    }
}

/// Request for 24h tickers.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct TickersRequest {
    /// Trading pair to filter by; all tickers when absent.
    pub symbol: Option<String>,
}

impl TickersRequest {
    /// Request the ticker of a single symbol.
    pub fn for_symbol(symbol: impl Into<String>) -> Self {
        Self {
            symbol: Some(symbol.into()),
        }
    }
}

/// Request for merged order book depth.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
pub struct MergeDepthRequest {
    /// Trading pair.
    pub symbol: String,
    /// Price aggregation level (`scale0`, `scale1`, ...).
    pub precision: Option<String>,
    /// Number of levels per side.
    pub limit: Option<u32>,
}

impl MergeDepthRequest {
    /// Create a new merge depth request.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            precision: None,
            limit: None,
        }
    }

    /// Set the aggregation level.
    pub fn precision(mut self, precision: impl Into<String>) -> Self {
        self.precision = Some(precision.into());
        self
    }

    /// Set the number of levels.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Request for the order book.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
pub struct OrderbookRequest {
    /// Trading pair.
    pub symbol: String,
    /// Depth step (`step0` .. `step5`).
    #[serde(rename = "type")]
    pub step: Option<String>,
    /// Number of levels per side.
    pub limit: Option<u32>,
}

impl OrderbookRequest {
    /// Create a new order book request.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            step: None,
            limit: None,
        }
    }

    /// Set the depth step.
    pub fn step(mut self, step: impl Into<String>) -> Self {
        self.step = Some(step.into());
        self
    }

    /// Set the number of levels.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Request for candlesticks.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandlesRequest {
    /// Trading pair.
    pub symbol: String,
    /// Candle interval (e.g. "1min", "1h", "1day").
    pub granularity: String,
    /// Start time in milliseconds.
    pub start_time: Option<u64>,
    /// End time in milliseconds.
    pub end_time: Option<u64>,
    /// Number of candles.
    pub limit: Option<u32>,
}

impl CandlesRequest {
    /// Create a new candles request.
    pub fn new(symbol: impl Into<String>, granularity: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            granularity: granularity.into(),
            start_time: None,
            end_time: None,
            limit: None,
        }
    }

    /// Restrict to a time range in milliseconds.
    pub fn range(mut self, start_time: u64, end_time: u64) -> Self {
        self.start_time = Some(start_time);
        self.end_time = Some(end_time);
        self
    }

    /// Set the number of candles.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Request for historical candlesticks.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryCandlesRequest {
    /// Trading pair.
    pub symbol: String,
    /// Candle interval.
    pub granularity: String,
    /// Candles before this time (milliseconds) are returned.
    pub end_time: u64,
    /// Number of candles.
    pub limit: Option<u32>,
}

impl HistoryCandlesRequest {
    /// Create a new historical candles request.
    pub fn new(symbol: impl Into<String>, granularity: impl Into<String>, end_time: u64) -> Self {
        Self {
            symbol: symbol.into(),
            granularity: granularity.into(),
            end_time,
            limit: None,
        }
    }
}

/// Request for recent public trades.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
pub struct MarketFillsRequest {
    /// Trading pair.
    pub symbol: String,
    /// Number of trades.
    pub limit: Option<u32>,
}

impl MarketFillsRequest {
    /// Create a new recent trades request.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            limit: None,
        }
    }
}

/// Request for public trade history.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketFillsHistoryRequest {
    /// Trading pair.
    pub symbol: String,
    /// Number of trades.
    pub limit: Option<u32>,
    /// Return trades older than this trade ID.
    pub id_less_than: Option<String>,
    /// Start time in milliseconds.
    pub start_time: Option<u64>,
    /// End time in milliseconds.
    pub end_time: Option<u64>,
}

impl MarketFillsHistoryRequest {
    /// Create a new trade history request.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            limit: None,
            id_less_than: None,
            start_time: None,
            end_time: None,
        }
    }
}
