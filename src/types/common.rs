//! Common domain types for the Bitget spot API.

use serde::{Deserialize, Serialize};

/// Buy or sell side of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Buy => write!(f, "buy"),
            Side::Sell => write!(f, "sell"),
        }
    }
}

/// Order type for trading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// Limit order - execute at specified price or better
    Limit,
    /// Market order - execute immediately at best available price
    Market,
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderType::Limit => write!(f, "limit"),
            OrderType::Market => write!(f, "market"),
        }
    }
}

/// Time in force of a limit order (`force` on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Force {
    /// Good till cancelled
    Gtc,
    /// Maker only
    PostOnly,
    /// Fill or kill
    Fok,
    /// Immediate or cancel
    Ioc,
}

/// Whether an order is a plain order or a take-profit/stop-loss order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TpslType {
    /// Plain spot order
    Normal,
    /// Take-profit/stop-loss order
    Tpsl,
}

/// Self-trade prevention mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StpMode {
    /// No self-trade prevention
    None,
    /// Cancel the taker order
    CancelTaker,
    /// Cancel the maker order
    CancelMaker,
    /// Cancel both orders
    CancelBoth,
}

/// How a batch request treats its symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchMode {
    /// All orders share the request-level symbol
    Single,
    /// Each order carries its own symbol
    Multiple,
}

/// Price used to fire a plan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerType {
    /// Last fill price
    FillPrice,
    /// Mark price
    MarkPrice,
}

/// Unit of a plan order's size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    /// Size in base coin
    Amount,
    /// Size in quote coin
    Total,
}

/// Account (wallet) types used by transfers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    /// Spot account
    Spot,
    /// P2P account
    P2p,
    /// Coin-margined futures account
    CoinFutures,
    /// USDT-margined futures account
    UsdtFutures,
    /// USDC-margined futures account
    UsdcFutures,
    /// Cross margin account
    CrossedMargin,
    /// Isolated margin account
    IsolatedMargin,
}

/// Withdrawal route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferType {
    /// On-chain withdrawal
    OnChain,
    /// Internal transfer to another Bitget user
    InternalTransfer,
}
