//! Bitget spot REST API endpoint constants.
//!
//! Paths are relative to the `/api/v2` prefix, which is added when requests are
//! built and signed.

/// Base URL for the Bitget REST API.
pub const BITGET_BASE_URL: &str = "https://api.bitget.com";

/// Market data endpoints (no authentication required).
pub mod market {
    /// Get coin info.
    pub const COINS: &str = "/spot/public/coins";
    /// Get symbol info.
    pub const SYMBOLS: &str = "/spot/public/symbols";
    /// Get VIP fee rates.
    pub const VIP_FEE_RATE: &str = "/spot/market/vip-fee-rate";
    /// Get tickers.
    pub const TICKERS: &str = "/spot/market/tickers";
    /// Get merged depth.
    pub const MERGE_DEPTH: &str = "/spot/market/merge-depth";
    /// Get order book.
    pub const ORDERBOOK: &str = "/spot/market/orderbook";
    /// Get candlesticks.
    pub const CANDLES: &str = "/spot/market/candles";
    /// Get historical candlesticks.
    pub const HISTORY_CANDLES: &str = "/spot/market/history-candles";
    /// Get recent trades.
    pub const FILLS: &str = "/spot/market/fills";
    /// Get market trades history.
    pub const FILLS_HISTORY: &str = "/spot/market/fills-history";
}

/// Trading endpoints (authentication required).
pub mod trade {
    /// Place order.
    pub const PLACE_ORDER: &str = "/spot/trade/place-order";
    /// Cancel an existing order and place a new one.
    pub const CANCEL_REPLACE_ORDER: &str = "/spot/trade/cancel-replace-order";
    /// Batch cancel and replace orders.
    pub const BATCH_CANCEL_REPLACE_ORDER: &str = "/spot/trade/batch-cancel-replace-order";
    /// Cancel order.
    pub const CANCEL_ORDER: &str = "/spot/trade/cancel-order";
    /// Place orders in batch.
    pub const BATCH_ORDERS: &str = "/spot/trade/batch-orders";
    /// Cancel orders in batch.
    pub const BATCH_CANCEL_ORDER: &str = "/spot/trade/batch-cancel-order";
    /// Cancel all orders of a symbol.
    pub const CANCEL_SYMBOL_ORDER: &str = "/spot/trade/cancel-symbol-order";
    /// Get order info.
    pub const ORDER_INFO: &str = "/spot/trade/orderInfo";
    /// Get unfilled orders.
    pub const UNFILLED_ORDERS: &str = "/spot/trade/unfilled-orders";
    /// Get order history.
    pub const HISTORY_ORDERS: &str = "/spot/trade/history-orders";
    /// Get fills.
    pub const FILLS: &str = "/spot/trade/fills";

    // Plan (trigger) orders
    /// Place plan order.
    pub const PLACE_PLAN_ORDER: &str = "/spot/trade/place-plan-order";
    /// Modify plan order.
    pub const MODIFY_PLAN_ORDER: &str = "/spot/trade/modify-plan-order";
    /// Cancel plan order.
    pub const CANCEL_PLAN_ORDER: &str = "/spot/trade/cancel-plan-order";
    /// Get current plan orders.
    pub const CURRENT_PLAN_ORDER: &str = "/spot/trade/current-plan-order";
    /// Get plan sub order.
    pub const PLAN_SUB_ORDER: &str = "/spot/trade/plan-sub-order";
    /// Get plan order history.
    pub const HISTORY_PLAN_ORDER: &str = "/spot/trade/history-plan-order";
    /// Cancel plan orders in batch.
    pub const BATCH_CANCEL_PLAN_ORDER: &str = "/spot/trade/batch-cancel-plan-order";
}

/// Account endpoints (authentication required).
pub mod account {
    /// Get account info.
    pub const INFO: &str = "/spot/account/info";
    /// Get account assets.
    pub const ASSETS: &str = "/spot/account/assets";
    /// Get sub-account assets.
    pub const SUBACCOUNT_ASSETS: &str = "/spot/account/subaccount-assets";
    /// Get account bills.
    pub const BILLS: &str = "/spot/account/bills";
    /// Get main/sub-account transfer records.
    pub const SUB_MAIN_TRANS_RECORD: &str = "/spot/account/sub-main-trans-record";
    /// Get transfer records.
    pub const TRANSFER_RECORDS: &str = "/spot/account/transferRecords";
    /// Switch BGB deduct.
    pub const SWITCH_DEDUCT: &str = "/spot/account/switch-deduct";
    /// Get BGB deduct info.
    pub const DEDUCT_INFO: &str = "/spot/account/deduct-info";
}

/// Wallet endpoints (authentication required).
pub mod wallet {
    /// Modify deposit account.
    pub const MODIFY_DEPOSIT_ACCOUNT: &str = "/spot/wallet/modify-deposit-account";
    /// Transfer between account types.
    pub const TRANSFER: &str = "/spot/wallet/transfer";
    /// Get transferable coins.
    pub const TRANSFER_COIN_INFO: &str = "/spot/wallet/transfer-coin-info";
    /// Transfer between sub-accounts.
    pub const SUBACCOUNT_TRANSFER: &str = "/spot/wallet/subaccount-transfer";
    /// Withdraw.
    pub const WITHDRAWAL: &str = "/spot/wallet/withdrawal";
    /// Cancel withdrawal.
    pub const CANCEL_WITHDRAWAL: &str = "/spot/wallet/cancel-withdrawal";
    /// Get deposit address.
    pub const DEPOSIT_ADDRESS: &str = "/spot/wallet/deposit-address";
    /// Get sub-account deposit address.
    pub const SUBACCOUNT_DEPOSIT_ADDRESS: &str = "/spot/wallet/subaccount-deposit-address";
    /// Get sub-account deposit records.
    pub const SUBACCOUNT_DEPOSIT_RECORDS: &str = "/spot/wallet/subaccount-deposit-records";
    /// Get withdrawal records.
    pub const WITHDRAWAL_RECORDS: &str = "/spot/wallet/withdrawal-records";
    /// Get deposit records.
    pub const DEPOSIT_RECORDS: &str = "/spot/wallet/deposit-records";
}
