//! Request types for trading endpoints.

use rust_decimal::Decimal;
use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::types::{BatchMode, Force, OrderType, PlanType, Side, StpMode, TpslType, TriggerType};

/// Request to place an order.
///
/// Also used as the order item of [`BatchOrdersRequest`].
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    /// Trading pair.
    pub symbol: String,
    /// Order side.
    pub side: Side,
    /// Order type.
    pub order_type: OrderType,
    /// Time in force.
    pub force: Force,
    /// Limit price (limit orders only).
    pub price: Option<Decimal>,
    /// Amount: base coin for limit and market sell, quote coin for market buy.
    pub size: Decimal,
    /// Client order ID.
    pub client_oid: Option<String>,
    /// Trigger price (TP/SL orders only).
    pub trigger_price: Option<Decimal>,
    /// Plain or TP/SL order.
    pub tpsl_type: Option<TpslType>,
    /// Request time in milliseconds.
    pub request_time: Option<u64>,
    /// Validity window in milliseconds counted from `request_time`.
    pub receive_window: Option<u64>,
    /// Self-trade prevention mode.
    pub stp_mode: Option<StpMode>,
    /// Preset take-profit trigger price.
    pub preset_take_profit_price: Option<Decimal>,
    /// Preset take-profit execution price.
    pub execute_take_profit_price: Option<Decimal>,
    /// Preset stop-loss trigger price.
    pub preset_stop_loss_price: Option<Decimal>,
    /// Preset stop-loss execution price.
    pub execute_stop_loss_price: Option<Decimal>,
}

impl PlaceOrderRequest {
    /// Create a new order request.
    pub fn new(
        symbol: impl Into<String>,
        side: Side,
        order_type: OrderType,
        force: Force,
        size: Decimal,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            order_type,
            force,
            price: None,
            size,
            client_oid: None,
            trigger_price: None,
            tpsl_type: None,
            request_time: None,
            receive_window: None,
            stp_mode: None,
            preset_take_profit_price: None,
            execute_take_profit_price: None,
            preset_stop_loss_price: None,
            execute_stop_loss_price: None,
        }
    }

    /// Create a good-till-cancelled limit order.
    pub fn limit(symbol: impl Into<String>, side: Side, price: Decimal, size: Decimal) -> Self {
        Self::new(symbol, side, OrderType::Limit, Force::Gtc, size).price(price)
    }

    /// Create a market order.
    pub fn market(symbol: impl Into<String>, side: Side, size: Decimal) -> Self {
        Self::new(symbol, side, OrderType::Market, Force::Gtc, size)
    }

    /// Set the limit price.
    pub fn price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    /// Set the client order ID.
    pub fn client_oid(mut self, client_oid: impl Into<String>) -> Self {
        self.client_oid = Some(client_oid.into());
        self
    }

    /// Make this a TP/SL order fired at `trigger_price`.
    pub fn tpsl(mut self, trigger_price: Decimal) -> Self {
        self.tpsl_type = Some(TpslType::Tpsl);
        self.trigger_price = Some(trigger_price);
        self
    }

    /// Set the self-trade prevention mode.
    pub fn stp_mode(mut self, stp_mode: StpMode) -> Self {
        self.stp_mode = Some(stp_mode);
        self
    }

    /// Attach a take-profit, with an optional execution price (market when absent).
    pub fn take_profit(mut self, trigger: Decimal, execute: Option<Decimal>) -> Self {
        self.preset_take_profit_price = Some(trigger);
        self.execute_take_profit_price = execute;
        self
    }

    /// Attach a stop-loss, with an optional execution price (market when absent).
    pub fn stop_loss(mut self, trigger: Decimal, execute: Option<Decimal>) -> Self {
        self.preset_stop_loss_price = Some(trigger);
        self.execute_stop_loss_price = execute;
        self
    }

    /// Limit how long the exchange accepts the request.
    pub fn receive_window(mut self, request_time: u64, receive_window: u64) -> Self {
        self.request_time = Some(request_time);
        self.receive_window = Some(receive_window);
        self
    }
}

/// Request to cancel an order and place a replacement.
///
/// Also used as the order item of [`BatchCancelReplaceOrderRequest`].
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelReplaceOrderRequest {
    /// Trading pair.
    pub symbol: String,
    /// New limit price.
    pub price: Decimal,
    /// New size.
    pub size: Decimal,
    /// Client order ID of the order to replace.
    pub client_oid: Option<String>,
    /// Order ID of the order to replace.
    pub order_id: Option<String>,
    /// Client order ID of the replacement.
    pub new_client_oid: Option<String>,
    /// Preset take-profit trigger price.
    pub preset_take_profit_price: Option<Decimal>,
    /// Preset take-profit execution price.
    pub execute_take_profit_price: Option<Decimal>,
    /// Preset stop-loss trigger price.
    pub preset_stop_loss_price: Option<Decimal>,
    /// Preset stop-loss execution price.
    pub execute_stop_loss_price: Option<Decimal>,
}

impl CancelReplaceOrderRequest {
    /// Replace the order with the given order ID.
    pub fn by_order_id(
        symbol: impl Into<String>,
        order_id: impl Into<String>,
        price: Decimal,
        size: Decimal,
    ) -> Self {
        Self {
            order_id: Some(order_id.into()),
            ..Self::empty(symbol.into(), price, size)
        }
    }

    /// Replace the order with the given client order ID.
    pub fn by_client_oid(
        symbol: impl Into<String>,
        client_oid: impl Into<String>,
        price: Decimal,
        size: Decimal,
    ) -> Self {
        Self {
            client_oid: Some(client_oid.into()),
            ..Self::empty(symbol.into(), price, size)
        }
    }

    fn empty(symbol: String, price: Decimal, size: Decimal) -> Self {
        Self {
            symbol,
            price,
            size,
            client_oid: None,
            order_id: None,
            new_client_oid: None,
            preset_take_profit_price: None,
            execute_take_profit_price: None,
            preset_stop_loss_price: None,
            execute_stop_loss_price: None,
        }
    }

    /// Set the client order ID of the replacement order.
    pub fn new_client_oid(mut self, new_client_oid: impl Into<String>) -> Self {
        self.new_client_oid = Some(new_client_oid.into());
        self
    }
}

/// Request to cancel and replace several orders.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchCancelReplaceOrderRequest {
    /// Orders to replace.
    pub order_list: Vec<CancelReplaceOrderRequest>,
}

/// Request to cancel an order.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrderRequest {
    /// Trading pair.
    pub symbol: String,
    /// Plain or TP/SL order.
    pub tpsl_type: Option<TpslType>,
    /// Order ID.
    pub order_id: Option<String>,
    /// Client order ID.
    pub client_oid: Option<String>,
}

impl CancelOrderRequest {
    /// Cancel by order ID.
    pub fn by_order_id(symbol: impl Into<String>, order_id: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            tpsl_type: None,
            order_id: Some(order_id.into()),
            client_oid: None,
        }
    }

    /// Cancel by client order ID.
    pub fn by_client_oid(symbol: impl Into<String>, client_oid: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            tpsl_type: None,
            order_id: None,
            client_oid: Some(client_oid.into()),
        }
    }
}

/// Request to place several orders.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchOrdersRequest {
    /// Trading pair (single mode).
    pub symbol: Option<String>,
    /// Single or multiple symbol mode.
    pub batch_mode: Option<BatchMode>,
    /// Orders to place.
    pub order_list: Vec<PlaceOrderRequest>,
}

impl BatchOrdersRequest {
    /// Place orders that each name their own symbol.
    pub fn multiple(order_list: Vec<PlaceOrderRequest>) -> Self {
        Self {
            symbol: None,
            batch_mode: Some(BatchMode::Multiple),
            order_list,
        }
    }

    /// Place orders on one symbol.
    pub fn single(symbol: impl Into<String>, order_list: Vec<PlaceOrderRequest>) -> Self {
        Self {
            symbol: Some(symbol.into()),
            batch_mode: Some(BatchMode::Single),
            order_list,
        }
    }
}

/// One order in a batch cancel.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchCancelItem {
    /// Trading pair (multiple mode).
    pub symbol: Option<String>,
    /// Order ID.
    pub order_id: Option<String>,
    /// Client order ID.
    pub client_oid: Option<String>,
}

/// Request to cancel several orders.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchCancelOrderRequest {
    /// Trading pair (single mode).
    pub symbol: Option<String>,
    /// Single or multiple symbol mode.
    pub batch_mode: Option<BatchMode>,
    /// Orders to cancel.
    pub order_list: Vec<BatchCancelItem>,
}

/// Request to cancel all orders of a symbol.
#[derive(Debug, Clone, Serialize)]
pub struct CancelSymbolOrderRequest {
    /// Trading pair.
    pub symbol: String,
}

/// Request for a single order's details.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderInfoRequest {
    /// Order ID.
    pub order_id: Option<String>,
    /// Client order ID.
    pub client_oid: Option<String>,
    /// Request time in milliseconds.
    pub request_time: Option<u64>,
    /// Validity window in milliseconds.
    pub receive_window: Option<u64>,
}

/// Filters for unfilled orders and order history.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersRequest {
    /// Trading pair.
    pub symbol: Option<String>,
    /// Start time in milliseconds.
    pub start_time: Option<u64>,
    /// End time in milliseconds.
    pub end_time: Option<u64>,
    /// Return orders older than this order ID.
    pub id_less_than: Option<String>,
    /// Page size.
    pub limit: Option<u32>,
    /// Order ID.
    pub order_id: Option<String>,
    /// Plain or TP/SL orders.
    pub tpsl_type: Option<TpslType>,
    /// Request time in milliseconds.
    pub request_time: Option<u64>,
    /// Validity window in milliseconds.
    pub receive_window: Option<u64>,
}

/// Filters for the account's fills.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FillsRequest {
    /// Trading pair.
    pub symbol: Option<String>,
    /// Order ID.
    pub order_id: Option<String>,
    /// Start time in milliseconds.
    pub start_time: Option<u64>,
    /// End time in milliseconds.
    pub end_time: Option<u64>,
    /// Page size.
    pub limit: Option<u32>,
    /// Return fills older than this fill ID.
    pub id_less_than: Option<String>,
}

/// Request to place a plan (trigger) order.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacePlanOrderRequest {
    /// Trading pair.
    pub symbol: String,
    /// Order side.
    pub side: Side,
    /// Price that fires the order.
    pub trigger_price: Decimal,
    /// Type of the order placed when fired.
    pub order_type: OrderType,
    /// Limit price of the placed order.
    pub execute_price: Option<Decimal>,
    /// Unit of `size`.
    pub plan_type: Option<PlanType>,
    /// Order size.
    pub size: Option<Decimal>,
    /// Price source for the trigger.
    pub trigger_type: Option<TriggerType>,
    /// Client order ID.
    pub client_oid: Option<String>,
    /// Self-trade prevention mode.
    pub stp_mode: Option<StpMode>,
}

impl PlacePlanOrderRequest {
    /// Create a new plan order request.
    pub fn new(
        symbol: impl Into<String>,
        side: Side,
        trigger_price: Decimal,
        order_type: OrderType,
        size: Decimal,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            trigger_price,
            order_type,
            execute_price: None,
            plan_type: None,
            size: Some(size),
            trigger_type: None,
            client_oid: None,
            stp_mode: None,
        }
    }

    /// Set the execution price (limit plan orders).
    pub fn execute_price(mut self, price: Decimal) -> Self {
        self.execute_price = Some(price);
        self
    }

    /// Set the trigger price source.
    pub fn trigger_type(mut self, trigger_type: TriggerType) -> Self {
        self.trigger_type = Some(trigger_type);
        self
    }

    /// Set the client order ID.
    pub fn client_oid(mut self, client_oid: impl Into<String>) -> Self {
        self.client_oid = Some(client_oid.into());
        self
    }
}

/// Request to modify a plan order.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyPlanOrderRequest {
    /// Plan order ID.
    pub order_id: String,
    /// New trigger price.
    pub trigger_price: Option<Decimal>,
    /// New execution price.
    pub execute_price: Option<Decimal>,
    /// New size.
    pub size: Option<Decimal>,
    /// New order type.
    pub order_type: Option<OrderType>,
}

impl ModifyPlanOrderRequest {
    /// Create a new modification request for the given plan order.
    pub fn new(order_id: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            trigger_price: None,
            execute_price: None,
            size: None,
            order_type: None,
        }
    }
}

/// Request identifying a single plan order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanOrderIdRequest {
    /// Plan order ID.
    pub order_id: String,
}

impl PlanOrderIdRequest {
    /// Create a new request.
    pub fn new(order_id: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
        }
    }
}

/// Filters for current plan orders.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentPlanOrderRequest {
    /// Trading pair.
    pub symbol: String,
    /// Order type.
    pub order_type: Option<OrderType>,
    /// Order side.
    pub side: Option<Side>,
    /// Start time in milliseconds.
    pub start_time: Option<u64>,
    /// End time in milliseconds.
    pub end_time: Option<u64>,
    /// Page size.
    pub limit: Option<u32>,
}

impl CurrentPlanOrderRequest {
    /// Create a new request for the given symbol.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            order_type: None,
            side: None,
            start_time: None,
            end_time: None,
            limit: None,
        }
    }
}

/// Filters for plan order history.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryPlanOrderRequest {
    /// Trading pair.
    pub symbol: String,
    /// Start time in milliseconds.
    pub start_time: u64,
    /// End time in milliseconds.
    pub end_time: u64,
    /// Page size.
    pub limit: Option<u32>,
}

impl HistoryPlanOrderRequest {
    /// Create a new request.
    pub fn new(symbol: impl Into<String>, start_time: u64, end_time: u64) -> Self {
        Self {
            symbol: symbol.into(),
            start_time,
            end_time,
            limit: None,
        }
    }
}

/// Request to cancel all plan orders of several symbols.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchCancelPlanOrderRequest {
    /// Symbols whose plan orders are cancelled.
    pub symbol_list: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_place_order_wire_format() {
        let request = PlaceOrderRequest::limit(
            "BTCUSDT",
            Side::Buy,
            "30000".parse().unwrap(),
            "0.001".parse().unwrap(),
        )
        .client_oid("my-order-1");

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "symbol": "BTCUSDT",
                "side": "buy",
                "orderType": "limit",
                "force": "gtc",
                "price": "30000",
                "size": "0.001",
                "clientOid": "my-order-1"
            })
        );
    }

    #[test]
    fn test_batch_cancel_replace_wire_format() {
        let request = BatchCancelReplaceOrderRequest {
            order_list: vec![CancelReplaceOrderRequest::by_order_id(
                "ETHUSDT",
                "123457",
                "2000".parse().unwrap(),
                "0.01".parse().unwrap(),
            )],
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "orderList": [{
                    "symbol": "ETHUSDT",
                    "price": "2000",
                    "size": "0.01",
                    "orderId": "123457"
                }]
            })
        );
    }

    #[test]
    fn test_cancel_order_by_client_oid() {
        let request = CancelOrderRequest::by_client_oid("BTCUSDT", "abc");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"symbol": "BTCUSDT", "clientOid": "abc"})
        );
    }
}
