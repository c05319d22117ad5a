//! Trading endpoints (authentication required).

mod types;

pub use types::*;

use serde_json::Value;

use crate::error::BitgetError;
use crate::spot::rest::BitgetRestClient;
use crate::spot::rest::endpoints::trade;

impl BitgetRestClient {
    /// Place an order.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use bitget_api_client::auth::StaticCredentials;
    /// use bitget_api_client::spot::rest::BitgetRestClient;
    /// use bitget_api_client::spot::rest::trade::PlaceOrderRequest;
    /// use bitget_api_client::types::Side;
    /// use std::sync::Arc;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let credentials = Arc::new(StaticCredentials::new("key", "secret", "passphrase"));
    ///     let client = BitgetRestClient::builder().credentials(credentials).build();
    ///
    ///     let order = PlaceOrderRequest::limit(
    ///         "BTCUSDT",
    ///         Side::Buy,
    ///         "30000".parse()?,
    ///         "0.001".parse()?,
    ///     )
    ///     .client_oid("my-order-1");
    ///     let response = client.place_order(&order).await?;
    ///     println!("order id: {}", response["data"]["orderId"]);
    ///     Ok(())
    /// }
    /// ```
    pub async fn place_order(&self, request: &PlaceOrderRequest) -> Result<Value, BitgetError> {
        self.private_post(trade::PLACE_ORDER, request).await
    }

    /// Cancel an order and place a replacement.
    pub async fn cancel_replace_order(
        &self,
        request: &CancelReplaceOrderRequest,
    ) -> Result<Value, BitgetError> {
        self.private_post(trade::CANCEL_REPLACE_ORDER, request).await
    }

    /// Cancel and replace several orders.
    pub async fn batch_cancel_replace_order(
        &self,
        request: &BatchCancelReplaceOrderRequest,
    ) -> Result<Value, BitgetError> {
        self.private_post(trade::BATCH_CANCEL_REPLACE_ORDER, request)
            .await
    }

    /// Cancel an order.
    pub async fn cancel_order(&self, request: &CancelOrderRequest) -> Result<Value, BitgetError> {
        self.private_post(trade::CANCEL_ORDER, request).await
    }

    /// Place several orders.
    pub async fn batch_orders(&self, request: &BatchOrdersRequest) -> Result<Value, BitgetError> {
        self.private_post(trade::BATCH_ORDERS, request).await
    }

    /// Cancel several orders.
    pub async fn batch_cancel_order(
        &self,
        request: &BatchCancelOrderRequest,
    ) -> Result<Value, BitgetError> {
        self.private_post(trade::BATCH_CANCEL_ORDER, request).await
    }

    /// Cancel all orders of a symbol.
    pub async fn cancel_symbol_order(
        &self,
        request: &CancelSymbolOrderRequest,
    ) -> Result<Value, BitgetError> {
        self.private_post(trade::CANCEL_SYMBOL_ORDER, request).await
    }

    /// Get an order's details.
    pub async fn get_order_info(&self, request: &OrderInfoRequest) -> Result<Value, BitgetError> {
        self.private_get(trade::ORDER_INFO, request).await
    }

    /// Get open orders.
    pub async fn get_unfilled_orders(
        &self,
        request: Option<&OrdersRequest>,
    ) -> Result<Value, BitgetError> {
        self.private_get(trade::UNFILLED_ORDERS, &request).await
    }

    /// Get orders from the last 90 days.
    pub async fn get_history_orders(
        &self,
        request: Option<&OrdersRequest>,
    ) -> Result<Value, BitgetError> {
        self.private_get(trade::HISTORY_ORDERS, &request).await
    }

    /// Get the account's fills.
    pub async fn get_fills(&self, request: &FillsRequest) -> Result<Value, BitgetError> {
        self.private_get(trade::FILLS, request).await
    }

    /// Place a plan (trigger) order.
    pub async fn place_plan_order(
        &self,
        request: &PlacePlanOrderRequest,
    ) -> Result<Value, BitgetError> {
        self.private_post(trade::PLACE_PLAN_ORDER, request).await
    }

    /// Modify a plan order.
    pub async fn modify_plan_order(
        &self,
        request: &ModifyPlanOrderRequest,
    ) -> Result<Value, BitgetError> {
        self.private_post(trade::MODIFY_PLAN_ORDER, request).await
    }

    /// Cancel a plan order.
    pub async fn cancel_plan_order(
        &self,
        request: &PlanOrderIdRequest,
    ) -> Result<Value, BitgetError> {
        self.private_post(trade::CANCEL_PLAN_ORDER, request).await
    }

    /// Get current plan orders.
    pub async fn get_current_plan_orders(
        &self,
        request: &CurrentPlanOrderRequest,
    ) -> Result<Value, BitgetError> {
        self.private_get(trade::CURRENT_PLAN_ORDER, request).await
    }

    /// Get the orders placed by a fired plan order.
    pub async fn get_plan_sub_order(
        &self,
        request: &PlanOrderIdRequest,
    ) -> Result<Value, BitgetError> {
        self.private_get(trade::PLAN_SUB_ORDER, request).await
    }

    /// Get plan order history.
    pub async fn get_history_plan_orders(
        &self,
        request: &HistoryPlanOrderRequest,
    ) -> Result<Value, BitgetError> {
        self.private_get(trade::HISTORY_PLAN_ORDER, request).await
    }

    /// Cancel all plan orders of the given symbols.
    pub async fn batch_cancel_plan_order(
        &self,
        request: &BatchCancelPlanOrderRequest,
    ) -> Result<Value, BitgetError> {
        self.private_post(trade::BATCH_CANCEL_PLAN_ORDER, request)
            .await
    }
}
