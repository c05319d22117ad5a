//! Bitget spot REST API client.
//!
//! Endpoint wrappers are grouped by area:
//! - [`market`] - public market data
//! - [`trade`] - orders and plan orders
//! - [`account`] - balances, bills and account settings
//! - [`wallet`] - transfers, deposits and withdrawals
//!
//! Endpoints without a wrapper can be reached through
//! [`BitgetRestClient::dispatch`]:
//!
//! ```rust,no_run
//! use bitget_api_client::request::Verb;
//! use bitget_api_client::spot::rest::BitgetRestClient;
//! use serde_json::json;
//!
//! async fn server_time(client: &BitgetRestClient) -> Result<(), bitget_api_client::BitgetError> {
//!     let time = client.dispatch(Verb::Get, "/public/time", &json!({})).await?;
//!     println!("Server time: {}", time["data"]["serverTime"]);
//!     Ok(())
//! }
//! ```

mod client;
mod endpoints;
pub mod account;
pub mod market;
pub mod trade;
pub mod wallet;

pub use client::{BitgetRestClient, BitgetRestClientBuilder};
pub use endpoints::*;
