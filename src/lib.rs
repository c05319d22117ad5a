//! # Bitget API Client
//!
//! An async Rust client library for the Bitget spot REST API.
//!
//! ## Features
//!
//! - Signed requests for the v2 protocol (and the legacy v1 scheme)
//! - Market, trade, account and wallet endpoints
//! - Optional request/response logging to a daily-rotated file
//! - Financial precision with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bitget_api_client::spot::rest::BitgetRestClient;
//! use bitget_api_client::spot::rest::market::TickersRequest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BitgetRestClient::new();
//!     let ticker = client.get_tickers(&TickersRequest::for_symbol("BTCUSDT")).await?;
//!     println!("Ticker: {}", ticker["data"][0]);
//!     Ok(())
//! }
//! ```
//!
//! Private endpoints need an API key, secret and passphrase, for example from
//! the `BITGET_API_KEY`, `BITGET_API_SECRET` and `BITGET_API_PASSPHRASE`
//! environment variables:
//!
//! ```rust,no_run
//! use bitget_api_client::BitgetError;
//! use bitget_api_client::auth::EnvCredentials;
//! use bitget_api_client::spot::rest::BitgetRestClient;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = EnvCredentials::try_from_env().ok_or(BitgetError::MissingCredentials)?;
//!     let client = BitgetRestClient::builder()
//!         .credentials(Arc::new(credentials))
//!         .build();
//!     let assets = client.get_account_assets(None).await?;
//!     println!("Assets: {}", assets["data"]);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod logging;
pub mod request;
pub mod spot;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{ApiError, BitgetError};
pub use types::common::{OrderType, Side};

/// Result type alias using BitgetError
pub type Result<T> = std::result::Result<T, BitgetError>;
