//! Bitget spot trading API clients.
//!
//! - [`rest`] - REST API client for HTTP-based requests

pub mod rest;

pub use rest::BitgetRestClient;
