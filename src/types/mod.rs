//! Common types used across the Bitget client library.

pub mod common;

pub use common::*;
