//! Authentication module for the Bitget API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - Per-request timestamps
//! - Canonical message construction and HMAC signing, per protocol revision

mod credentials;
mod signature;
mod timestamp;

pub use credentials::{
    API_KEY_VAR, API_PASSPHRASE_VAR, API_SECRET_VAR, Credentials, CredentialsProvider,
    EnvCredentials, StaticCredentials,
};
pub use signature::{
    ACCESS_KEY, ACCESS_PASSPHRASE, ACCESS_SIGN, ACCESS_TIMESTAMP, API_PATH_PREFIX, AuthHeaders,
    SigningPolicy, sign_request,
};
pub use timestamp::{IncreasingTimestamp, Timestamp, TimestampProvider};
