//! Error types for the Bitget client library.

use thiserror::Error;

/// The main error type for all Bitget client operations.
#[derive(Error, Debug)]
pub enum BitgetError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The exchange answered with a non-success HTTP status
    #[error("Bitget API error: {0}")]
    Api(ApiError),

    /// A verb other than GET or POST was requested
    #[error("Unsupported HTTP verb: {0}")]
    UnsupportedVerb(String),

    /// Request parameters could not be turned into a flat JSON object
    #[error("Invalid request parameters: {0}")]
    InvalidParams(String),

    /// Authentication error (bad header value, unusable key material)
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Missing required credentials
    #[error("Missing credentials: API key, secret and passphrase required for private endpoints")]
    MissingCredentials,
}

/// A failed HTTP exchange with the Bitget API.
///
/// Built from the transport response, not from the `code` field of a JSON body:
/// `code` is the HTTP status (e.g. `"418"`), `message` the status reason phrase and
/// `body` the raw response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code as a string
    pub code: String,
    /// HTTP status message
    pub message: String,
    /// Raw response body
    pub body: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.code, self.message)?;
        if !self.body.is_empty() {
            write!(f, ": {}", self.body)?;
        }
        Ok(())
    }
}

impl ApiError {
    /// Create a new API error.
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            body: body.into(),
        }
    }

    /// Build an error from an HTTP status and the raw body.
    pub fn from_status(status: reqwest::StatusCode, body: impl Into<String>) -> Self {
        Self::new(
            status.as_str(),
            status.canonical_reason().unwrap_or_default(),
            body,
        )
    }

    /// The HTTP status code as a number, if `code` is numeric.
    pub fn status(&self) -> Option<u16> {
        self.code.parse().ok()
    }

    /// The exchange's own error code from the body (e.g. `"40009"`), if the body
    /// is a Bitget error document.
    pub fn exchange_code(&self) -> Option<String> {
        self.body_field("code")
    }

    /// The exchange's own error message from the body.
    pub fn exchange_message(&self) -> Option<String> {
        self.body_field("msg")
    }

    fn body_field(&self, field: &str) -> Option<String> {
        let value: serde_json::Value = serde_json::from_str(&self.body).ok()?;
        match value.get(field)? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Check if this is a rate limit error.
    pub fn is_rate_limit(&self) -> bool {
        self.status() == Some(429)
            || self.exchange_code().as_deref() == Some(error_codes::TOO_MANY_REQUESTS)
    }

    /// Check if the request was rejected during authentication.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
            || self
                .exchange_code()
                .is_some_and(|c| error_codes::AUTHENTICATION.contains(&c.as_str()))
    }

    /// Check if this is an invalid signature error.
    pub fn is_invalid_signature(&self) -> bool {
        self.exchange_code().as_deref() == Some(error_codes::SIGNATURE_ERROR)
    }

    /// Check if the request timestamp was rejected as expired.
    pub fn is_timestamp_expired(&self) -> bool {
        self.exchange_code().as_deref() == Some(error_codes::TIMESTAMP_EXPIRED)
    }
}

/// Known Bitget error codes found in error bodies.
pub mod error_codes {
    /// ACCESS-KEY header is empty
    pub const ACCESS_KEY_EMPTY: &str = "40001";
    /// ACCESS-SIGN header is empty
    pub const ACCESS_SIGN_EMPTY: &str = "40002";
    /// Signature is empty
    pub const SIGNATURE_EMPTY: &str = "40003";
    /// ACCESS-TIMESTAMP is invalid
    pub const INVALID_TIMESTAMP: &str = "40005";
    /// ACCESS-KEY is invalid
    pub const INVALID_ACCESS_KEY: &str = "40006";
    /// Request timestamp expired
    pub const TIMESTAMP_EXPIRED: &str = "40008";
    /// Signature verification failed
    pub const SIGNATURE_ERROR: &str = "40009";
    /// Passphrase or key is incorrect
    pub const INCORRECT_PASSPHRASE: &str = "40012";
    /// API key does not exist
    pub const API_KEY_NOT_FOUND: &str = "40037";
    /// Too many requests
    pub const TOO_MANY_REQUESTS: &str = "429";

    /// Codes that mean the request never got past authentication.
    pub const AUTHENTICATION: &[&str] = &[
        ACCESS_KEY_EMPTY,
        ACCESS_SIGN_EMPTY,
        SIGNATURE_EMPTY,
        INVALID_TIMESTAMP,
        INVALID_ACCESS_KEY,
        TIMESTAMP_EXPIRED,
        SIGNATURE_ERROR,
        INCORRECT_PASSPHRASE,
        API_KEY_NOT_FOUND,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_from_status() {
        let error = ApiError::from_status(reqwest::StatusCode::IM_A_TEAPOT, "");
        assert_eq!(error.code, "418");
        assert_eq!(error.message, "I'm a teapot");
        assert_eq!(error.body, "");
        assert_eq!(error.status(), Some(418));
    }

    #[test]
    fn test_api_error_exchange_fields() {
        let error = ApiError::new(
            "400",
            "Bad Request",
            r#"{"code":"40009","msg":"sign signature error","requestTime":1700000000000,"data":null}"#,
        );
        assert_eq!(error.exchange_code().as_deref(), Some("40009"));
        assert_eq!(error.exchange_message().as_deref(), Some("sign signature error"));
        assert!(error.is_invalid_signature());
        assert!(error.is_unauthorized());
        assert!(!error.is_rate_limit());
        assert!(!error.is_timestamp_expired());
    }

    #[test]
    fn test_api_error_timestamp_expired() {
        let error = ApiError::new(
            "400",
            "Bad Request",
            r#"{"code":"40008","msg":"Request timestamp expired","requestTime":1700000000000}"#,
        );
        assert!(error.is_timestamp_expired());
        assert!(error.is_unauthorized());
        assert!(!error.is_invalid_signature());
    }

    #[test]
    fn test_api_error_non_json_body() {
        let error = ApiError::new("502", "Bad Gateway", "<html>upstream</html>");
        assert!(error.exchange_code().is_none());
        assert!(!error.is_unauthorized());
    }

    #[test]
    fn test_api_error_display() {
        let error = ApiError::new("429", "Too Many Requests", "");
        assert_eq!(error.to_string(), "429 Too Many Requests");
        assert!(error.is_rate_limit());
    }
}
