//! Request signing for Bitget API authentication.
//!
//! The current (v2) protocol signs:
//! ```text
//! Base64(HMAC-SHA256(timestamp_ms + VERB + "/api/v2" + path + ["?" + query | body], secret))
//! ```
//!
//! GET parameters are sorted by key and the `?query` part is omitted when there are
//! none; POST always appends the JSON body. The legacy protocol used a seconds
//! timestamp, unsorted parameters and a hex HMAC-SHA512 instead. Which one is used
//! is fixed per client through [`SigningPolicy`].

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use sha2::{Sha256, Sha512};

use crate::auth::{Credentials, Timestamp};
use crate::error::BitgetError;
use crate::request::{RequestParams, Verb};

type HmacSha256 = Hmac<Sha256>;
type HmacSha512 = Hmac<Sha512>;

/// Versioned path prefix prepended to every endpoint path.
pub const API_PATH_PREFIX: &str = "/api/v2";

/// Header carrying the API key.
pub const ACCESS_KEY: &str = "ACCESS-KEY";
/// Header carrying the signature.
pub const ACCESS_SIGN: &str = "ACCESS-SIGN";
/// Header carrying the request timestamp.
pub const ACCESS_TIMESTAMP: &str = "ACCESS-TIMESTAMP";
/// Header carrying the API passphrase.
pub const ACCESS_PASSPHRASE: &str = "ACCESS-PASSPHRASE";

const V2_STATIC_HEADERS: &[(&str, &str)] = &[
    ("Content-Type", "application/json"),
    ("X-CHANNEL-API-CODE", "spot"),
];

const LEGACY_STATIC_HEADERS: &[(&str, &str)] = &[
    ("Content-Type", "application/json"),
    ("locale", "en-AU"),
    ("Accept", "application/json"),
];

/// Signing protocol revision.
///
/// The two revisions are not wire-compatible; pick one explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SigningPolicy {
    /// Millisecond timestamp, sorted GET parameters, Base64 HMAC-SHA256.
    #[default]
    V2,
    /// Second timestamp, parameters in insertion order, hex HMAC-SHA512.
    Legacy,
}

impl SigningPolicy {
    /// Whether parameters are sorted by key before canonicalization.
    pub fn sorts_params(self) -> bool {
        matches!(self, SigningPolicy::V2)
    }

    /// Render a timestamp in the resolution this revision expects.
    pub fn format_timestamp(self, timestamp: Timestamp) -> String {
        match self {
            SigningPolicy::V2 => timestamp.as_millis().to_string(),
            SigningPolicy::Legacy => timestamp.as_secs().to_string(),
        }
    }

    /// Build the exact message to sign.
    ///
    /// `timestamp` must be the already formatted header value. `params` are used as
    /// given; null removal and sorting happen when they are built.
    pub fn canonical_message(
        self,
        timestamp: &str,
        verb: Verb,
        path: &str,
        params: &RequestParams,
    ) -> Result<String, BitgetError> {
        let mut message = format!("{timestamp}{verb}{API_PATH_PREFIX}{path}");

        match (self, verb) {
            (SigningPolicy::V2, Verb::Get) => {
                if !params.is_empty() {
                    message.push('?');
                    message.push_str(&params.query_string()?);
                }
            }
            (SigningPolicy::Legacy, Verb::Get) => {
                message.push('?');
                message.push_str(&params.query_string()?);
                message.push_str(&params.json_body()?);
            }
            (_, Verb::Post) => message.push_str(&params.json_body()?),
        }

        Ok(message)
    }

    /// Compute the signature of `message` keyed by `secret`.
    pub fn sign(self, secret: &str, message: &str) -> Result<String, BitgetError> {
        match self {
            SigningPolicy::V2 => {
                let mut hmac = HmacSha256::new_from_slice(secret.as_bytes())
                    .map_err(|e| BitgetError::Auth(format!("Invalid HMAC key: {e}")))?;
                hmac.update(message.as_bytes());
                Ok(BASE64.encode(hmac.finalize().into_bytes()))
            }
            SigningPolicy::Legacy => {
                let mut hmac = HmacSha512::new_from_slice(secret.as_bytes())
                    .map_err(|e| BitgetError::Auth(format!("Invalid HMAC key: {e}")))?;
                hmac.update(message.as_bytes());
                Ok(hex::encode(hmac.finalize().into_bytes()))
            }
        }
    }

    /// Headers sent with every request under this revision, signed or not.
    pub fn static_headers(self) -> &'static [(&'static str, &'static str)] {
        match self {
            SigningPolicy::V2 => V2_STATIC_HEADERS,
            SigningPolicy::Legacy => LEGACY_STATIC_HEADERS,
        }
    }

    /// The static headers as a header map.
    pub fn static_header_map(self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for (name, value) in self.static_headers() {
            if let Ok(name) = HeaderName::from_bytes(name.as_bytes()) {
                headers.insert(name, HeaderValue::from_static(value));
            }
        }
        headers
    }
}

/// The authentication headers for one request.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthHeaders {
    /// `ACCESS-KEY`
    pub access_key: String,
    /// `ACCESS-SIGN`
    pub access_sign: String,
    /// `ACCESS-TIMESTAMP`
    pub access_timestamp: String,
    /// `ACCESS-PASSPHRASE`
    pub access_passphrase: String,
    policy: SigningPolicy,
}

impl AuthHeaders {
    /// The signing revision that produced these headers.
    pub fn policy(&self) -> SigningPolicy {
        self.policy
    }

    /// All headers to send, authentication first, then the static ones.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        [
            (ACCESS_KEY, self.access_key.as_str()),
            (ACCESS_SIGN, self.access_sign.as_str()),
            (ACCESS_TIMESTAMP, self.access_timestamp.as_str()),
            (ACCESS_PASSPHRASE, self.access_passphrase.as_str()),
        ]
        .into_iter()
        .chain(self.policy.static_headers().iter().copied())
    }

    /// Convert into a header map for the transport.
    pub fn to_header_map(&self) -> Result<HeaderMap, BitgetError> {
        let mut headers = self.policy.static_header_map();
        for (name, value) in [
            (ACCESS_KEY, &self.access_key),
            (ACCESS_SIGN, &self.access_sign),
            (ACCESS_TIMESTAMP, &self.access_timestamp),
            (ACCESS_PASSPHRASE, &self.access_passphrase),
        ] {
            let mut value = HeaderValue::from_str(value)
                .map_err(|_| BitgetError::Auth(format!("{name} is not a valid header value")))?;
            if name == ACCESS_SIGN || name == ACCESS_PASSPHRASE {
                value.set_sensitive(true);
            }
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| BitgetError::Auth(format!("Invalid header name {name}: {e}")))?;
            headers.insert(name, value);
        }
        Ok(headers)
    }
}

impl std::fmt::Debug for AuthHeaders {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthHeaders")
            .field("access_key", &self.access_key)
            .field("access_sign", &"[REDACTED]")
            .field("access_timestamp", &self.access_timestamp)
            .field("access_passphrase", &"[REDACTED]")
            .field("policy", &self.policy)
            .finish()
    }
}

/// Sign a request for Bitget's REST API.
///
/// # Arguments
///
/// * `credentials` - API credentials; only the secret keys the HMAC
/// * `policy` - The signing protocol revision
/// * `verb` - GET or POST
/// * `path` - Endpoint path without the `/api/v2` prefix (e.g. "/spot/account/info")
/// * `params` - Normalized request parameters, exactly as they will be sent
/// * `timestamp` - The timestamp captured for this request
///
/// # Example
///
/// ```rust
/// use bitget_api_client::auth::{Credentials, SigningPolicy, Timestamp, sign_request};
/// use bitget_api_client::request::{RequestParams, Verb};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = Credentials::new("api_key", "api_secret", "api_passphrase");
/// let params = RequestParams::new().with("symbol", "BTCUSDT");
/// let headers = sign_request(
///     &credentials,
///     SigningPolicy::V2,
///     Verb::Get,
///     "/spot/market/tickers",
///     &params,
///     Timestamp::from_millis(1_700_000_000_000),
/// )?;
/// assert_eq!(headers.access_timestamp, "1700000000000");
/// # Ok(())
/// # }
/// ```
pub fn sign_request(
    credentials: &Credentials,
    policy: SigningPolicy,
    verb: Verb,
    path: &str,
    params: &RequestParams,
    timestamp: Timestamp,
) -> Result<AuthHeaders, BitgetError> {
    let access_timestamp = policy.format_timestamp(timestamp);
    let message = policy.canonical_message(&access_timestamp, verb, path, params)?;
    let access_sign = policy.sign(credentials.expose_secret(), &message)?;

    Ok(AuthHeaders {
        access_key: credentials.api_key.clone(),
        access_sign,
        access_timestamp,
        access_passphrase: credentials.expose_passphrase().to_string(),
        policy,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    const TS: Timestamp = Timestamp::from_millis(1_700_000_000_123);

    fn credentials() -> Credentials {
        Credentials::new("test_key", "test_secret", "test_passphrase")
    }

    fn expected_v2(message: &str) -> String {
        let mut hmac = HmacSha256::new_from_slice(b"test_secret").unwrap();
        hmac.update(message.as_bytes());
        BASE64.encode(hmac.finalize().into_bytes())
    }

    #[test]
    fn test_v2_get_without_params() {
        let message = SigningPolicy::V2
            .canonical_message("1700000000123", Verb::Get, "/spot/account/info", &RequestParams::new())
            .unwrap();
        assert_eq!(message, "1700000000123GET/api/v2/spot/account/info");
    }

    #[test]
    fn test_v2_get_with_sorted_params() {
        let params = RequestParams::new()
            .with("symbol", "BTCUSDT")
            .with("granularity", "1min")
            .with("startTime", Value::Null)
            .sorted();
        let message = SigningPolicy::V2
            .canonical_message("1700000000123", Verb::Get, "/spot/market/candles", &params)
            .unwrap();
        assert_eq!(
            message,
            "1700000000123GET/api/v2/spot/market/candles?granularity=1min&symbol=BTCUSDT"
        );
    }

    #[test]
    fn test_v2_post_always_has_body() {
        let message = SigningPolicy::V2
            .canonical_message("1", Verb::Post, "/spot/trade/cancel-symbol-order", &RequestParams::new())
            .unwrap();
        assert_eq!(message, "1POST/api/v2/spot/trade/cancel-symbol-order{}");

        let params = RequestParams::new().with("symbol", "BTCUSDT");
        let message = SigningPolicy::V2
            .canonical_message("1", Verb::Post, "/spot/trade/cancel-symbol-order", &params)
            .unwrap();
        assert_eq!(
            message,
            r#"1POST/api/v2/spot/trade/cancel-symbol-order{"symbol":"BTCUSDT"}"#
        );
    }

    #[test]
    fn test_v2_signature_matches_hmac_sha256_base64() {
        let params = RequestParams::new().with("coin", "BTC");
        let headers = sign_request(
            &credentials(),
            SigningPolicy::V2,
            Verb::Get,
            "/spot/public/coins",
            &params,
            TS,
        )
        .unwrap();

        let message = "1700000000123GET/api/v2/spot/public/coins?coin=BTC";
        assert_eq!(headers.access_sign, expected_v2(message));
        assert_eq!(headers.access_timestamp, "1700000000123");
        assert_eq!(headers.access_key, "test_key");
        assert_eq!(headers.access_passphrase, "test_passphrase");
        // HMAC-SHA256 produces 32 bytes, base64 encoded = 44 chars (with padding)
        assert_eq!(headers.access_sign.len(), 44);
    }

    #[test]
    fn test_signature_deterministic() {
        let params = RequestParams::new().with("symbol", "BTCUSDT");
        let sign = || {
            sign_request(&credentials(), SigningPolicy::V2, Verb::Get, "/spot/market/tickers", &params, TS)
                .unwrap()
                .access_sign
        };
        assert_eq!(sign(), sign());
    }

    #[test]
    fn test_signature_changes_with_each_input() {
        let params = RequestParams::new().with("symbol", "BTCUSDT");
        let base = sign_request(&credentials(), SigningPolicy::V2, Verb::Get, "/spot/market/tickers", &params, TS)
            .unwrap()
            .access_sign;

        let other_ts = sign_request(
            &credentials(),
            SigningPolicy::V2,
            Verb::Get,
            "/spot/market/tickers",
            &params,
            Timestamp::from_millis(TS.as_millis() + 1),
        )
        .unwrap();
        let other_verb = sign_request(&credentials(), SigningPolicy::V2, Verb::Post, "/spot/market/tickers", &params, TS)
            .unwrap();
        let other_path = sign_request(&credentials(), SigningPolicy::V2, Verb::Get, "/spot/market/fills", &params, TS)
            .unwrap();
        let other_params = sign_request(
            &credentials(),
            SigningPolicy::V2,
            Verb::Get,
            "/spot/market/tickers",
            &RequestParams::new().with("symbol", "ETHUSDT"),
            TS,
        )
        .unwrap();
        let other_secret = sign_request(
            &Credentials::new("test_key", "other_secret", "test_passphrase"),
            SigningPolicy::V2,
            Verb::Get,
            "/spot/market/tickers",
            &params,
            TS,
        )
        .unwrap();

        for other in [other_ts, other_verb, other_path, other_params, other_secret] {
            assert_ne!(base, other.access_sign);
        }
    }

    #[test]
    fn test_key_and_passphrase_do_not_affect_signature() {
        let params = RequestParams::new();
        let a = sign_request(&credentials(), SigningPolicy::V2, Verb::Get, "/spot/account/info", &params, TS)
            .unwrap();
        let b = sign_request(
            &Credentials::new("another_key", "test_secret", "another_passphrase"),
            SigningPolicy::V2,
            Verb::Get,
            "/spot/account/info",
            &params,
            TS,
        )
        .unwrap();
        assert_eq!(a.access_sign, b.access_sign);
    }

    #[test]
    fn test_legacy_policy() {
        let params = RequestParams::new().with("symbol", "BTCUSDT").with("limit", 5);
        let headers = sign_request(
            &credentials(),
            SigningPolicy::Legacy,
            Verb::Get,
            "/spot/market/fills",
            &params,
            TS,
        )
        .unwrap();

        assert_eq!(headers.access_timestamp, "1700000000");
        let message = SigningPolicy::Legacy
            .canonical_message("1700000000", Verb::Get, "/spot/market/fills", &params)
            .unwrap();
        assert_eq!(
            message,
            r#"1700000000GET/api/v2/spot/market/fills?symbol=BTCUSDT&limit=5{"symbol":"BTCUSDT","limit":5}"#
        );

        let mut hmac = HmacSha512::new_from_slice(b"test_secret").unwrap();
        hmac.update(message.as_bytes());
        assert_eq!(headers.access_sign, hex::encode(hmac.finalize().into_bytes()));
        // HMAC-SHA512 produces 64 bytes, hex encoded = 128 chars
        assert_eq!(headers.access_sign.len(), 128);
        assert!(!SigningPolicy::Legacy.sorts_params());
        assert_eq!(headers.policy(), SigningPolicy::Legacy);
    }

    #[test]
    fn test_legacy_post_keeps_insertion_order() {
        let params = RequestParams::new()
            .with("z", "1")
            .with("a", Value::Null)
            .with("b", 2);
        let headers = sign_request(
            &credentials(),
            SigningPolicy::Legacy,
            Verb::Post,
            "/spot/trade/place-order",
            &params,
            TS,
        )
        .unwrap();

        let message = SigningPolicy::Legacy
            .canonical_message("1700000000", Verb::Post, "/spot/trade/place-order", &params)
            .unwrap();
        assert_eq!(
            message,
            r#"1700000000POST/api/v2/spot/trade/place-order{"z":"1","b":2}"#
        );

        let mut hmac = HmacSha512::new_from_slice(b"test_secret").unwrap();
        hmac.update(message.as_bytes());
        assert_eq!(headers.access_sign, hex::encode(hmac.finalize().into_bytes()));
    }

    #[test]
    fn test_legacy_get_without_params_keeps_separator_and_body() {
        let message = SigningPolicy::Legacy
            .canonical_message("1700000000", Verb::Get, "/spot/account/info", &RequestParams::new())
            .unwrap();
        assert_eq!(message, "1700000000GET/api/v2/spot/account/info?{}");

        let headers = sign_request(
            &credentials(),
            SigningPolicy::Legacy,
            Verb::Get,
            "/spot/account/info",
            &RequestParams::new(),
            TS,
        )
        .unwrap();
        let mut hmac = HmacSha512::new_from_slice(b"test_secret").unwrap();
        hmac.update(message.as_bytes());
        assert_eq!(headers.access_sign, hex::encode(hmac.finalize().into_bytes()));
    }

    #[test]
    fn test_header_names_and_static_headers() {
        let headers = sign_request(
            &credentials(),
            SigningPolicy::V2,
            Verb::Get,
            "/spot/account/info",
            &RequestParams::new(),
            TS,
        )
        .unwrap();

        assert_eq!(headers.policy(), SigningPolicy::V2);
        let names: Vec<&str> = headers.iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            vec![
                "ACCESS-KEY",
                "ACCESS-SIGN",
                "ACCESS-TIMESTAMP",
                "ACCESS-PASSPHRASE",
                "Content-Type",
                "X-CHANNEL-API-CODE",
            ]
        );

        let map = headers.to_header_map().unwrap();
        assert_eq!(map.get("access-key").unwrap(), "test_key");
        assert_eq!(map.get("access-timestamp").unwrap(), "1700000000123");
        assert_eq!(map.get("content-type").unwrap(), "application/json");
        assert_eq!(map.get("x-channel-api-code").unwrap(), "spot");
        assert!(map.get("access-sign").unwrap().is_sensitive());

        let legacy = SigningPolicy::Legacy.static_header_map();
        assert_eq!(legacy.get("locale").unwrap(), "en-AU");
        assert_eq!(legacy.get("accept").unwrap(), "application/json");
    }

    #[test]
    fn test_auth_headers_debug_redacted() {
        let headers = sign_request(
            &credentials(),
            SigningPolicy::V2,
            Verb::Get,
            "/spot/account/info",
            &RequestParams::new(),
            TS,
        )
        .unwrap();
        let debug_str = format!("{headers:?}");
        assert!(!debug_str.contains("test_passphrase"));
        assert!(!debug_str.contains(&headers.access_sign));
    }
}
