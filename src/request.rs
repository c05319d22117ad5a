//! Request verbs and normalized request parameters.
//!
//! Both the signed message and the bytes put on the wire are derived from one
//! [`RequestParams`] value.

use std::str::FromStr;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::BitgetError;

/// HTTP verbs accepted by the Bitget REST API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    /// Parameters travel in the query string.
    Get,
    /// Parameters travel as a JSON body.
    Post,
}

impl Verb {
    /// The upper-case verb as it appears in the signed message.
    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
        }
    }
}

impl std::fmt::Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verb {
    type Err = BitgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("GET") {
            Ok(Verb::Get)
        } else if s.eq_ignore_ascii_case("POST") {
            Ok(Verb::Post)
        } else {
            Err(BitgetError::UnsupportedVerb(s.to_string()))
        }
    }
}

impl TryFrom<&reqwest::Method> for Verb {
    type Error = BitgetError;

    fn try_from(method: &reqwest::Method) -> Result<Self, Self::Error> {
        match *method {
            reqwest::Method::GET => Ok(Verb::Get),
            reqwest::Method::POST => Ok(Verb::Post),
            _ => Err(BitgetError::UnsupportedVerb(method.to_string())),
        }
    }
}

impl From<Verb> for reqwest::Method {
    fn from(verb: Verb) -> Self {
        match verb {
            Verb::Get => reqwest::Method::GET,
            Verb::Post => reqwest::Method::POST,
        }
    }
}

/// Request parameters with null values removed.
///
/// Entries keep insertion order until [`RequestParams::sorted`] is applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestParams {
    entries: Vec<(String, Value)>,
}

impl RequestParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build parameters from any serializable value that maps to a JSON object.
    ///
    /// `None` fields (serialized as `null`) are dropped. A value serializing to
    /// `null` (e.g. `()`) yields an empty set.
    pub fn from_serialize<T>(params: &T) -> Result<Self, BitgetError>
    where
        T: Serialize + ?Sized,
    {
        match serde_json::to_value(params)? {
            Value::Null => Ok(Self::new()),
            Value::Object(map) => Ok(map.into_iter().collect()),
            other => Err(BitgetError::InvalidParams(format!(
                "expected a JSON object, got {other}"
            ))),
        }
    }

    /// Add a parameter. Null values are ignored.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let value = value.into();
        if value.is_null() {
            return;
        }
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Add a parameter, builder style. Null values are ignored.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sort the parameters by key.
    pub fn sorted(mut self) -> Self {
        self.entries.sort_by(|a, b| a.0.cmp(&b.0));
        self
    }

    /// Whether no non-null parameter is present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over `(key, value)` pairs in their current order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Look up a parameter by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// URL-encode the parameters as `k1=v1&k2=v2` in their current order.
    ///
    /// Strings are sent without quotes; other values use their JSON text.
    pub fn query_string(&self) -> Result<String, BitgetError> {
        let pairs: Vec<(&str, String)> = self
            .entries
            .iter()
            .map(|(k, v)| (k.as_str(), query_value(v)))
            .collect();
        serde_urlencoded::to_string(pairs).map_err(|e| BitgetError::InvalidParams(e.to_string()))
    }

    /// Serialize the parameters as a compact JSON object in their current order.
    pub fn json_body(&self) -> Result<String, BitgetError> {
        let map: Map<String, Value> = self.entries.iter().cloned().collect();
        Ok(serde_json::to_string(&map)?)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for RequestParams {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct CandlesQuery {
        symbol: String,
        granularity: String,
        start_time: Option<u64>,
        limit: Option<u32>,
    }

    #[test]
    fn test_verb_parsing() {
        assert_eq!("GET".parse::<Verb>().unwrap(), Verb::Get);
        assert_eq!("post".parse::<Verb>().unwrap(), Verb::Post);
        assert!(matches!(
            "DELETE".parse::<Verb>(),
            Err(BitgetError::UnsupportedVerb(v)) if v == "DELETE"
        ));
        assert!(Verb::try_from(&reqwest::Method::PUT).is_err());
        assert_eq!(Verb::try_from(&reqwest::Method::POST).unwrap(), Verb::Post);
    }

    #[test]
    fn test_null_fields_dropped() {
        let query = CandlesQuery {
            symbol: "BTCUSDT".to_string(),
            granularity: "1min".to_string(),
            start_time: None,
            limit: Some(100),
        };
        let params = RequestParams::from_serialize(&query).unwrap();
        assert_eq!(params.len(), 3);
        assert!(params.get("startTime").is_none());
        assert_eq!(
            params.query_string().unwrap(),
            "symbol=BTCUSDT&granularity=1min&limit=100"
        );
    }

    #[test]
    fn test_sorted_query_string() {
        let params = RequestParams::new()
            .with("symbol", "BTCUSDT")
            .with("limit", 5)
            .with("coin", Value::Null)
            .with("endTime", 1700000000000u64)
            .sorted();
        assert_eq!(
            params.query_string().unwrap(),
            "endTime=1700000000000&limit=5&symbol=BTCUSDT"
        );
    }

    #[test]
    fn test_query_string_encoding() {
        let params = RequestParams::new().with("remark", "a b&c=d");
        assert_eq!(params.query_string().unwrap(), "remark=a+b%26c%3Dd");
    }

    #[test]
    fn test_json_body_keeps_order_and_drops_nulls() {
        let params = RequestParams::from_serialize(&json!({
            "symbol": "BTCUSDT",
            "side": "buy",
            "price": null,
            "size": "0.001"
        }))
        .unwrap();
        assert_eq!(
            params.json_body().unwrap(),
            r#"{"symbol":"BTCUSDT","side":"buy","size":"0.001"}"#
        );
        assert_eq!(
            params.sorted().json_body().unwrap(),
            r#"{"side":"buy","size":"0.001","symbol":"BTCUSDT"}"#
        );
    }

    #[test]
    fn test_empty_params() {
        let params = RequestParams::from_serialize(&()).unwrap();
        assert!(params.is_empty());
        assert_eq!(params.query_string().unwrap(), "");
        assert_eq!(params.json_body().unwrap(), "{}");
    }

    #[test]
    fn test_non_object_params_rejected() {
        assert!(matches!(
            RequestParams::from_serialize(&vec![1, 2, 3]),
            Err(BitgetError::InvalidParams(_))
        ));
    }

    #[test]
    fn test_insert_replaces_existing_key() {
        let mut params = RequestParams::new();
        params.insert("limit", 10);
        params.insert("limit", 20);
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("limit"), Some(&json!(20)));
    }
}
