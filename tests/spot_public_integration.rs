use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bitget_api_client::BitgetError;
use bitget_api_client::spot::rest::BitgetRestClient;
use bitget_api_client::spot::rest::market::{
    CoinsRequest, HistoryCandlesRequest, MarketFillsHistoryRequest, OrderbookRequest,
    SymbolsRequest,
};

fn build_public_client(server: &MockServer) -> BitgetRestClient {
    BitgetRestClient::builder().base_url(server.uri()).build()
}

#[tokio::test]
async fn test_get_coins() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "code": "00000",
        "msg": "success",
        "requestTime": 1_700_000_000_000u64,
        "data": [{
            "coinId": "1",
            "coin": "BTC",
            "transfer": "true",
            "chains": [{
                "chain": "BTC",
                "needTag": "false",
                "withdrawable": "true",
                "rechargeable": "true",
                "withdrawFee": "0.005",
                "minWithdrawAmount": "0.001"
            }]
        }]
    });

    Mock::given(method("GET"))
        .and(path("/api/v2/spot/public/coins"))
        .and(query_param("coin", "BTC"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response.clone()))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let coins = client
        .get_coins(Some(&CoinsRequest::for_coin("BTC")))
        .await
        .unwrap();

    assert_eq!(coins, response);
    assert_eq!(coins["data"][0]["chains"][0]["withdrawFee"], "0.005");
}

#[tokio::test]
async fn test_get_symbols() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/spot/public/symbols"))
        .and(query_param("symbol", "ETHUSDT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": "00000",
            "msg": "success",
            "data": [{"symbol": "ETHUSDT", "baseCoin": "ETH", "quoteCoin": "USDT"}]
        })))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let symbols = client
        .get_symbols(Some(&SymbolsRequest::for_symbol("ETHUSDT")))
        .await
        .unwrap();
    assert_eq!(symbols["data"][0]["baseCoin"], "ETH");
}

#[tokio::test]
async fn test_get_orderbook_step_is_sent_as_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/spot/market/orderbook"))
        .and(query_param("symbol", "BTCUSDT"))
        .and(query_param("type", "step0"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": "00000",
            "msg": "success",
            "data": {"asks": [["30000.1", "0.5"]], "bids": [["30000.0", "1.2"]], "ts": "1700000000000"}
        })))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let book = client
        .get_orderbook(&OrderbookRequest::new("BTCUSDT").step("step0").limit(5))
        .await
        .unwrap();
    assert_eq!(book["data"]["asks"][0][0], "30000.1");
}

#[tokio::test]
async fn test_get_history_candles() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/spot/market/history-candles"))
        .and(query_param("endTime", "1700000000000"))
        .and(query_param("granularity", "1h"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": "00000",
            "msg": "success",
            "data": [["1699996400000", "30000", "30100", "29900", "30050", "12.5", "375000", "375000"]]
        })))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let candles = client
        .get_history_candles(&HistoryCandlesRequest::new("BTCUSDT", "1h", 1_700_000_000_000))
        .await
        .unwrap();
    assert_eq!(candles["data"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_market_fills_history_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/spot/market/fills-history"))
        .and(query_param("idLessThan", "1234"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": "00000",
            "msg": "success",
            "data": []
        })))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let mut request = MarketFillsHistoryRequest::new("BTCUSDT");
    request.id_less_than = Some("1234".to_string());
    client.get_market_fills_history(&request).await.unwrap();

    let received = server.received_requests().await.unwrap();
    assert_eq!(
        received[0].url.query(),
        Some("idLessThan=1234&symbol=BTCUSDT")
    );
}

#[tokio::test]
async fn test_rate_limited_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/spot/market/tickers"))
        .respond_with(ResponseTemplate::new(429).set_body_string(
            r#"{"code":"429","msg":"Too Many Requests","requestTime":1700000000000}"#,
        ))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let err = client
        .get_tickers(&Default::default())
        .await
        .unwrap_err();

    match err {
        BitgetError::Api(api) => {
            assert_eq!(api.status(), Some(429));
            assert_eq!(api.message, "Too Many Requests");
            assert!(api.is_rate_limit());
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}
