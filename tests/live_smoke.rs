use std::sync::Arc;

use bitget_api_client::auth::EnvCredentials;
use bitget_api_client::spot::rest::BitgetRestClient;
use bitget_api_client::spot::rest::market::TickersRequest;

fn live_tests_enabled() -> bool {
    std::env::var("BITGET_LIVE_TESTS").ok().as_deref() == Some("1")
}

#[tokio::test]
#[ignore]
async fn live_spot_public_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let client = BitgetRestClient::new();
    let tickers = client
        .get_tickers(&TickersRequest::for_symbol("BTCUSDT"))
        .await?;
    assert_eq!(tickers["code"], "00000");

    Ok(())
}

#[tokio::test]
#[ignore]
async fn live_spot_private_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let credentials = match EnvCredentials::try_from_env() {
        Some(creds) => creds,
        None => return Ok(()),
    };
    let client = BitgetRestClient::builder()
        .credentials(Arc::new(credentials))
        .build();

    let info = client.get_account_info().await?;
    assert_eq!(info["code"], "00000");
    let _assets = client.get_account_assets(None).await?;

    Ok(())
}
