//! Example: Working with BitgetError and ApiError.
//!
//! Run with: cargo run --example error_handling

use bitget_api_client::BitgetError;
use bitget_api_client::error::{ApiError, error_codes};

fn main() {
    let api_error = ApiError::new(
        "400",
        "Bad Request",
        r#"{"code":"40009","msg":"sign signature error","requestTime":1700000000000}"#,
    );
    println!("API error: {}", api_error);
    println!("HTTP status: {:?}", api_error.status());
    println!("Exchange code: {:?}", api_error.exchange_code());
    println!("Is rate limit: {}", api_error.is_rate_limit());

    let err = BitgetError::Api(api_error);
    match err {
        BitgetError::Api(inner) => {
            if inner.exchange_code().as_deref() == Some(error_codes::SIGNATURE_ERROR) {
                println!("Matched signature error, check the API secret");
            } else if inner.is_unauthorized() {
                println!("Authentication rejected");
            }
        }
        BitgetError::MissingCredentials => {
            println!("Configure credentials for private endpoints");
        }
        _ => {
            println!("Unexpected error type");
        }
    }
}
