//! Bitget spot REST API client implementation.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde_json::Value;

use crate::auth::{
    API_PATH_PREFIX, CredentialsProvider, IncreasingTimestamp, SigningPolicy, TimestampProvider,
    sign_request,
};
use crate::error::{ApiError, BitgetError};
use crate::logging::{FileLogger, LoggedRequest, LoggedResponse, RequestLogger, default_logger};
use crate::request::{RequestParams, Verb};
use crate::spot::rest::endpoints::BITGET_BASE_URL;

/// The Bitget spot REST API client.
///
/// Every request is signed when credentials are configured; endpoints that
/// require authentication fail with [`BitgetError::MissingCredentials`] otherwise.
/// A client built without credentials still reaches the public market
/// endpoints, sending only the static headers and no `ACCESS-*` headers.
/// The client is cheap to clone and safe to share between tasks: each request
/// captures its own timestamp.
///
/// # Example
///
/// ```rust,no_run
/// use bitget_api_client::spot::rest::BitgetRestClient;
/// use bitget_api_client::spot::rest::market::TickersRequest;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = BitgetRestClient::new();
///     let tickers = client.get_tickers(&TickersRequest::for_symbol("BTCUSDT")).await?;
///     println!("Tickers: {}", tickers["data"]);
///     Ok(())
/// }
/// ```
///
/// For private endpoints, provide credentials:
///
/// ```rust,no_run
/// use bitget_api_client::spot::rest::BitgetRestClient;
/// use bitget_api_client::auth::StaticCredentials;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Arc::new(StaticCredentials::new("api_key", "api_secret", "passphrase"));
///     let client = BitgetRestClient::builder()
///         .credentials(credentials)
///         .logging(true)
///         .build();
///
///     let info = client.get_account_info().await?;
///     println!("Account: {}", info["data"]);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct BitgetRestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    timestamp_provider: Arc<dyn TimestampProvider>,
    signing_policy: SigningPolicy,
    logger: Option<Arc<dyn RequestLogger>>,
}

impl BitgetRestClient {
    /// Create a new client with default settings.
    ///
    /// This client can only access public endpoints.
    /// Use [`BitgetRestClient::builder()`] to configure credentials for private endpoints.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> BitgetRestClientBuilder {
        BitgetRestClientBuilder::new()
    }

    /// The signing protocol revision used by this client.
    pub fn signing_policy(&self) -> SigningPolicy {
        self.signing_policy
    }

    /// Whether request logging is enabled.
    pub fn logging_enabled(&self) -> bool {
        self.logger.is_some()
    }

    /// Send one request and return the parsed JSON document.
    ///
    /// Null-valued parameters are dropped (and, under [`SigningPolicy::V2`], the rest
    /// sorted by key) before signing; the same normalized parameters become the
    /// query string (GET) or JSON body (POST). The request is signed when
    /// credentials are configured.
    ///
    /// Any non-2xx response becomes [`BitgetError::Api`] carrying the HTTP status,
    /// status message and raw body.
    pub async fn dispatch<P>(&self, verb: Verb, path: &str, params: &P) -> Result<Value, BitgetError>
    where
        P: serde::Serialize + ?Sized,
    {
        self.execute(verb, path, params, false).await
    }

    /// Make a GET request that is signed when credentials are available.
    pub(crate) async fn public_get<P>(&self, endpoint: &str, params: &P) -> Result<Value, BitgetError>
    where
        P: serde::Serialize + ?Sized,
    {
        self.execute(Verb::Get, endpoint, params, false).await
    }

    /// Make an authenticated GET request.
    pub(crate) async fn private_get<P>(&self, endpoint: &str, params: &P) -> Result<Value, BitgetError>
    where
        P: serde::Serialize + ?Sized,
    {
        self.execute(Verb::Get, endpoint, params, true).await
    }

    /// Make an authenticated POST request.
    pub(crate) async fn private_post<P>(&self, endpoint: &str, params: &P) -> Result<Value, BitgetError>
    where
        P: serde::Serialize + ?Sized,
    {
        self.execute(Verb::Post, endpoint, params, true).await
    }

    async fn execute<P>(
        &self,
        verb: Verb,
        endpoint: &str,
        params: &P,
        require_auth: bool,
    ) -> Result<Value, BitgetError>
    where
        P: serde::Serialize + ?Sized,
    {
        let credentials = match &self.credentials {
            Some(provider) => Some(provider.get_credentials()),
            None if require_auth => return Err(BitgetError::MissingCredentials),
            None => None,
        };

        let mut params = RequestParams::from_serialize(params)?;
        if self.signing_policy.sorts_params() {
            params = params.sorted();
        }

        // The timestamp lives only for this call.
        let headers = match credentials {
            Some(creds) => {
                let timestamp = self.timestamp_provider.next_timestamp();
                sign_request(creds, self.signing_policy, verb, endpoint, &params, timestamp)?
                    .to_header_map()?
            }
            None => self.signing_policy.static_header_map(),
        };

        let mut url = format!("{}{}{}", self.base_url, API_PATH_PREFIX, endpoint);
        let request = match verb {
            Verb::Get => {
                if !params.is_empty() {
                    url.push('?');
                    url.push_str(&params.query_string()?);
                }
                self.http_client.get(&url)
            }
            Verb::Post => self.http_client.post(&url).body(params.json_body()?),
        };

        tracing::debug!(method = %verb, path = endpoint, signed = credentials.is_some(), "sending Bitget request");

        if let Some(logger) = &self.logger {
            logger.log_request(&LoggedRequest {
                verb,
                url: &url,
                params: &params,
                headers: &headers,
            });
        }

        let response = request.headers(headers).send().await?;
        self.parse_response(response).await
    }

    /// Turn a transport response into the parsed body or a typed error.
    async fn parse_response(&self, response: reqwest::Response) -> Result<Value, BitgetError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let error = ApiError::from_status(status, body);
            if let Some(logger) = &self.logger {
                logger.log_error(&LoggedResponse {
                    code: &error.code,
                    message: &error.message,
                    body: &error.body,
                });
            }
            return Err(BitgetError::Api(error));
        }

        let parsed: Value = serde_json::from_str(&body)?;
        if let Some(logger) = &self.logger {
            logger.log_response(&LoggedResponse {
                code: status.as_str(),
                message: status.canonical_reason().unwrap_or_default(),
                body: &body,
            });
        }
        Ok(parsed)
    }
}

impl Default for BitgetRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BitgetRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitgetRestClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.credentials.is_some())
            .field("signing_policy", &self.signing_policy)
            .field("logging", &self.logger.is_some())
            .finish()
    }
}

/// Builder for [`BitgetRestClient`].
pub struct BitgetRestClientBuilder {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    timestamp_provider: Option<Arc<dyn TimestampProvider>>,
    signing_policy: SigningPolicy,
    logging: bool,
    logger: Option<Arc<dyn RequestLogger>>,
    user_agent: Option<String>,
}

impl BitgetRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: BITGET_BASE_URL.to_string(),
            credentials: None,
            timestamp_provider: None,
            signing_policy: SigningPolicy::default(),
            logging: false,
            logger: None,
            user_agent: None,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the credentials provider for authenticated requests.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom timestamp provider.
    pub fn timestamp_provider(mut self, provider: Arc<dyn TimestampProvider>) -> Self {
        self.timestamp_provider = Some(provider);
        self
    }

    /// Select the signing protocol revision. Defaults to [`SigningPolicy::V2`].
    pub fn signing_policy(mut self, policy: SigningPolicy) -> Self {
        self.signing_policy = policy;
        self
    }

    /// Enable or disable request logging.
    ///
    /// Without a custom logger, entries go to the process-wide
    /// [`default_logger`](crate::logging::default_logger).
    pub fn logging(mut self, enabled: bool) -> Self {
        self.logging = enabled;
        self
    }

    /// Log to a file at `path` instead of the default location. Enables logging.
    pub fn log_file_path(self, path: impl Into<std::path::PathBuf>) -> Self {
        self.logger(Arc::new(FileLogger::new(path)))
    }

    /// Use a custom request logger. Enables logging.
    pub fn logger(mut self, logger: Arc<dyn RequestLogger>) -> Self {
        self.logger = Some(logger);
        self.logging = true;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> BitgetRestClient {
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("bitget-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("bitget-api-client"));
        headers.insert(USER_AGENT, header_value);

        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        let timestamp_provider = self
            .timestamp_provider
            .unwrap_or_else(|| Arc::new(IncreasingTimestamp::new()));

        let logger = match (self.logging, self.logger) {
            (false, _) => None,
            (true, Some(logger)) => Some(logger),
            (true, None) => Some(default_logger() as Arc<dyn RequestLogger>),
        };

        BitgetRestClient {
            http_client: client,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            credentials: self.credentials,
            timestamp_provider,
            signing_policy: self.signing_policy,
            logger,
        }
    }
}

impl Default for BitgetRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
