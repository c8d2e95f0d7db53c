/*
[INPUT]:  HTTP configuration (server URL, timeouts, credentials)
[OUTPUT]: Configured reqwest client and the shared request executor
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing request handling
*/

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::http::error::{NovaError, Result, map_error_code};
use crate::http::signature::{RequestSigner, generate_nonce};

/// Base URL for the NovaExchange API
const DEFAULT_SERVER_URL: &str = "https://novaexchange.com";
const PRIVATE_API_PATH: &str = "remote/v2/private";
const MARKETS_API_PATH: &str = "remote/v2/markets";

const USER_AGENT: &str = concat!("novaexchange-adapter/", env!("CARGO_PKG_VERSION"));

/// Form parameters for one request. Sorted key order, keys unique.
pub(crate) type Params = BTreeMap<&'static str, String>;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub server_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// Log full request descriptions (URL and params) at debug level.
    /// Replaces the upstream client's process-wide verbose flag.
    pub log_requests: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            timeout: Duration::from_secs(20),
            connect_timeout: Duration::from_secs(10),
            log_requests: false,
        }
    }
}

/// Credentials for signed requests
#[derive(Clone)]
pub struct Credentials {
    pub api_key: String,
    pub secret: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret: secret.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// Main HTTP client for the NovaExchange API
///
/// Immutable after construction; safe to share across concurrent calls.
/// Every endpoint method issues exactly one POST and resolves exactly once.
#[derive(Debug)]
pub struct NovaClient {
    http_client: Client,
    server_root: String,
    credentials: Option<Credentials>,
    log_requests: bool,
}

impl NovaClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        let server_url = Url::parse(&config.server_url)?;

        Ok(Self {
            http_client,
            server_root: server_url.as_str().trim_end_matches('/').to_string(),
            credentials: None,
            log_requests: config.log_requests,
        })
    }

    /// Set credentials for signed requests
    pub fn set_credentials(&mut self, credentials: Credentials) {
        self.credentials = Some(credentials);
    }

    /// Get credentials if set
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Issue a signed request against the private API
    ///
    /// POST {server}/remote/v2/private/{method}/?nonce={nonce}
    pub(crate) async fn private_request<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Params,
    ) -> Result<T> {
        let url = format!(
            "{}/{}/{}/?nonce={}",
            self.server_root,
            PRIVATE_API_PATH,
            method,
            generate_nonce()
        );

        self.signed_form_request(&url, method, params).await
    }

    /// Issue a signed request against the market API
    ///
    /// POST {server}/remote/v2/markets/{method}/?nonce={nonce}
    ///
    /// The bare `markets` listing method is irregular upstream: it uses a
    /// pluralized path segment and carries no nonce. Preserved as-is.
    pub(crate) async fn market_request<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Params,
    ) -> Result<T> {
        let url = if method == "markets" {
            format!("{}/{}/markets/", self.server_root, MARKETS_API_PATH)
        } else {
            format!(
                "{}/{}/{}/?nonce={}",
                self.server_root,
                MARKETS_API_PATH,
                method,
                generate_nonce()
            )
        };

        self.signed_form_request(&url, method, params).await
    }

    /// Append the signed fields and hand the request to the executor
    ///
    /// Fails before any HTTP happens when credentials are missing.
    async fn signed_form_request<T: DeserializeOwned>(
        &self,
        url: &str,
        method: &str,
        mut params: Params,
    ) -> Result<T> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(NovaError::MissingCredentials)?;

        let signature = RequestSigner::new(credentials.secret.as_str()).sign_url(url);
        params.insert("apikey", credentials.api_key.clone());
        params.insert("signature", signature);

        let request_desc =
            format!("POST request to url {url} with method {method} and params {params:?}");

        self.execute_form(url, &params, &request_desc).await
    }

    /// Transport executor shared by every endpoint
    ///
    /// One outbound POST per invocation, no retry. Classifies the outcome
    /// in fixed order: transport failure, non-2xx status, unparseable
    /// body, embedded exchange error code, success.
    pub(crate) async fn execute_form<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &Params,
        request_desc: &str,
    ) -> Result<T> {
        if self.log_requests {
            debug!("{request_desc}");
        } else {
            debug!(%url, "sending form request");
        }

        let response = self
            .http_client
            .post(url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .form(params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(code = status.as_u16(), "request failed: {request_desc}");
            return Err(NovaError::Status {
                code: status.as_u16(),
                context: request_desc.to_string(),
            });
        }

        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|_| NovaError::Parse {
                body: body.clone(),
                context: request_desc.to_string(),
            })?;

        if let Some(code) = value.get("error_code").and_then(|code| code.as_i64()) {
            let message = map_error_code(code);
            warn!(code, %message, "exchange reported an error: {request_desc}");
            return Err(NovaError::Api {
                code,
                message,
                context: request_desc.to_string(),
            });
        }

        Ok(serde_json::from_value(value)?)
    }
}
