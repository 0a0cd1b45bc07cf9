//! Sinter HTTP Client
//!
//! A small, type-safe client for the Sinter job API. Every call is a single
//! request carrying the account's API token; reads must answer `200 OK` and
//! triggers `201 Created`. Anything else is surfaced as
//! [`ClientError::ApiError`] with the raw response body. This layer never
//! retries.
//!
//! # Example
//!
//! ```no_run
//! use sinter_client::SinterClient;
//!
//! #[tokio::main]
//! async fn main() -> sinter_client::Result<()> {
//!     let client = SinterClient::new(1234, "api-token");
//!
//!     for project in client.list_projects().await? {
//!         println!("{} {}", project.id, project.name);
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
mod definitions;
mod projects;
mod runs;

pub use error::{ClientError, Result};

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use sinter_core::dto::decode_payload;

/// Base URL of the hosted Sinter API
pub const DEFAULT_API_BASE: &str = "https://cloud.getdbt.com/api/v1";

/// HTTP client for the Sinter API, scoped to one account
///
/// Endpoints are grouped by resource:
/// - Projects (list, get)
/// - Job definitions (list, get)
/// - Job runs (list, get, trigger)
#[derive(Clone)]
pub struct SinterClient {
    /// Base URL of the API (e.g., "https://cloud.getdbt.com/api/v1")
    base_url: String,
    account_id: u64,
    api_token: String,
    /// HTTP client instance
    client: Client,
}

impl SinterClient {
    /// Create a client for the hosted API
    ///
    /// # Arguments
    /// * `account_id` - The Sinter account all requests are scoped to
    /// * `api_token` - API token sent in the `Authorization` header
    pub fn new(account_id: u64, api_token: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_API_BASE, account_id, api_token)
    }

    /// Create a client against a different API base URL
    ///
    /// # Example
    /// ```
    /// use sinter_client::SinterClient;
    ///
    /// let client = SinterClient::with_base_url("http://localhost:8080/api/v1/", 1, "token");
    /// assert_eq!(client.base_url(), "http://localhost:8080/api/v1");
    /// ```
    pub fn with_base_url(
        base_url: impl Into<String>,
        account_id: u64,
        api_token: impl Into<String>,
    ) -> Self {
        Self::with_client(base_url, account_id, api_token, Client::new())
    }

    /// Create a client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(
        base_url: impl Into<String>,
        account_id: u64,
        api_token: impl Into<String>,
        client: Client,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            account_id,
            api_token: api_token.into(),
            client,
        }
    }

    /// Get the base URL of the API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the account this client is scoped to
    pub fn account_id(&self) -> u64 {
        self.account_id
    }

    /// Builds `{base}/accounts/{account}{suffix}`
    fn account_url(&self, suffix: &str) -> String {
        format!("{}/accounts/{}{}", self.base_url, self.account_id, suffix)
    }

    fn auth_header(&self) -> String {
        format!("Token {}", self.api_token)
    }

    // =============================================================================
    // Request Helpers
    // =============================================================================

    /// GET `url`, expecting `200 OK`
    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, self.auth_header())
            .send()
            .await?;

        self.handle_response(response, StatusCode::OK).await
    }

    /// POST `url` with an empty body, expecting `201 Created`
    async fn post<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .header(AUTHORIZATION, self.auth_header())
            .send()
            .await?;

        self.handle_response(response, StatusCode::CREATED).await
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Check the status code and decode the JSON body
    ///
    /// Only the exact `expected` status is accepted; any other status
    /// (including other 2xx codes) becomes an API error carrying the raw body.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
        expected: StatusCode,
    ) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;

        if status != expected {
            return Err(ClientError::api_error(status.as_u16(), body));
        }

        decode_payload(&body).map_err(|e| {
            ClientError::ParseError(format!(
                "Failed to parse JSON response: {} (body: {})",
                e, body
            ))
        })
    }
}

impl std::fmt::Debug for SinterClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SinterClient")
            .field("base_url", &self.base_url)
            .field("account_id", &self.account_id)
            .field("api_token", &"<redacted>")
            .finish()
    }
}
