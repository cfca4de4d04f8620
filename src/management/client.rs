//! Management API HTTP client

use std::time::Duration;

use reqwest::{Client, Url};

use crate::config::api;
use crate::error::{CliError, Result};
use crate::management::ClientConfig;

/// Management API client
///
/// Construction validates the endpoint and builds the HTTP transport; no
/// network call is made until a query is issued.
#[derive(Debug)]
pub struct ManagementClient {
    client: Client,
    access_key: String,
    endpoint: String,
}

impl ManagementClient {
    /// Create a new client from a resolved configuration.
    ///
    /// Single attempt, fail-fast: a malformed endpoint or transport builder
    /// failure surfaces immediately as a connection error.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.host).map_err(|e| {
            CliError::Connection(format!(
                "Invalid management endpoint '{}': {}",
                config.host, e
            ))
        })?;

        if endpoint.scheme() != "https" && endpoint.scheme() != "http" {
            return Err(CliError::Connection(format!(
                "Invalid management endpoint '{}': unsupported scheme '{}'",
                config.host,
                endpoint.scheme()
            )));
        }

        let client = Client::builder()
            .pool_max_idle_per_host(4)
            .tcp_keepalive(Duration::from_secs(60))
            // The transport bounds the round trip; the pipeline itself
            // imposes no timeout of its own.
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| CliError::Connection(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            access_key: config.access_key.clone(),
            endpoint: endpoint.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// Build the base URL for API requests
    pub(crate) fn base_url(&self) -> String {
        format!("{}{}", self.endpoint, api::BASE_PATH)
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .header("Authorization", format!("Bearer {}", self.access_key))
            .header("Accept", "application/json")
    }

    /// Parse an API response, returning an error for non-success status codes.
    ///
    /// Keeps the response body in the error message so remote-side failures
    /// (expired auth, API error payloads) stay diagnosable.
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.is_empty() {
                format!("Failed to fetch {}", error_context)
            } else {
                format!("Failed to fetch {}: {}", error_context, body)
            };
            return Err(CliError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
impl ManagementClient {
    /// Create a client pointed at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::new(&ClientConfig {
            host: base_url.to_string(),
            access_key: "test-key".to_string(),
            user: Some("test".to_string()),
        })
        .expect("test client construction")
    }
}
