//! HTTP client abstraction for testability

use super::types::ProviderError;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, trace, warn};

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User-Agent sent with every request.
/// The OpenStreetMap tile usage policy rejects clients that do not identify themselves.
const USER_AGENT: &str = concat!("tilestitch/", env!("CARGO_PKG_VERSION"));

/// Trait for synchronous HTTP client operations.
///
/// This abstraction allows for dependency injection and easier testing
/// by enabling mock HTTP clients in tests.
pub trait HttpClient: Send + Sync {
    /// Performs an HTTP GET request.
    ///
    /// # Returns
    ///
    /// The response body as bytes, or an error for transport failures and
    /// non-success status codes.
    fn get(&self, url: &str) -> Result<Vec<u8>, ProviderError>;
}

/// Trait for asynchronous HTTP client operations.
pub trait AsyncHttpClient: Send + Sync {
    /// Performs an async HTTP GET request.
    fn get(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, ProviderError>> + Send;
}

/// Blocking HTTP client implementation using reqwest.
#[derive(Clone)]
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    /// Creates a new ReqwestClient with the default timeout.
    pub fn new() -> Result<Self, ProviderError> {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    /// Creates a new ReqwestClient with custom timeout.
    pub fn with_timeout(timeout_secs: u64) -> Result<Self, ProviderError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ProviderError::ClientBuild(e.to_string()))?;

        Ok(Self { client })
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> Result<Vec<u8>, ProviderError> {
        trace!(url = url, "HTTP GET request starting");

        let response = self.client.get(url).send().map_err(|e| {
            warn!(url = url, error = %e, is_timeout = e.is_timeout(), "HTTP request failed");
            ProviderError::Http(format!("request failed: {}", e))
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = url, status = status.as_u16(), "HTTP error status");
            return Err(ProviderError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response
            .bytes()
            .map_err(|e| ProviderError::Http(format!("failed to read response: {}", e)))?;
        debug!(url = url, bytes = bytes.len(), "HTTP response body read");
        Ok(bytes.to_vec())
    }
}

/// Async HTTP client implementation using reqwest.
///
/// Used by the parallel stitcher; one client is shared by all in-flight
/// requests so connections are pooled per host.
#[derive(Clone)]
pub struct AsyncReqwestClient {
    client: reqwest::Client,
}

impl AsyncReqwestClient {
    /// Creates a new AsyncReqwestClient with the default timeout.
    pub fn new() -> Result<Self, ProviderError> {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    /// Creates a new AsyncReqwestClient with custom timeout.
    pub fn with_timeout(timeout_secs: u64) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_nodelay(true)
            .build()
            .map_err(|e| ProviderError::ClientBuild(e.to_string()))?;

        Ok(Self { client })
    }
}

impl AsyncHttpClient for AsyncReqwestClient {
    async fn get(&self, url: &str) -> Result<Vec<u8>, ProviderError> {
        trace!(url = url, "HTTP GET request starting");

        let response = match self.client.get(url).send().await {
            Ok(resp) => {
                debug!(
                    url = url,
                    status = resp.status().as_u16(),
                    "HTTP response received"
                );
                resp
            }
            Err(e) => {
                warn!(
                    url = url,
                    error = %e,
                    is_connect = e.is_connect(),
                    is_timeout = e.is_timeout(),
                    "HTTP request failed"
                );
                return Err(ProviderError::Http(format!("request failed: {}", e)));
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(url = url, status = status.as_u16(), "HTTP error status");
            return Err(ProviderError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        match response.bytes().await {
            Ok(bytes) => {
                trace!(url = url, bytes = bytes.len(), "HTTP response body read");
                Ok(bytes.to_vec())
            }
            Err(e) => {
                warn!(url = url, error = %e, "Failed to read response body");
                Err(ProviderError::Http(format!(
                    "failed to read response: {}",
                    e
                )))
            }
        }
    }
}
