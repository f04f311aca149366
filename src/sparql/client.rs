//! HTTP transport for remote SPARQL endpoints

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

use super::results::SelectResults;
use super::{SparqlError, SparqlResult};

/// DBpedia Live public SPARQL endpoint
pub const DBPEDIA_LIVE_ENDPOINT: &str = "https://dbpedia-live.openlinksw.com/sparql";

const SPARQL_JSON: &str = "application/sparql-results+json";

/// Bounded retry with a fixed backoff delay.
///
/// Transient failures are retried up to `max_retries` times; fatal failures
/// surface immediately.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Retries after the first failed attempt
    pub max_retries: u32,
    /// Fixed delay between attempts
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            max_retries: 5,
            backoff: Duration::from_secs(10),
        }
    }
}

/// Endpoint configuration, passed explicitly to every query call site.
#[derive(Debug, Clone)]
pub struct EndpointConfig {
    /// SPARQL endpoint URL
    pub url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Retry policy for transient failures
    pub retry: RetryPolicy,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        EndpointConfig {
            url: DBPEDIA_LIVE_ENDPOINT.to_string(),
            timeout: Duration::from_secs(60),
            retry: RetryPolicy::default(),
        }
    }
}

impl EndpointConfig {
    /// Configuration for an arbitrary endpoint with default timeout/retry
    pub fn new(url: impl Into<String>) -> Self {
        EndpointConfig {
            url: url.into(),
            ..Default::default()
        }
    }
}

/// Seam between pagination and transport.
///
/// The pager drives this trait; production code uses [`HttpSparqlClient`],
/// tests substitute scripted fakes.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Execute one fully-substituted SELECT query and return its page.
    async fn fetch_page(&self, query: &str) -> SparqlResult<SelectResults>;
}

/// reqwest-based SPARQL client
pub struct HttpSparqlClient {
    client: Client,
    url: String,
}

impl HttpSparqlClient {
    pub fn new(config: &EndpointConfig) -> SparqlResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SparqlError::Config(e.to_string()))?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    /// Endpoint URL this client targets
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl PageFetcher for HttpSparqlClient {
    async fn fetch_page(&self, query: &str) -> SparqlResult<SelectResults> {
        let response = self
            .client
            .get(&self.url)
            .header(reqwest::header::ACCEPT, SPARQL_JSON)
            .query(&[("query", query), ("format", SPARQL_JSON)])
            .send()
            .await
            .map_err(classify_send_error)?;

        let status = response.status();
        if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
            return Err(SparqlError::Transient(format!(
                "endpoint returned {status}"
            )));
        }
        if !status.is_success() {
            return Err(SparqlError::Rejected(format!("endpoint returned {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SparqlError::Transient(format!("body read failed: {e}")))?;

        let results: SelectResults = serde_json::from_str(&body)?;
        Ok(results)
    }
}

/// Connect and timeout errors are worth retrying; anything else at send
/// time (bad URL, TLS setup) is not.
fn classify_send_error(err: reqwest::Error) -> SparqlError {
    if err.is_timeout() || err.is_connect() || err.is_request() {
        SparqlError::Transient(err.to_string())
    } else {
        SparqlError::Rejected(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_targets_dbpedia_live() {
        let config = EndpointConfig::default();
        assert_eq!(config.url, DBPEDIA_LIVE_ENDPOINT);
        assert_eq!(config.retry.max_retries, 5);
        assert_eq!(config.retry.backoff, Duration::from_secs(10));
    }

    #[test]
    fn test_custom_endpoint_keeps_defaults() {
        let config = EndpointConfig::new("http://localhost:8890/sparql");
        assert_eq!(config.url, "http://localhost:8890/sparql");
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_client_construction() {
        let config = EndpointConfig::default();
        let client = HttpSparqlClient::new(&config).unwrap();
        assert_eq!(client.url(), DBPEDIA_LIVE_ENDPOINT);
    }
}
