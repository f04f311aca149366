//! SPARQL endpoint client with paginated retrieval
//!
//! This module talks to a remote SPARQL endpoint over HTTP and pulls large
//! SELECT result sets page by page. A query template carries fixed
//! pagination markers; the pager substitutes increasing offsets until the
//! endpoint returns a short page.
//!
//! # Example
//!
//! ```rust,ignore
//! use lingraph::sparql::{EndpointConfig, HttpSparqlClient, QueryPager};
//!
//! let config = EndpointConfig::default();
//! let client = HttpSparqlClient::new(&config)?;
//! let pager = QueryPager::new(&client, config.retry);
//!
//! let rows = pager.run_literal(QUERY_TEMPLATE).await?;
//! ```

mod client;
mod pager;
mod results;

pub use client::{
    EndpointConfig, HttpSparqlClient, PageFetcher, RetryPolicy, DBPEDIA_LIVE_ENDPOINT,
};
pub use pager::{
    validate_template, Backoff, QueryPager, TokioBackoff, LIMIT_MARKER, OFFSET_MARKER, PAGE_SIZE,
};
pub use results::{Head, RdfTerm, SelectResults, Solutions};

use thiserror::Error;

/// SPARQL client errors
#[derive(Error, Debug)]
pub enum SparqlError {
    /// Query template is missing a required pagination marker.
    /// Raised before any network activity.
    #[error("query template error: {0}")]
    Template(String),

    /// Transport-level failure worth retrying (connect, timeout, 5xx, 429)
    #[error("transient endpoint failure: {0}")]
    Transient(String),

    /// The endpoint rejected the request; retrying cannot help
    #[error("endpoint rejected query: {0}")]
    Rejected(String),

    /// Response body was not a valid SPARQL JSON results document
    #[error("malformed results payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// Bounded retry gave up
    #[error("gave up after {attempts} attempts: {source}")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        source: Box<SparqlError>,
    },

    /// HTTP client construction failed
    #[error("client configuration error: {0}")]
    Config(String),
}

impl SparqlError {
    /// Whether the retry policy may try again after this failure.
    pub fn is_transient(&self) -> bool {
        matches!(self, SparqlError::Transient(_))
    }
}

pub type SparqlResult<T> = Result<T, SparqlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(SparqlError::Transient("503".into()).is_transient());
        assert!(!SparqlError::Rejected("400".into()).is_transient());
        assert!(!SparqlError::Template("no LIMIT".into()).is_transient());
    }

    #[test]
    fn test_exhaustion_carries_source() {
        let err = SparqlError::RetriesExhausted {
            attempts: 6,
            source: Box::new(SparqlError::Transient("connection reset".into())),
        };
        let msg = err.to_string();
        assert!(msg.contains("6 attempts"));
        assert!(msg.contains("connection reset"));
    }
}
