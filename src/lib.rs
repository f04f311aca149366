//! Lingraph
//!
//! Fetches programming-language influence relations from DBpedia and
//! renders them as a directed Graphviz diagram.
//!
//! # Architecture
//!
//! One-way pipeline, no state across runs:
//!
//! 1. [`sparql`] — paginated SELECT retrieval against a remote endpoint,
//!    with template validation, bounded retry, and result flattening
//! 2. [`dbpedia`] — the influence query texts, label cleaning, and
//!    adjacency construction (directional, merged, strict, single-entity)
//! 3. [`graph`] — the insertion-ordered adjacency mapping and derived
//!    degree counts
//! 4. [`render`] — Graphviz digraph assembly, degree-based node styling,
//!    DOT serialization, and file output
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use lingraph::dbpedia;
//! use lingraph::render::Digraph;
//! use lingraph::sparql::EndpointConfig;
//!
//! let config = EndpointConfig::default();
//! let influence = dbpedia::influenced_by(&config).await?;
//!
//! let mut dot = Digraph::new("output/programming");
//! dot.populate_weighted(&influence);
//! let path = dot.save(None)?;
//! ```

#![warn(clippy::all)]

pub mod dbpedia;
pub mod graph;
pub mod render;
pub mod sparql;

// Re-export main types for convenience
pub use graph::{degree_counts, AdjacencyMap};
pub use render::{Digraph, Engine, NodeStyle, OutputFormat, RenderError, RenderResult};
pub use sparql::{
    EndpointConfig, HttpSparqlClient, QueryPager, RetryPolicy, SparqlError, SparqlResult,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
        assert_eq!(version(), "0.1.0");
    }
}
