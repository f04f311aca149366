//! DBpedia influence queries
//!
//! Domain layer of the pipeline: the SPARQL query texts for the
//! programming-language influence relations, label normalization, and the
//! adjacency builders that turn flattened query rows into an
//! [`AdjacencyMap`](crate::graph::AdjacencyMap).
//!
//! All bulk operations paginate against the configured endpoint and run
//! their queries strictly one after another.

mod influence;
mod label;
mod queries;

pub use influence::{
    influenced, influenced_and_influenced_by, influenced_and_influenced_by_for, influenced_by,
    strict_influenced_by,
};
pub use label::clean;
