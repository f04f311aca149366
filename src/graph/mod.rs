//! In-memory adjacency structures
//!
//! The pipeline's central data shape: a mapping from a node name to the
//! ordered set of names it links to, plus the derived per-node degree
//! counts used for visual weighting.

mod adjacency;

pub use adjacency::{degree_counts, AdjacencyMap};
