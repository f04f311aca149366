//! Graphviz rendering
//!
//! Turns an [`AdjacencyMap`](crate::graph::AdjacencyMap) into a directed
//! Graphviz graph: DOT serialization, optional degree-based node styling,
//! and file output (DOT source or a vector format compiled by a local
//! Graphviz engine).

mod dot;
mod style;

pub use dot::{Digraph, Engine, OutputFormat};
pub use style::{NodeStyle, SATURATION_CUTOFF};

use thiserror::Error;

/// Rendering and file-output errors
#[derive(Error, Debug)]
pub enum RenderError {
    /// Filesystem failure while writing the graph
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The Graphviz engine exited unsuccessfully
    #[error("{engine} exited with {status}")]
    Engine {
        engine: &'static str,
        status: std::process::ExitStatus,
    },
}

pub type RenderResult<T> = Result<T, RenderError>;
