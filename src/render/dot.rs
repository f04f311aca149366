//! Digraph assembly and file output

use indexmap::IndexMap;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::info;

use crate::graph::{degree_counts, AdjacencyMap};

use super::style::NodeStyle;
use super::{RenderError, RenderResult};

/// Output format for the rendered diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// DOT source only; no engine invocation
    Dot,
    Svg,
    Pdf,
    Png,
}

impl OutputFormat {
    fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Dot => "dot",
            OutputFormat::Svg => "svg",
            OutputFormat::Pdf => "pdf",
            OutputFormat::Png => "png",
        }
    }
}

/// Graphviz layout engine used to compile the diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    Dot,
    Neato,
    Fdp,
    Circo,
}

impl Engine {
    fn command(&self) -> &'static str {
        match self {
            Engine::Dot => "dot",
            Engine::Neato => "neato",
            Engine::Fdp => "fdp",
            Engine::Circo => "circo",
        }
    }
}

/// A directed graph assembled for Graphviz.
///
/// Nodes are deduplicated by name in insertion order; edges are kept in the
/// order they were added.
#[derive(Debug, Clone)]
pub struct Digraph {
    filename: PathBuf,
    format: OutputFormat,
    engine: Engine,
    nodes: IndexMap<String, Option<NodeStyle>>,
    edges: Vec<(String, String)>,
}

impl Digraph {
    /// New empty digraph with a default output base path (no extension).
    pub fn new(filename: impl Into<PathBuf>) -> Self {
        Digraph {
            filename: filename.into(),
            format: OutputFormat::Svg,
            engine: Engine::Dot,
            nodes: IndexMap::new(),
            edges: Vec::new(),
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_engine(mut self, engine: Engine) -> Self {
        self.engine = engine;
        self
    }

    /// Add a node once; later calls with the same name are no-ops.
    pub fn add_node(&mut self, name: impl Into<String>, style: Option<NodeStyle>) {
        self.nodes.entry(name.into()).or_insert(style);
    }

    pub fn add_edge(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.edges.push((from.into(), to.into()));
    }

    pub fn has_node(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &[(String, String)] {
        &self.edges
    }

    /// Add the mapping's nodes and edges without degree styling.
    pub fn populate(&mut self, map: &AdjacencyMap) {
        self.populate_inner(map, None);
    }

    /// Add the mapping's nodes and edges, styling each node by its degree
    /// count across the whole mapping.
    pub fn populate_weighted(&mut self, map: &AdjacencyMap) {
        let counts = degree_counts(map);
        self.populate_inner(map, Some(&counts));
    }

    // The mapping stores influenced → influencers, so each list member gets
    // an edge pointing at its key: arrows run influencer → influenced.
    fn populate_inner(&mut self, map: &AdjacencyMap, counts: Option<&IndexMap<String, usize>>) {
        let style_for = |name: &str| {
            counts.map(|c| NodeStyle::for_degree(c.get(name).copied().unwrap_or(0)))
        };
        for (key, values) in map.iter() {
            self.add_node(key.clone(), style_for(key));
            for value in values {
                self.add_node(value.clone(), style_for(value));
                self.add_edge(value.clone(), key.clone());
            }
        }
    }

    /// Serialize to DOT source.
    pub fn to_dot(&self) -> String {
        let mut out = String::from("digraph {\n");
        for (name, style) in &self.nodes {
            match style {
                Some(style) => {
                    let attrs = style
                        .attributes()
                        .iter()
                        .map(|(k, v)| format!("{k}={}", quote(v)))
                        .collect::<Vec<_>>()
                        .join(" ");
                    out.push_str(&format!("\t{} [{attrs}]\n", quote(name)));
                }
                None => out.push_str(&format!("\t{}\n", quote(name))),
            }
        }
        for (from, to) in &self.edges {
            out.push_str(&format!("\t{} -> {}\n", quote(from), quote(to)));
        }
        out.push_str("}\n");
        out
    }

    /// Write the graph to disk and return the resolved output path.
    ///
    /// The DOT source lands at `<base>.dot`; for non-DOT formats the
    /// configured engine then compiles it to `<base>.<ext>` and the
    /// intermediate source is removed. `file` overrides the digraph's
    /// default base path.
    pub fn save(&self, file: Option<&Path>) -> RenderResult<PathBuf> {
        let base = file.map(Path::to_path_buf).unwrap_or_else(|| self.filename.clone());
        if let Some(dir) = base.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)?;
            }
        }

        let dot_path = base.with_extension("dot");
        std::fs::write(&dot_path, self.to_dot())?;

        if self.format == OutputFormat::Dot {
            info!(path = %dot_path.display(), "graph saved");
            return Ok(dot_path);
        }

        let out_path = base.with_extension(self.format.extension());
        let engine = self.engine.command();
        let status = Command::new(engine)
            .arg(format!("-T{}", self.format.extension()))
            .arg(&dot_path)
            .arg("-o")
            .arg(&out_path)
            .status()?;
        if !status.success() {
            return Err(RenderError::Engine { engine, status });
        }

        let _ = std::fs::remove_file(&dot_path);
        info!(path = %out_path.display(), "graph saved");
        Ok(out_path)
    }
}

/// Quote and escape a DOT identifier or attribute value.
fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn java_c_map() -> AdjacencyMap {
        let mut map = AdjacencyMap::new();
        map.add_link("Java", "C");
        map
    }

    #[test]
    fn test_edge_direction_is_reversed() {
        let mut dot = Digraph::new("graph");
        dot.populate(&java_c_map());

        assert_eq!(dot.node_count(), 2);
        assert!(dot.has_node("Java"));
        assert!(dot.has_node("C"));
        assert_eq!(
            dot.edges(),
            &[("C".to_string(), "Java".to_string())]
        );
    }

    #[test]
    fn test_nodes_created_once() {
        let mut map = AdjacencyMap::new();
        map.add_link("Java", "C");
        map.add_link("C++", "C");
        map.add_link("C", "BCPL");

        let mut dot = Digraph::new("graph");
        dot.populate(&map);

        assert_eq!(dot.node_count(), 4);
        assert_eq!(dot.edge_count(), 3);
    }

    #[test]
    fn test_weighted_population_styles_by_degree() {
        let mut map = AdjacencyMap::new();
        for influenced in ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"] {
            map.add_link(influenced, "C++");
        }

        let mut dot = Digraph::new("graph");
        dot.populate_weighted(&map);

        let rendered = dot.to_dot();
        // C++ appears in ten lists: saturated
        assert!(rendered.contains("\"C++\" [penwidth=\"4.5\" color=\"0 1 1\" fontsize=\"28\"]"));
        // A keys one entry: degree 1
        assert!(rendered.contains("\"A\" [penwidth=\"3.15\""));
    }

    #[test]
    fn test_to_dot_escapes_quotes() {
        let mut dot = Digraph::new("graph");
        dot.add_node(r#"Weird"Name"#, None);
        assert!(dot.to_dot().contains(r#""Weird\"Name""#));
    }

    #[test]
    fn test_save_dot_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut dot = Digraph::new(dir.path().join("graph")).with_format(OutputFormat::Dot);
        dot.populate(&java_c_map());

        let path = dot.save(None).unwrap();
        assert_eq!(path, dir.path().join("graph.dot"));
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("digraph {"));
        assert!(contents.contains("\"C\" -> \"Java\""));
    }

    #[test]
    fn test_save_honors_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut dot = Digraph::new("ignored").with_format(OutputFormat::Dot);
        dot.populate(&java_c_map());

        let target = dir.path().join("nested").join("out");
        let path = dot.save(Some(&target)).unwrap();
        assert_eq!(path, dir.path().join("nested").join("out.dot"));
        assert!(path.exists());
    }
}
