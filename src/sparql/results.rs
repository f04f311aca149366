//! SPARQL SELECT results (SPARQL 1.1 JSON results format)

use serde::Deserialize;
use std::collections::HashMap;

/// An RDF term as serialized in the JSON results format.
///
/// Only `value` survives flattening; the term type, language tag, and
/// datatype are carried for completeness and dropped downstream.
#[derive(Debug, Clone, Deserialize)]
pub struct RdfTerm {
    /// Term kind: "uri", "literal", or "bnode"
    #[serde(rename = "type", default)]
    pub term_type: String,

    /// Lexical value of the term
    pub value: String,

    /// Language tag, when present on a literal
    #[serde(rename = "xml:lang", default)]
    pub lang: Option<String>,

    /// Datatype IRI, when present on a literal
    #[serde(default)]
    pub datatype: Option<String>,
}

impl RdfTerm {
    /// Build a plain literal term
    pub fn literal(value: impl Into<String>) -> Self {
        RdfTerm {
            term_type: "literal".to_string(),
            value: value.into(),
            lang: None,
            datatype: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Head {
    /// Variable names in declaration order
    #[serde(default)]
    pub vars: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Solutions {
    /// One map of variable name → bound term per solution
    #[serde(default)]
    pub bindings: Vec<HashMap<String, RdfTerm>>,
}

/// A deserialized SELECT response: variable declarations plus solutions.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SelectResults {
    pub head: Head,
    pub results: Solutions,
}

impl SelectResults {
    /// Create an empty result set
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of solutions
    pub fn len(&self) -> usize {
        self.results.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.bindings.is_empty()
    }

    /// Append a later page, keeping solutions in page order.
    ///
    /// The variable header is adopted from the first non-empty page seen.
    pub fn append_page(&mut self, page: SelectResults) {
        if self.head.vars.is_empty() {
            self.head = page.head;
        }
        self.results.bindings.extend(page.results.bindings);
    }

    /// Flatten every solution into a row of plain values, column order
    /// matching the variable declaration order. Variable names, datatypes,
    /// and language tags are discarded; an unbound variable yields an
    /// empty string.
    pub fn into_rows(self) -> Vec<Vec<String>> {
        let vars = self.head.vars;
        self.results
            .bindings
            .into_iter()
            .map(|mut solution| {
                vars.iter()
                    .map(|var| {
                        solution
                            .remove(var)
                            .map(|term| term.value)
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect()
    }
}
