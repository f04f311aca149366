//! Influence-relation adjacency builders

use tracing::info;

use crate::graph::AdjacencyMap;
use crate::sparql::{EndpointConfig, HttpSparqlClient, QueryPager, SparqlResult};

use super::label::clean;
use super::queries;

/// Map every language onto the languages that influenced it.
pub async fn influenced_by(config: &EndpointConfig) -> SparqlResult<AdjacencyMap> {
    let rows = run_query(config, queries::INFLUENCED_BY).await?;
    Ok(adjacency_from_pairs(rows))
}

/// Same mapping shape as [`influenced_by`], sourced from the inverse
/// `dbo:influenced` relation.
pub async fn influenced(config: &EndpointConfig) -> SparqlResult<AdjacencyMap> {
    let rows = run_query(config, queries::INFLUENCED).await?;
    Ok(adjacency_from_pairs(rows))
}

/// Union of [`influenced_by`] and [`influenced`], per key, first-seen
/// order, no duplicate values. The two queries run one after the other.
pub async fn influenced_and_influenced_by(config: &EndpointConfig) -> SparqlResult<AdjacencyMap> {
    let mut result = influenced_by(config).await?;
    result.merge(influenced(config).await?);
    Ok(result)
}

/// Like [`influenced_by`], but keeping only pairs asserted in both
/// directions by the source data.
pub async fn strict_influenced_by(config: &EndpointConfig) -> SparqlResult<AdjacencyMap> {
    let rows = run_query(config, queries::STRICT_INFLUENCED_BY).await?;
    Ok(adjacency_from_pairs(rows))
}

/// Influence neighborhood of a single language.
///
/// The shape is deliberately asymmetric: the cleaned entity name maps to
/// everything that influenced it, and every language it influenced gets its
/// own key mapping back to the singleton entity name. A name matching
/// several articles is resolved (or not) by the endpoint's exact-string
/// label comparison.
pub async fn influenced_and_influenced_by_for(
    config: &EndpointConfig,
    name: &str,
) -> SparqlResult<AdjacencyMap> {
    let influencers = run_query(config, &queries::bind_name(queries::ENTITY_INFLUENCED_BY, name)).await?;
    let influencees = run_query(config, &queries::bind_name(queries::ENTITY_INFLUENCED, name)).await?;
    Ok(single_entity_adjacency(name, influencers, influencees))
}

async fn run_query(config: &EndpointConfig, template: &str) -> SparqlResult<Vec<Vec<String>>> {
    let client = HttpSparqlClient::new(config)?;
    let pager = QueryPager::new(&client, config.retry);
    let rows = pager.run_literal(template).await?;
    info!(rows = rows.len(), endpoint = %config.url, "query complete");
    Ok(rows)
}

/// Fold (key, value) label rows into an adjacency mapping, cleaning both
/// labels. Keys appear lazily; duplicate values are skipped.
fn adjacency_from_pairs(rows: Vec<Vec<String>>) -> AdjacencyMap {
    let mut map = AdjacencyMap::new();
    for row in &rows {
        if let (Some(key), Some(value)) = (row.first(), row.get(1)) {
            map.add_link(clean(key), clean(value));
        }
    }
    map
}

fn single_entity_adjacency(
    name: &str,
    influencers: Vec<Vec<String>>,
    influencees: Vec<Vec<String>>,
) -> AdjacencyMap {
    let name = clean(name);
    let mut map = AdjacencyMap::new();
    map.ensure_key(&name);
    for row in &influencers {
        if let Some(influencer) = row.first() {
            map.add_link(name.clone(), clean(influencer));
        }
    }
    for row in &influencees {
        if let Some(influencee) = row.first() {
            map.add_link(clean(influencee), name.clone());
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(rows: &[(&str, &str)]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|(a, b)| vec![a.to_string(), b.to_string()])
            .collect()
    }

    fn singles(rows: &[&str]) -> Vec<Vec<String>> {
        rows.iter().map(|v| vec![v.to_string()]).collect()
    }

    #[test]
    fn test_adjacency_from_pairs_cleans_and_dedups() {
        let map = adjacency_from_pairs(pairs(&[
            ("Java (programming language)", "C (programming language)"),
            ("Java (programming language)", "Smalltalk"),
            ("Java", "C"),
        ]));

        let java: Vec<_> = map.get("Java").unwrap().iter().cloned().collect();
        assert_eq!(java, vec!["C".to_string(), "Smalltalk".to_string()]);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_merged_union_is_first_seen() {
        let mut a = adjacency_from_pairs(pairs(&[("X", "Y")]));
        let b = adjacency_from_pairs(pairs(&[("X", "Z"), ("X", "Y")]));
        a.merge(b);

        let x: Vec<_> = a.get("X").unwrap().iter().cloned().collect();
        assert_eq!(x, vec!["Y".to_string(), "Z".to_string()]);
    }

    #[test]
    fn test_single_entity_shape_is_asymmetric() {
        let map = single_entity_adjacency(
            "Java (programming language)",
            singles(&["C (programming language)"]),
            singles(&["Go (programming language)"]),
        );

        let java: Vec<_> = map.get("Java").unwrap().iter().cloned().collect();
        assert_eq!(java, vec!["C".to_string()]);

        let go: Vec<_> = map.get("Go").unwrap().iter().cloned().collect();
        assert_eq!(go, vec!["Java".to_string()]);

        // The influencer never gets a reciprocal key
        assert!(!map.contains_key("C"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_single_entity_with_no_relations_keeps_forward_key() {
        let map = single_entity_adjacency("Brainfuck", Vec::new(), Vec::new());
        assert!(map.contains_key("Brainfuck"));
        assert!(map.get("Brainfuck").unwrap().is_empty());
        assert_eq!(map.len(), 1);
    }
}
