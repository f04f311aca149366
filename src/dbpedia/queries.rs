//! Embedded SPARQL query templates
//!
//! Every template targets articles carrying the programming-language
//! infobox, keeps English labels only, deduplicates and orders inside a
//! subselect, and ends with the pagination markers the pager requires
//! (`LIMIT 10000` / `OFFSET ?offset`).

/// All languages paired with the languages that influenced them:
/// columns (label1 = influenced, label2 = influencer).
pub(crate) const INFLUENCED_BY: &str = r#"
SELECT ?label1 ?label2 WHERE {
    SELECT DISTINCT ?label1 ?label2 WHERE {
        ?article1 dbp:wikiPageUsesTemplate dbt:Infobox_programming_language.
        ?article2 dbp:wikiPageUsesTemplate dbt:Infobox_programming_language.
        ?article1 dbo:influencedBy ?article2.
        ?article1 rdfs:label ?label1.
        FILTER(langMatches(LANG(?label1),"EN")).
        ?article2 rdfs:label ?label2.
        FILTER(langMatches(LANG(?label2),"EN")).
    }
    ORDER BY ASC(?label1) ASC(?label2)
}
LIMIT 10000
OFFSET ?offset
"#;

/// The inverse relation, with columns swapped so the row shape matches
/// [`INFLUENCED_BY`]: (label2 = influenced, label1 = influencer).
pub(crate) const INFLUENCED: &str = r#"
SELECT ?label2 ?label1 WHERE {
    SELECT DISTINCT ?label2 ?label1 WHERE {
        ?article1 dbp:wikiPageUsesTemplate dbt:Infobox_programming_language.
        ?article2 dbp:wikiPageUsesTemplate dbt:Infobox_programming_language.
        ?article1 dbo:influenced ?article2.
        ?article1 rdfs:label ?label1.
        FILTER(langMatches(LANG(?label1),"EN")).
        ?article2 rdfs:label ?label2.
        FILTER(langMatches(LANG(?label2),"EN")).
    }
    ORDER BY ASC(?label2) ASC(?label1)
}
LIMIT 10000
OFFSET ?offset
"#;

/// Influence pairs asserted in both directions (A influencedBy B and
/// B influenced A), cutting asymmetric or stale facts.
pub(crate) const STRICT_INFLUENCED_BY: &str = r#"
SELECT ?label1 ?label2 WHERE {
    SELECT DISTINCT ?label1 ?label2 WHERE {
        ?article1 dbp:wikiPageUsesTemplate dbt:Infobox_programming_language.
        ?article2 dbp:wikiPageUsesTemplate dbt:Infobox_programming_language.
        ?article1 dbo:influencedBy ?article2.
        ?article2 dbo:influenced ?article1.
        ?article1 rdfs:label ?label1.
        FILTER(langMatches(LANG(?label1),"EN")).
        ?article2 rdfs:label ?label2.
        FILTER(langMatches(LANG(?label2),"EN")).
    }
    ORDER BY ASC(?label1) ASC(?label2)
}
LIMIT 10000
OFFSET ?offset
"#;

/// Everything that influenced one named language (single column).
/// Bind the name with [`bind_name`] before running.
pub(crate) const ENTITY_INFLUENCED_BY: &str = r#"
SELECT ?influencedBy WHERE {
    SELECT DISTINCT ?influencedBy WHERE {
        ?article1 dbp:wikiPageUsesTemplate dbt:Infobox_programming_language.
        ?article2 dbp:wikiPageUsesTemplate dbt:Infobox_programming_language.
        ?article1 rdfs:label ?label1.
        FILTER(langMatches(LANG(?label1),"EN")).
        FILTER(STR(?label1) = "?name").
        ?article1 dbo:influencedBy ?article2.
        ?article2 rdfs:label ?influencedBy.
        FILTER(langMatches(LANG(?influencedBy),"EN")).
    }
    ORDER BY ASC(?influencedBy)
}
LIMIT 10000
OFFSET ?offset
"#;

/// Everything one named language influenced (single column).
/// Bind the name with [`bind_name`] before running.
pub(crate) const ENTITY_INFLUENCED: &str = r#"
SELECT ?influenced WHERE {
    SELECT DISTINCT ?influenced WHERE {
        ?article1 dbp:wikiPageUsesTemplate dbt:Infobox_programming_language.
        ?article2 dbp:wikiPageUsesTemplate dbt:Infobox_programming_language.
        ?article1 rdfs:label ?label1.
        FILTER(langMatches(LANG(?label1),"EN")).
        FILTER(STR(?label1) = "?name").
        ?article1 dbo:influenced ?article2.
        ?article2 rdfs:label ?influenced.
        FILTER(langMatches(LANG(?influenced),"EN")).
    }
    ORDER BY ASC(?influenced)
}
LIMIT 10000
OFFSET ?offset
"#;

/// Escape a value for inclusion in a SPARQL double-quoted string literal.
fn escape_literal(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Bind the `?name` placeholder to an entity name, escaped as a string
/// literal so names containing quotes cannot break out of the FILTER.
pub(crate) fn bind_name(template: &str, name: &str) -> String {
    template.replace("?name", &escape_literal(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sparql::validate_template;

    #[test]
    fn test_all_templates_carry_pagination_markers() {
        for template in [
            INFLUENCED_BY,
            INFLUENCED,
            STRICT_INFLUENCED_BY,
            ENTITY_INFLUENCED_BY,
            ENTITY_INFLUENCED,
        ] {
            validate_template(template).unwrap();
        }
    }

    #[test]
    fn test_bind_name_substitutes_placeholder() {
        let bound = bind_name(ENTITY_INFLUENCED_BY, "Java (programming language)");
        assert!(bound.contains(r#"FILTER(STR(?label1) = "Java (programming language)")"#));
        assert!(!bound.contains("?name"));
        // The pagination marker is untouched
        assert!(bound.contains("OFFSET ?offset"));
    }

    #[test]
    fn test_bind_name_escapes_quotes() {
        let bound = bind_name(ENTITY_INFLUENCED_BY, r#"Q"uirk\lang"#);
        assert!(bound.contains(r#"= "Q\"uirk\\lang""#));
    }
}
