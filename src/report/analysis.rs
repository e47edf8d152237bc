use std::collections::{BTreeMap, HashMap};

use crate::constants::{NO_CATEGORY, UNKNOWN_TYPE};
use crate::schema::descriptor::Descriptor;

/// Number of flows per flow type, ordered by type name.
pub fn flow_type_counts(flows: &[Descriptor]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for flow in flows {
        *counts
            .entry(flow.type_tag().unwrap_or(UNKNOWN_TYPE).to_string())
            .or_insert(0) += 1;
    }
    counts
}

/// The `n` most common categories, most frequent first. Ties keep the order
/// in which the categories were first seen.
pub fn top_categories(flows: &[Descriptor], n: usize) -> Vec<(String, usize)> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for flow in flows {
        let category = flow.category().unwrap_or(NO_CATEGORY);
        let count = counts.entry(category).or_insert_with(|| {
            order.push(category);
            0
        });
        *count += 1;
    }

    let mut ranked: Vec<(String, usize)> = order
        .into_iter()
        .map(|c| (c.to_string(), counts[c]))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n);
    ranked
}

/// Descriptors whose name contains `term`, ignoring case, in input order.
/// The term is matched literally.
pub fn search<'a>(descriptors: &'a [Descriptor], term: &str) -> Vec<&'a Descriptor> {
    let needle = term.to_lowercase();
    descriptors
        .iter()
        .filter(|d| d.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flows() -> Vec<Descriptor> {
        vec![
            Descriptor::new("1", "carbon dioxide")
                .with_flow_type("ELEMENTARY_FLOW")
                .with_category("Emission to air"),
            Descriptor::new("2", "Electricity, AC").with_flow_type("PRODUCT_FLOW"),
            Descriptor::new("3", "methane")
                .with_flow_type("ELEMENTARY_FLOW")
                .with_category("Emission to air"),
            Descriptor::new("4", "steel").with_category("Metals"),
        ]
    }

    #[test]
    fn test_flow_type_counts() {
        let counts = flow_type_counts(&flows());

        assert_eq!(
            counts.into_iter().collect::<Vec<_>>(),
            vec![
                ("ELEMENTARY_FLOW".to_string(), 2),
                ("PRODUCT_FLOW".to_string(), 1),
                ("Unknown".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_top_categories() {
        let top = top_categories(&flows(), 2);

        assert_eq!(
            top,
            vec![
                ("Emission to air".to_string(), 2),
                ("No category".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_search_ignores_case() {
        let processes = vec![
            Descriptor::new("p1", "Electricity production, hard coal"),
            Descriptor::new("p2", "transport, lorry"),
            Descriptor::new("p3", "market for electricity, low voltage"),
        ];

        let hits = search(&processes, "ELECTRICITY");

        assert_eq!(
            hits.iter().map(|d| d.id.as_str()).collect::<Vec<_>>(),
            vec!["p1", "p3"]
        );
        assert!(search(&processes, "steel").is_empty());
    }

    #[test]
    fn test_search_terms_are_literal() {
        let processes = vec![
            Descriptor::new("p1", "steel (hot rolled)"),
            Descriptor::new("p2", "transport, lorry"),
            Descriptor::new("p3", "cement"),
        ];

        let hits = search(&processes, "Steel (");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "p1");

        assert!(search(&processes, ".").is_empty());
        assert!(search(&processes, "lorry|cement").is_empty());
    }
}
