//! Graph diff classification
//!
//! Classifies the nodes and edges of a target graph as new or pre-existing
//! relative to an optional baseline. Nodes compare by id, edges by their
//! unordered endpoint pair. Without a baseline nothing is new.

use super::common::EdgeKey;
use rustc_hash::FxHashSet;

/// Whether a target element already existed in the baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Provenance {
    New,
    Existing,
}

impl Provenance {
    pub fn is_new(self) -> bool {
        matches!(self, Provenance::New)
    }
}

/// Lookup sets built once from a baseline graph
#[derive(Debug, Clone, Default)]
pub struct BaselineIndex {
    node_ids: FxHashSet<String>,
    edge_keys: FxHashSet<EdgeKey>,
}

impl BaselineIndex {
    pub fn new<'n, 'e, N, E>(node_ids: N, edges: E) -> Self
    where
        N: IntoIterator<Item = &'n str>,
        E: IntoIterator<Item = (&'e str, &'e str)>,
    {
        BaselineIndex {
            node_ids: node_ids.into_iter().map(str::to_string).collect(),
            edge_keys: edges
                .into_iter()
                .map(|(s, t)| EdgeKey::new(s, t))
                .collect(),
        }
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node_ids.contains(id)
    }

    pub fn contains_edge(&self, source: &str, target: &str) -> bool {
        self.edge_keys.contains(&EdgeKey::new(source, target))
    }

    pub fn node_count(&self) -> usize {
        self.node_ids.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_keys.len()
    }

    pub fn classify_node(&self, id: &str) -> Provenance {
        if self.contains_node(id) {
            Provenance::Existing
        } else {
            Provenance::New
        }
    }

    pub fn classify_edge(&self, source: &str, target: &str) -> Provenance {
        if self.contains_edge(source, target) {
            Provenance::Existing
        } else {
            Provenance::New
        }
    }
}

/// Per-element classification, aligned with the input order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiffResult {
    pub nodes: Vec<Provenance>,
    pub edges: Vec<Provenance>,
}

impl DiffResult {
    pub fn summary(&self) -> DiffSummary {
        DiffSummary {
            nodes: self.nodes.len(),
            edges: self.edges.len(),
            new_nodes: self.nodes.iter().filter(|p| p.is_new()).count(),
            new_edges: self.edges.iter().filter(|p| p.is_new()).count(),
        }
    }
}

/// Counts of classified elements
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiffSummary {
    pub nodes: usize,
    pub edges: usize,
    pub new_nodes: usize,
    pub new_edges: usize,
}

/// Classify target nodes (by id) and edges (by endpoint pair) against `baseline`.
///
/// With `baseline == None` every element is [`Provenance::Existing`].
pub fn classify<'n, 'e, N, E>(node_ids: N, edges: E, baseline: Option<&BaselineIndex>) -> DiffResult
where
    N: IntoIterator<Item = &'n str>,
    E: IntoIterator<Item = (&'e str, &'e str)>,
{
    match baseline {
        Some(base) => DiffResult {
            nodes: node_ids.into_iter().map(|id| base.classify_node(id)).collect(),
            edges: edges
                .into_iter()
                .map(|(s, t)| base.classify_edge(s, t))
                .collect(),
        },
        None => DiffResult {
            nodes: node_ids.into_iter().map(|_| Provenance::Existing).collect(),
            edges: edges.into_iter().map(|_| Provenance::Existing).collect(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_growth_scenario() {
        // Baseline: A - B. Target adds C and B - C.
        let baseline = BaselineIndex::new(["A", "B"], [("A", "B")]);

        let result = classify(
            ["A", "B", "C"],
            [("A", "B"), ("B", "C")],
            Some(&baseline),
        );

        assert_eq!(
            result.nodes,
            vec![Provenance::Existing, Provenance::Existing, Provenance::New]
        );
        assert_eq!(result.edges, vec![Provenance::Existing, Provenance::New]);

        let summary = result.summary();
        assert_eq!(summary.nodes, 3);
        assert_eq!(summary.new_nodes, 1);
        assert_eq!(summary.edges, 2);
        assert_eq!(summary.new_edges, 1);
    }

    #[test]
    fn test_reversed_edge_is_not_new() {
        let baseline = BaselineIndex::new(["A", "B"], [("A", "B")]);
        assert_eq!(baseline.classify_edge("B", "A"), Provenance::Existing);
    }

    #[test]
    fn test_no_baseline_nothing_new() {
        let result = classify(["X", "Y"], [("X", "Y")], None);
        assert!(result.nodes.iter().all(|p| !p.is_new()));
        assert!(result.edges.iter().all(|p| !p.is_new()));
        assert_eq!(result.summary().new_nodes, 0);
    }

    #[test]
    fn test_empty_baseline_everything_new() {
        let baseline = BaselineIndex::default();
        let result = classify(["X"], [("X", "X")], Some(&baseline));
        assert_eq!(result.nodes, vec![Provenance::New]);
        assert_eq!(result.edges, vec![Provenance::New]);
    }

    #[test]
    fn test_duplicate_baseline_edges_collapse() {
        let baseline = BaselineIndex::new(["A", "B"], [("A", "B"), ("B", "A")]);
        assert_eq!(baseline.edge_count(), 1);
        assert_eq!(baseline.node_count(), 2);
    }

    fn id() -> impl Strategy<Value = String> {
        "[a-e]"
    }

    fn graph() -> impl Strategy<Value = (Vec<String>, Vec<(String, String)>)> {
        (
            proptest::collection::vec(id(), 0..8),
            proptest::collection::vec((id(), id()), 0..12),
        )
    }

    proptest! {
        #[test]
        fn property_classification_matches_set_membership(
            (target_nodes, target_edges) in graph(),
            (base_nodes, base_edges) in graph(),
            with_baseline in any::<bool>(),
        ) {
            let index = BaselineIndex::new(
                base_nodes.iter().map(String::as_str),
                base_edges.iter().map(|(s, t)| (s.as_str(), t.as_str())),
            );
            let baseline = if with_baseline { Some(&index) } else { None };

            let result = classify(
                target_nodes.iter().map(String::as_str),
                target_edges.iter().map(|(s, t)| (s.as_str(), t.as_str())),
                baseline,
            );

            let base_ids: HashSet<&String> = base_nodes.iter().collect();
            let base_pairs: HashSet<(String, String)> = base_edges
                .iter()
                .flat_map(|(s, t)| [(s.clone(), t.clone()), (t.clone(), s.clone())])
                .collect();

            for (node, p) in target_nodes.iter().zip(&result.nodes) {
                let expected = with_baseline && !base_ids.contains(node);
                prop_assert_eq!(p.is_new(), expected);
            }
            for ((s, t), p) in target_edges.iter().zip(&result.edges) {
                let expected = with_baseline && !base_pairs.contains(&(s.clone(), t.clone()));
                prop_assert_eq!(p.is_new(), expected);
            }
        }
    }
}
