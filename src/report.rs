//! Assessment report: the presentation-ready view of a matched record

use crate::catalog::{RawGraph, SimulationItem};
use crate::graph::{Graph, SkippedRecords};
use crate::questionnaire::Selection;
use crate::render::{sanitize_artifact_name, StyledGraph};
use crate::style::StyleTable;
use orgnet_match::{BaselineIndex, DiffSummary, PartialScores, ScoreTriple};
use serde::Serialize;

pub const NO_DESCRIPTION: &str = "No specific change description available.";

/// One graph of the report, with its diff counts
#[derive(Debug, Clone, Serialize)]
pub struct GraphSection {
    pub title: String,
    pub caption: Option<String>,
    /// File-name stem for rendered artifacts
    pub artifact: String,
    /// `false` when the record carries no (or an empty) graph here
    pub available: bool,
    pub summary: Option<DiffSummary>,
    pub skipped: SkippedRecords,
    #[serde(skip)]
    pub graph: Option<StyledGraph>,
}

impl GraphSection {
    fn build(
        title: String,
        caption: Option<String>,
        artifact: String,
        raw: Option<&RawGraph>,
        baseline: Option<&BaselineIndex>,
        styles: &StyleTable,
    ) -> Self {
        let graph = raw.map(|raw| {
            let graph = Graph::from_raw(raw, &artifact);
            StyledGraph::build(&artifact, &graph, baseline, styles)
        });

        GraphSection {
            title,
            caption,
            available: graph.is_some(),
            summary: graph.as_ref().map(|g| g.summary),
            skipped: graph.as_ref().map(|g| g.skipped).unwrap_or_default(),
            artifact,
            graph,
        }
    }
}

/// A strategy row with its resulting graph diffed against the typical graph
#[derive(Debug, Clone, Serialize)]
pub struct StrategyOutcome {
    pub position: usize,
    pub name: String,
    pub description: String,
    pub section: GraphSection,
}

/// Typical graph section of a matched record
pub fn typical_section(item: &SimulationItem, file_base: &str, trigger: &str, styles: &StyleTable) -> GraphSection {
    GraphSection::build(
        format!(
            "This is how such typical network looks like for '{}' ({})",
            trigger,
            format_scores(&item.scores)
        ),
        None,
        format!("typical_main_{}", file_base),
        item.typical(),
        None,
        styles,
    )
}

/// Doubled-size growth section of a matched record
pub fn doubled_section(item: &SimulationItem, file_base: &str, styles: &StyleTable) -> GraphSection {
    GraphSection::build(
        "This is how such typical network looks like at doubled size growth".to_string(),
        item.doubled_size_graph_description.clone(),
        format!("doubled_typical_{}", file_base),
        item.doubled(),
        None,
        styles,
    )
}

/// Every strategy of the record, each resulting graph diffed against the typical graph.
/// An empty typical graph is still a baseline, so everything in the strategy graphs is new.
pub fn strategy_outcomes(item: &SimulationItem, file_base: &str, styles: &StyleTable) -> Vec<StrategyOutcome> {
    let baseline = item
        .baseline()
        .map(|raw| Graph::from_raw(raw, "baseline").baseline_index());

    item.simulation_output_table
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let name = entry.name(i);
            let description = entry
                .graph_change_description
                .clone()
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| NO_DESCRIPTION.to_string());
            let artifact = format!("resulting_{}_{}_{}", file_base, i, sanitize_artifact_name(&name));

            StrategyOutcome {
                position: i,
                section: GraphSection::build(
                    format!("Strategy: {}", name),
                    Some(format!("Effect on Network: {}", description)),
                    artifact,
                    entry.resulting(),
                    baseline.as_ref(),
                    styles,
                ),
                name,
                description,
            }
        })
        .collect()
}

/// `C=…, N=…, L=…` with `n/a` for missing fields
pub fn format_scores(scores: &PartialScores) -> String {
    let f = |v: Option<f64>| v.map(|v| format!("{:.1}", v)).unwrap_or_else(|| "n/a".to_string());
    format!(
        "Scores: C={}, N={}, L={}",
        f(scores.centrality),
        f(scores.connectivity),
        f(scores.clustering)
    )
}

/// Everything a front end needs to present one assessment
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    pub scores: ScoreTriple,
    pub selections: Vec<Selection>,
    pub trigger: String,
    pub matched_index: usize,
    pub matched_scores: PartialScores,
    pub distance_sq: f64,
    pub typical: GraphSection,
    pub doubled: GraphSection,
    /// Empty until the simulation has been run
    pub strategies: Vec<StrategyOutcome>,
}

impl AssessmentReport {
    /// All sections that carry a graph, in presentation order
    pub fn sections(&self) -> impl Iterator<Item = &GraphSection> {
        [&self.typical, &self.doubled]
            .into_iter()
            .chain(self.strategies.iter().map(|s| &s.section))
            .filter(|s| s.available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item() -> SimulationItem {
        serde_json::from_value(json!({
            "scores": {"centrality": 2.0, "connectivity": 3.0, "clustering": 4.0},
            "typical_graph": {
                "nodes": [{"id": "A"}, {"id": "B"}],
                "edges": [{"source": "A", "target": "B"}]
            },
            "simulation_output_table": [
                {
                    "Suggested Strategies": "Grow team (phase 1)",
                    "graph_change_description": "C joins via B",
                    "resulting_graph": {
                        "nodes": [{"id": "A"}, {"id": "B"}, {"id": "C"}],
                        "edges": [{"source": "A", "target": "B"}, {"source": "B", "target": "C"}]
                    }
                },
                {"graph_change_description": ""}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_typical_and_missing_doubled() {
        let styles = StyleTable::default();
        let item = item();

        let typical = typical_section(&item, "growth", "Growth", &styles);
        assert!(typical.available);
        assert_eq!(typical.artifact, "typical_main_growth");
        assert!(typical.title.contains("C=2.0, N=3.0, L=4.0"));
        assert_eq!(typical.summary.unwrap().new_nodes, 0);

        let doubled = doubled_section(&item, "growth", &styles);
        assert!(!doubled.available);
        assert!(doubled.graph.is_none());
    }

    #[test]
    fn test_strategy_outcomes() {
        let outcomes = strategy_outcomes(&item(), "growth", &StyleTable::default());
        assert_eq!(outcomes.len(), 2);

        let first = &outcomes[0];
        assert_eq!(first.name, "Grow team (phase 1)");
        assert_eq!(first.section.artifact, "resulting_growth_0_Grow_team__phase_1_");
        let summary = first.section.summary.unwrap();
        assert_eq!(summary.new_nodes, 1);
        assert_eq!(summary.new_edges, 1);

        let second = &outcomes[1];
        assert_eq!(second.name, "Strategy_2");
        assert_eq!(second.description, NO_DESCRIPTION);
        assert!(!second.section.available);
    }

    #[test]
    fn test_empty_typical_graph_marks_everything_new() {
        let item: SimulationItem = serde_json::from_value(json!({
            "typical_graph": {"nodes": [], "edges": []},
            "simulation_output_table": [{
                "resulting_graph": {
                    "nodes": [{"id": "X"}, {"id": "Y"}],
                    "edges": [{"source": "X", "target": "Y"}]
                }
            }]
        }))
        .unwrap();

        let outcomes = strategy_outcomes(&item, "growth", &StyleTable::default());
        let summary = outcomes[0].section.summary.unwrap();
        assert_eq!((summary.new_nodes, summary.new_edges), (2, 1));

        // Without any typical graph nothing is new
        let mut without = item.clone();
        without.typical_graph = None;
        let summary = strategy_outcomes(&without, "growth", &StyleTable::default())[0]
            .section
            .summary
            .unwrap();
        assert_eq!((summary.new_nodes, summary.new_edges), (0, 0));
    }

    #[test]
    fn test_format_scores_missing() {
        let scores = PartialScores {
            centrality: Some(1.3),
            connectivity: None,
            clustering: Some(5.0),
        };
        assert_eq!(format_scores(&scores), "Scores: C=1.3, N=n/a, L=5.0");
    }
}
