//! Simulation catalog records
//!
//! Records are deserialized as-is from the category files and never mutated.
//! Node and edge records stay as raw JSON values here; validation happens when
//! a graph is built from them (see [`crate::graph::Graph::from_raw`]).
//!
//! Graph fields come in a plain and a `_demoviz` flavour. Both keys may be
//! present on one record; the `_demoviz` graph wins.

use orgnet_match::PartialScores;
use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit `null` like a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Node and edge records exactly as stored in a category file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawGraph {
    #[serde(default, deserialize_with = "null_as_default")]
    pub nodes: Vec<serde_json::Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub edges: Vec<serde_json::Value>,
}

impl RawGraph {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

/// One strategy row of a record's simulation output table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrategyEntry {
    #[serde(rename = "Suggested Strategies", default)]
    pub strategy: Option<String>,

    #[serde(default)]
    pub graph_change_description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resulting_graph: Option<RawGraph>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resulting_graph_demoviz: Option<RawGraph>,
}

/// A pre-computed simulation record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub scores: PartialScores,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typical_graph: Option<RawGraph>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typical_graph_demoviz: Option<RawGraph>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doubled_size_typical_graph: Option<RawGraph>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doubled_size_typical_graph_demoviz: Option<RawGraph>,

    #[serde(default)]
    pub doubled_size_graph_description: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub simulation_output_table: Vec<StrategyEntry>,
}

fn non_empty(graph: Option<&RawGraph>) -> Option<&RawGraph> {
    graph.filter(|g| !g.is_empty())
}

impl SimulationItem {
    /// Typical graph as stored, empty or not. Diffs use this as the baseline.
    pub fn baseline(&self) -> Option<&RawGraph> {
        self.typical_graph_demoviz
            .as_ref()
            .or(self.typical_graph.as_ref())
    }

    /// Typical graph, if present and non-empty
    pub fn typical(&self) -> Option<&RawGraph> {
        non_empty(self.baseline())
    }

    /// Doubled-size graph, if present and non-empty
    pub fn doubled(&self) -> Option<&RawGraph> {
        non_empty(
            self.doubled_size_typical_graph_demoviz
                .as_ref()
                .or(self.doubled_size_typical_graph.as_ref()),
        )
    }
}

impl StrategyEntry {
    /// Display name, falling back to `Strategy_<position + 1>`
    pub fn name(&self, position: usize) -> String {
        self.strategy
            .clone()
            .unwrap_or_else(|| format!("Strategy_{}", position + 1))
    }

    pub fn resulting(&self) -> Option<&RawGraph> {
        non_empty(
            self.resulting_graph_demoviz
                .as_ref()
                .or(self.resulting_graph.as_ref()),
        )
    }
}
