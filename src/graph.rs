//! Validated simulation graphs
//!
//! Builds node/edge lists from raw catalog records. Records without an `id`
//! (nodes) or without `source`/`target` (edges) are skipped with a warning;
//! the rest of the graph still loads.

use crate::catalog::RawGraph;
use orgnet_match::{classify, BaselineIndex, DiffResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// Role of a node that carries no explicit tag
pub const DEFAULT_NODE_ROLE: &str = "default_node";

/// Type of an edge that carries no explicit tag
pub const DEFAULT_EDGE_TYPE: &str = "default_link";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub edge_type: String,
}

/// How many raw records were dropped as invalid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRecords {
    pub nodes: usize,
    pub edges: usize,
}

impl SkippedRecords {
    pub fn total(&self) -> usize {
        self.nodes + self.edges
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub skipped: SkippedRecords,
}

/// Render an id-like JSON value as a string: strings verbatim, anything else
/// in its JSON form (so `3` and `"3"` name the same node).
fn id_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Optional string field; absent or `null` fall back to `default`
fn tag(record: &serde_json::Map<String, Value>, key: &str, default: &str) -> String {
    match record.get(key) {
        None | Some(Value::Null) => default.to_string(),
        Some(v) => id_string(v),
    }
}

impl Graph {
    /// Validate raw records. `context` names the graph in warnings.
    pub fn from_raw(raw: &RawGraph, context: &str) -> Self {
        let mut graph = Graph::default();

        for (idx, record) in raw.nodes.iter().enumerate() {
            let Some(obj) = record.as_object().filter(|o| o.contains_key("id")) else {
                warn!("Skipping invalid node data (index {}) for graph '{}': {}", idx, context, record);
                graph.skipped.nodes += 1;
                continue;
            };

            let id = id_string(&obj["id"]);
            graph.nodes.push(GraphNode {
                label: tag(obj, "label", &id),
                role: tag(obj, "role", DEFAULT_NODE_ROLE),
                id,
            });
        }

        for (idx, record) in raw.edges.iter().enumerate() {
            let Some(obj) = record
                .as_object()
                .filter(|o| o.contains_key("source") && o.contains_key("target"))
            else {
                warn!("Skipping invalid edge data (index {}) for graph '{}': {}", idx, context, record);
                graph.skipped.edges += 1;
                continue;
            };

            graph.edges.push(GraphEdge {
                source: id_string(&obj["source"]),
                target: id_string(&obj["target"]),
                edge_type: tag(obj, "type", DEFAULT_EDGE_TYPE),
            });
        }

        graph
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Lookup sets for diffing other graphs against this one
    pub fn baseline_index(&self) -> BaselineIndex {
        BaselineIndex::new(
            self.nodes.iter().map(|n| n.id.as_str()),
            self.edges.iter().map(|e| (e.source.as_str(), e.target.as_str())),
        )
    }

    /// Classify this graph's elements against `baseline`; `None` marks nothing new
    pub fn diff(&self, baseline: Option<&BaselineIndex>) -> DiffResult {
        classify(
            self.nodes.iter().map(|n| n.id.as_str()),
            self.edges.iter().map(|e| (e.source.as_str(), e.target.as_str())),
            baseline,
        )
    }
}
