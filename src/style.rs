//! Visual style table for rendered graphs
//!
//! Explicit role/type tags pick a style first. Only untagged elements
//! (`default_node` / `default_link`) fall back to the diff classification,
//! getting the "new" style when absent from the baseline. The table is plain
//! data and can be replaced from configuration.

use crate::graph::{DEFAULT_EDGE_TYPE, DEFAULT_NODE_ROLE};
use indexmap::IndexMap;
use orgnet_match::Provenance;
use serde::{Deserialize, Serialize};

fn default_shape() -> String {
    "dot".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeStyle {
    pub color: String,
    pub size: f64,
    #[serde(default = "default_shape")]
    pub shape: String,
}

impl NodeStyle {
    pub fn new(color: &str, size: f64) -> Self {
        NodeStyle {
            color: color.to_string(),
            size,
            shape: default_shape(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeStyle {
    pub color: String,
    pub width: f64,
    #[serde(default)]
    pub dashes: bool,
}

impl EdgeStyle {
    pub fn new(color: &str, width: f64) -> Self {
        EdgeStyle {
            color: color.to_string(),
            width,
            dashes: false,
        }
    }

    pub fn dashed(mut self) -> Self {
        self.dashes = true;
        self
    }
}

/// Role/type keyed style lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleTable {
    pub default_node: NodeStyle,
    pub new_node: NodeStyle,
    pub node_roles: IndexMap<String, NodeStyle>,
    pub default_edge: EdgeStyle,
    pub new_edge: EdgeStyle,
    pub edge_types: IndexMap<String, EdgeStyle>,
}

impl Default for StyleTable {
    fn default() -> Self {
        let node_roles = [
            ("initial_hub", NodeStyle::new("#FFA500", 20.0)),
            ("polycentric_hub", NodeStyle::new("#FFD700", 22.0)),
            ("central_hub", NodeStyle::new("#FF4500", 25.0)),
            ("emergent_hub", NodeStyle::new("#FF8C00", 20.0)),
            ("spoke_node", NodeStyle::new("#87CEEB", 15.0)),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        let edge_types = [
            ("spanning_tree_link", EdgeStyle::new("#A9A9A9", 1.0)),
            ("clustering_link", EdgeStyle::new("#4682B4", 2.0)),
            ("local_cluster_link", EdgeStyle::new("#4682B4", 2.0)),
            ("hub_connection", EdgeStyle::new("#FF8C00", 2.0)),
            ("spoke_connection", EdgeStyle::new("#FF8C00", 2.0)),
            ("hub_interlink", EdgeStyle::new("#FF4500", 2.5)),
            ("sync_enhancement_link", EdgeStyle::new("#20B2AA", 1.0)),
            ("shortcut_link", EdgeStyle::new("#9370DB", 2.0).dashed()),
            ("preferential_attachment_link", EdgeStyle::new("#3CB371", 1.5)),
            ("random_link", EdgeStyle::new("#E0E0E0", 1.0)),
            ("generic_added_link", EdgeStyle::new("#006400", 2.0)),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        StyleTable {
            default_node: NodeStyle::new("#C0C0C0", 15.0),
            new_node: NodeStyle::new("#32CD32", 15.0),
            node_roles,
            default_edge: EdgeStyle::new("#D3D3D3", 1.0),
            new_edge: EdgeStyle::new("#0000FF", 2.5),
            edge_types,
        }
    }
}

impl StyleTable {
    pub fn node_style(&self, role: &str, provenance: Provenance) -> &NodeStyle {
        if let Some(style) = self.node_roles.get(role) {
            return style;
        }
        if provenance.is_new() && role == DEFAULT_NODE_ROLE {
            return &self.new_node;
        }
        &self.default_node
    }

    pub fn edge_style(&self, edge_type: &str, provenance: Provenance) -> &EdgeStyle {
        if let Some(style) = self.edge_types.get(edge_type) {
            return style;
        }
        if provenance.is_new() && edge_type == DEFAULT_EDGE_TYPE {
            return &self.new_edge;
        }
        &self.default_edge
    }
}
