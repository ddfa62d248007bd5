//! Graph rendering
//!
//! A [`StyledGraph`] joins a validated graph, its diff classification and the
//! style table. Renderers turn it into Graphviz DOT, vis-network JSON, or a
//! standalone vis-network HTML page. Layout and physics belong to the
//! rendering tool, not to this crate.

pub mod dot;
pub mod vis;

use crate::config::ViewOptions;
use crate::graph::{Graph, SkippedRecords};
use crate::style::{EdgeStyle, NodeStyle, StyleTable};
use orgnet_match::{BaselineIndex, DiffSummary, Provenance};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

pub use dot::to_dot;
pub use vis::{to_html, to_vis_json};

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("No valid nodes to display for graph '{0}'")]
    NoNodes(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type RenderResult<T> = Result<T, RenderError>;

/// Output format of a rendered artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderFormat {
    Dot,
    Json,
    Html,
}

impl RenderFormat {
    pub const ALL: [RenderFormat; 3] = [RenderFormat::Dot, RenderFormat::Json, RenderFormat::Html];

    pub fn extension(self) -> &'static str {
        match self {
            RenderFormat::Dot => "dot",
            RenderFormat::Json => "json",
            RenderFormat::Html => "html",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyledNode {
    pub id: String,
    pub label: String,
    pub role: String,
    pub provenance: Provenance,
    pub style: NodeStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyledEdge {
    pub source: String,
    pub target: String,
    pub edge_type: String,
    pub provenance: Provenance,
    pub style: EdgeStyle,
}

/// A graph ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyledGraph {
    pub name: String,
    pub nodes: Vec<StyledNode>,
    pub edges: Vec<StyledEdge>,
    pub summary: DiffSummary,
    pub skipped: SkippedRecords,
}

impl StyledGraph {
    /// Classify `graph` against `baseline` and attach styles
    pub fn build(
        name: &str,
        graph: &Graph,
        baseline: Option<&BaselineIndex>,
        styles: &StyleTable,
    ) -> Self {
        let diff = graph.diff(baseline);

        let nodes = graph
            .nodes
            .iter()
            .zip(&diff.nodes)
            .map(|(n, &provenance)| StyledNode {
                id: n.id.clone(),
                label: n.label.clone(),
                role: n.role.clone(),
                provenance,
                style: styles.node_style(&n.role, provenance).clone(),
            })
            .collect();

        let edges = graph
            .edges
            .iter()
            .zip(&diff.edges)
            .map(|(e, &provenance)| StyledEdge {
                source: e.source.clone(),
                target: e.target.clone(),
                edge_type: e.edge_type.clone(),
                provenance,
                style: styles.edge_style(&e.edge_type, provenance).clone(),
            })
            .collect();

        StyledGraph {
            name: name.to_string(),
            nodes,
            edges,
            summary: diff.summary(),
            skipped: graph.skipped,
        }
    }

    pub fn is_renderable(&self) -> bool {
        !self.nodes.is_empty()
    }

    pub fn render(&self, format: RenderFormat, view: &ViewOptions) -> RenderResult<String> {
        if !self.is_renderable() {
            return Err(RenderError::NoNodes(self.name.clone()));
        }
        Ok(match format {
            RenderFormat::Dot => to_dot(self),
            RenderFormat::Json => serde_json::to_string_pretty(&to_vis_json(self, view))?,
            RenderFormat::Html => to_html(self, view)?,
        })
    }

    /// Write `<dir>/<name>.<ext>` for each format; returns the written paths.
    ///
    /// A graph with no valid nodes writes nothing and logs a warning.
    pub fn write_all(
        &self,
        dir: &Path,
        formats: &[RenderFormat],
        view: &ViewOptions,
    ) -> RenderResult<Vec<PathBuf>> {
        if !self.is_renderable() {
            warn!("No valid nodes to display for graph '{}'", self.name);
            return Ok(Vec::new());
        }

        fs::create_dir_all(dir)?;
        let mut written = Vec::with_capacity(formats.len());
        for &format in formats {
            let path = dir.join(format!("{}.{}", self.name, format.extension()));
            fs::write(&path, self.render(format, view)?)?;
            info!("Wrote {}", path.display());
            written.push(path);
        }
        Ok(written)
    }
}

/// Artifact-safe form of a strategy name: every non-alphanumeric character
/// becomes `_`, truncated to 30 characters.
pub fn sanitize_artifact_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .take(30)
        .collect()
}
