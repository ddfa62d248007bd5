//! vis-network JSON and HTML output

use super::{RenderResult, StyledGraph};
use crate::config::ViewOptions;
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Serialize)]
struct VisNode<'a> {
    id: &'a str,
    label: &'a str,
    title: String,
    size: f64,
    color: &'a str,
    shape: &'a str,
}

#[derive(Serialize)]
struct VisEdge<'a> {
    from: &'a str,
    to: &'a str,
    title: &'a str,
    color: &'a str,
    width: f64,
    dashes: bool,
}

fn options(view: &ViewOptions) -> Value {
    json!({
        "width": format!("{}px", view.width),
        "height": format!("{}px", view.height),
        "edges": {"arrows": {"to": {"enabled": false}}, "smooth": {"type": "continuous"}},
        "nodes": {"font": {"size": view.font_size}},
        "layout": {"hierarchical": {"enabled": false}},
        "physics": {
            "stabilization": {"iterations": view.stabilization_iterations, "fit": true},
            "barnesHut": {"gravitationalConstant": view.gravitational_constant}
        },
        "interaction": {"hover": true, "tooltipDelay": view.tooltip_delay}
    })
}

/// `{nodes, edges, options}` document consumable by `new vis.Network(...)`
pub fn to_vis_json(graph: &StyledGraph, view: &ViewOptions) -> Value {
    let nodes: Vec<VisNode<'_>> = graph
        .nodes
        .iter()
        .map(|n| VisNode {
            id: &n.id,
            label: &n.label,
            title: format!("{} ({})", n.role, if n.provenance.is_new() { "new" } else { "existing" }),
            size: n.style.size,
            color: &n.style.color,
            shape: &n.style.shape,
        })
        .collect();

    let edges: Vec<VisEdge<'_>> = graph
        .edges
        .iter()
        .map(|e| VisEdge {
            from: &e.source,
            to: &e.target,
            title: &e.edge_type,
            color: &e.style.color,
            width: e.style.width,
            dashes: e.style.dashes,
        })
        .collect();

    json!({
        "nodes": nodes,
        "edges": edges,
        "options": options(view),
    })
}

const HTML_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{{TITLE}}</title>
<script src="https://unpkg.com/vis-network/standalone/umd/vis-network.min.js"></script>
<style>#graph { width: {{WIDTH}}px; height: {{HEIGHT}}px; border: 1px solid #ddd; }</style>
</head>
<body>
<h3>{{TITLE}}</h3>
<div id="graph"></div>
<script>
const doc = {{DOCUMENT}};
new vis.Network(
  document.getElementById("graph"),
  { nodes: new vis.DataSet(doc.nodes), edges: new vis.DataSet(doc.edges) },
  doc.options
);
</script>
</body>
</html>
"#;

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Standalone page that draws the graph with vis-network
pub fn to_html(graph: &StyledGraph, view: &ViewOptions) -> RenderResult<String> {
    // `</` inside a script block would end it early
    let document = serde_json::to_string(&to_vis_json(graph, view))?.replace("</", "<\\/");
    Ok(HTML_TEMPLATE
        .replace("{{TITLE}}", &escape_html(&graph.name))
        .replace("{{WIDTH}}", &view.width.to_string())
        .replace("{{HEIGHT}}", &view.height.to_string())
        .replace("{{DOCUMENT}}", &document))
}
