//! Graphviz DOT output

use super::StyledGraph;
use std::fmt::Write;

/// Quote a string as a DOT identifier
fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Render as an undirected DOT graph. Node size maps to inches at 30px/inch.
pub fn to_dot(graph: &StyledGraph) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "graph {} {{", quote(&graph.name));
    let _ = writeln!(out, "  node [style=filled, fontsize=10];");

    for node in &graph.nodes {
        let _ = writeln!(
            out,
            "  {} [label={}, fillcolor={}, width={:.2}, shape={}];",
            quote(&node.id),
            quote(&node.label),
            quote(&node.style.color),
            node.style.size / 30.0,
            dot_shape(&node.style.shape),
        );
    }

    for edge in &graph.edges {
        let style = if edge.style.dashes { ", style=dashed" } else { "" };
        let _ = writeln!(
            out,
            "  {} -- {} [color={}, penwidth={}{}];",
            quote(&edge.source),
            quote(&edge.target),
            quote(&edge.style.color),
            edge.style.width,
            style,
        );
    }

    out.push_str("}\n");
    out
}

/// vis-network shape name to the closest Graphviz shape
fn dot_shape(shape: &str) -> &'static str {
    match shape {
        "box" => "box",
        "ellipse" => "ellipse",
        "database" => "cylinder",
        "text" => "plaintext",
        _ => "circle",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RawGraph;
    use crate::graph::Graph;
    use crate::style::StyleTable;
    use serde_json::json;

    #[test]
    fn test_dot_output() {
        let raw: RawGraph = serde_json::from_value(json!({
            "nodes": [{"id": "a", "label": "Team \"A\""}, {"id": "b", "role": "central_hub"}],
            "edges": [{"source": "a", "target": "b", "type": "shortcut_link"}]
        }))
        .unwrap();
        let styled = StyledGraph::build(
            "demo",
            &Graph::from_raw(&raw, "demo"),
            None,
            &StyleTable::default(),
        );

        let dot = to_dot(&styled);
        assert!(dot.starts_with("graph \"demo\" {"));
        assert!(dot.contains(r#"label="Team \"A\"""#));
        assert!(dot.contains(r##""b" [label="b", fillcolor="#FF4500", width=0.83, shape=circle];"##));
        assert!(dot.contains(r##""a" -- "b" [color="#9370DB", penwidth=2, style=dashed];"##));
        assert!(dot.trim_end().ends_with('}'));
    }
}
