//! End-to-end assessment flow over on-disk category files

use orgnet::catalog::{available_triggers, Catalog, CatalogError};
use orgnet::{
    Answers, AssessmentSession, Likert, OrgnetConfig, Provenance, Question, RenderFormat,
    SessionError,
};
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn growth_records() -> serde_json::Value {
    json!([
        {
            "scores": {"centrality": 1.0, "connectivity": 1.0, "clustering": 1.0},
            "typical_graph": {
                "nodes": [{"id": "low"}],
                "edges": []
            },
            "simulation_output_table": []
        },
        {
            "scores": {"centrality": 3.0, "connectivity": 3.0, "clustering": 3.0},
            "typical_graph_demoviz": {
                "nodes": [{"id": "A", "role": "initial_hub"}, {"id": "B"}],
                "edges": [{"source": "A", "target": "B", "type": "hub_connection"}]
            },
            "doubled_size_typical_graph_demoviz": {
                "nodes": [{"id": "A"}, {"id": "B"}, {"id": "C"}, {"id": "D"}],
                "edges": [{"source": "A", "target": "B"}, {"source": "C", "target": "D"}]
            },
            "doubled_size_graph_description": "Two loosely coupled pairs",
            "simulation_output_table": [
                {
                    "Suggested Strategies": "Introduce a connector",
                    "graph_change_description": "C bridges to B",
                    "resulting_graph_demoviz": {
                        "nodes": [{"id": "A"}, {"id": "B"}, {"id": "C"}, {"bad": true}],
                        "edges": [
                            {"source": "B", "target": "A"},
                            {"source": "B", "target": "C"},
                            {"target": "C"}
                        ]
                    }
                },
                {
                    "Suggested Strategies": "Do nothing"
                }
            ]
        },
        {
            "scores": {"centrality": 5.0, "connectivity": 5.0, "clustering": 5.0},
            "typical_graph": {"nodes": [{"id": "high"}], "edges": []}
        }
    ])
}

fn data_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "accelerated_growth.json", &growth_records().to_string());
    write(dir.path(), "merger.json", "[]");
    write(dir.path(), "broken_file.json", "{ not json");
    write(dir.path(), "notes.txt", "ignored");
    dir
}

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn session(dir: &Path) -> AssessmentSession {
    let config = OrgnetConfig {
        data_dir: dir.to_path_buf(),
        ..OrgnetConfig::default()
    };
    AssessmentSession::new(config)
}

#[test]
fn test_triggers_are_sorted_pretty_names() {
    let dir = data_dir();
    let triggers = available_triggers(dir.path(), "Fallback");
    assert_eq!(triggers, vec!["Accelerated Growth", "Broken File", "Merger"]);
}

#[test]
fn test_trigger_fallbacks() {
    let missing = available_triggers(Path::new("/nonexistent/orgnet"), "Accelerated Growth");
    assert_eq!(missing, vec!["Accelerated Growth"]);

    let empty = TempDir::new().unwrap();
    write(empty.path(), "readme.md", "no json here");
    assert_eq!(available_triggers(empty.path(), "Fallback"), vec!["Fallback"]);
}

#[test]
fn test_catalog_errors() {
    let dir = data_dir();
    assert!(matches!(
        Catalog::load(dir.path(), "Does Not Exist"),
        Err(CatalogError::NotFound(_))
    ));
    assert!(matches!(
        Catalog::load(dir.path(), "Broken File"),
        Err(CatalogError::Parse { .. })
    ));
    let growth = Catalog::load(dir.path(), "Accelerated Growth").unwrap();
    assert_eq!(growth.len(), 3);
    assert_eq!(growth.file_base(), "accelerated_growth");
}

#[test]
fn test_full_session_flow() {
    let dir = data_dir();
    let mut session = session(dir.path());

    // Steps that need a submission fail cleanly
    assert!(matches!(session.run_simulation(), Err(SessionError::NotSubmitted)));

    let submission = session.submit();
    assert_eq!(submission.scores.connectivity, 3.0);
    assert_eq!(submission.selections.len(), 9);

    assert!(matches!(session.matched(), Err(SessionError::NoCatalog)));

    let catalog = session.select_trigger("Accelerated Growth").unwrap();
    assert_eq!(catalog.len(), 3);

    let (index, distance_sq, _) = session.matched().unwrap();
    assert_eq!(index, 1);
    assert_eq!(distance_sq, 0.0);

    // Before simulating, the report has no strategies
    let report = session.report().unwrap();
    assert!(report.typical.available);
    assert!(report.doubled.available);
    assert_eq!(report.doubled.caption.as_deref(), Some("Two loosely coupled pairs"));
    assert!(report.strategies.is_empty());
    assert!(matches!(session.outcomes(), Err(SessionError::NotSimulated)));

    let run = session.run_simulation().unwrap();
    assert_eq!(run.item_index, 1);
    assert_eq!(run.outcomes.len(), 2);

    let connector = &run.outcomes[0];
    assert_eq!(connector.section.artifact, "resulting_accelerated_growth_0_Introduce_a_connector");
    let summary = connector.section.summary.unwrap();
    assert_eq!(summary.nodes, 3);
    assert_eq!(summary.new_nodes, 1);
    assert_eq!(summary.edges, 2);
    assert_eq!(summary.new_edges, 1);
    assert_eq!(connector.section.skipped.nodes, 1);
    assert_eq!(connector.section.skipped.edges, 1);

    let graph = connector.section.graph.as_ref().unwrap();
    let c = graph.nodes.iter().find(|n| n.id == "C").unwrap();
    assert_eq!(c.provenance, Provenance::New);
    assert_eq!(c.style.color, "#32CD32");
    let reversed = graph.edges.iter().find(|e| e.source == "B" && e.target == "A").unwrap();
    assert_eq!(reversed.provenance, Provenance::Existing);

    let nothing = &run.outcomes[1];
    assert!(!nothing.section.available);
    assert_eq!(nothing.description, "No specific change description available.");

    assert_eq!(session.report().unwrap().strategies.len(), 2);
}

#[test]
fn test_submit_clears_previous_run() {
    let dir = data_dir();
    let mut session = session(dir.path());
    session.submit();
    session.select_trigger("Accelerated Growth").unwrap();
    session.run_simulation().unwrap();
    assert!(session.simulation().is_some());

    session.set_answers("5,5,5,5,5,5,5,5,5".parse::<Answers>().unwrap());
    session.submit();
    assert!(session.simulation().is_none());

    let (index, _, _) = session.matched().unwrap();
    assert_eq!(index, 2);
}

#[test]
fn test_equidistant_records_pick_first() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "tie.json",
        &json!([
            {"scores": {"centrality": 1.0, "connectivity": 1.0, "clustering": 1.0}},
            {"scores": {"centrality": 5.0, "connectivity": 5.0, "clustering": 5.0}}
        ])
        .to_string(),
    );
    let mut session = session(dir.path());
    session.submit();
    session.select_trigger("Tie").unwrap();
    let (index, distance_sq, _) = session.matched().unwrap();
    assert_eq!(index, 0);
    assert_eq!(distance_sq, 12.0);
}

#[test]
fn test_empty_catalog_has_no_match() {
    let dir = data_dir();
    let mut session = session(dir.path());
    session.submit();
    session.select_trigger("Merger").unwrap();
    assert!(matches!(session.matched(), Err(SessionError::NoMatch)));
    assert!(matches!(session.run_simulation(), Err(SessionError::NoMatch)));
    assert!(session.simulation().is_none());
}

#[test]
fn test_failed_load_clears_catalog() {
    let dir = data_dir();
    let mut session = session(dir.path());
    session.submit();
    session.select_trigger("Accelerated Growth").unwrap();
    session.run_simulation().unwrap();

    let err = session.select_trigger("Broken File").unwrap_err();
    assert!(matches!(err, SessionError::Catalog { .. }));
    assert!(session.catalog().is_none());
    assert!(session.simulation().is_none());
}

#[test]
fn test_unknown_trigger_falls_back_to_first() {
    let dir = data_dir();
    let mut session = session(dir.path());
    let catalog = session.select_trigger("Hostile Takeover").unwrap();
    assert_eq!(catalog.trigger, "Accelerated Growth");
}

#[test]
fn test_preferred_trigger_follows_config_then_selection() {
    let dir = data_dir();
    let config = OrgnetConfig {
        data_dir: dir.path().to_path_buf(),
        default_trigger: "Merger".to_string(),
        ..OrgnetConfig::default()
    };
    let mut session = AssessmentSession::new(config);
    assert_eq!(session.preferred_trigger(), "Merger");

    let preferred = session.preferred_trigger();
    assert_eq!(session.select_trigger(&preferred).unwrap().trigger, "Merger");

    session.select_trigger("Accelerated Growth").unwrap();
    assert_eq!(session.preferred_trigger(), "Accelerated Growth");

    session.reset();
    assert_eq!(session.preferred_trigger(), "Merger");
}

#[test]
fn test_reset_restores_defaults() {
    let dir = data_dir();
    let mut session = session(dir.path());
    session.set_answer(Question::KnowledgeSharing, Likert::VeryHigh);
    session.submit();
    session.select_trigger("Accelerated Growth").unwrap();
    session.run_simulation().unwrap();

    session.reset();
    assert_eq!(session.answers(), &Answers::default());
    assert!(session.submission().is_none());
    assert!(session.catalog().is_none());
    assert!(session.simulation().is_none());
    assert_eq!(session.data_dir(), dir.path());
}

#[test]
fn test_render_writes_available_graphs() {
    let dir = data_dir();
    let out = TempDir::new().unwrap();
    let mut session = session(dir.path());
    session.submit();
    session.select_trigger("Accelerated Growth").unwrap();
    session.run_simulation().unwrap();

    let written = session.render(out.path(), &[RenderFormat::Dot, RenderFormat::Html]).unwrap();
    // typical + doubled + one strategy with a graph, two formats each
    assert_eq!(written.len(), 6);
    assert!(out.path().join("typical_main_accelerated_growth.dot").exists());
    assert!(out.path().join("doubled_typical_accelerated_growth.html").exists());

    let dot = fs::read_to_string(
        out.path().join("resulting_accelerated_growth_0_Introduce_a_connector.dot"),
    )
    .unwrap();
    assert!(dot.contains(r##""B" -- "C" [color="#0000FF", penwidth=2.5];"##));
}

#[test]
fn test_report_serializes_without_graph_payload() {
    let dir = data_dir();
    let mut session = session(dir.path());
    session.submit();
    session.select_trigger("Accelerated Growth").unwrap();
    session.run_simulation().unwrap();

    let value = serde_json::to_value(session.report().unwrap()).unwrap();
    assert_eq!(value["trigger"], "Accelerated Growth");
    assert_eq!(value["matched_index"], 1);
    assert_eq!(value["typical"]["summary"]["nodes"], 2);
    assert!(value["typical"].get("graph").is_none());
    assert_eq!(value["strategies"][0]["name"], "Introduce a connector");
    assert_eq!(value["selections"][0]["level"], "medium");
}
