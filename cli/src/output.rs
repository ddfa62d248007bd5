//! Console output: tables for people, JSON for scripts

use crate::OutputFormat;
use comfy_table::{ContentArrangement, Table};
use orgnet::questionnaire::Selection;
use orgnet::report::GraphSection;
use orgnet::{AssessmentReport, AssessmentSession, Dimension, ScoreTriple};
use serde_json::json;

fn table() -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn score_of(scores: &ScoreTriple, dimension: Dimension) -> f64 {
    match dimension {
        Dimension::Connectivity => scores.connectivity,
        Dimension::Clustering => scores.clustering,
        Dimension::Centrality => scores.centrality,
    }
}

pub fn print_questions(format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let questions: Vec<_> = Dimension::ALL
                .iter()
                .flat_map(|d| d.questions())
                .map(|q| {
                    json!({
                        "question": q,
                        "dimension": q.dimension(),
                        "prompt": q.prompt(),
                        "options": q.options(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&questions)?);
        }
        OutputFormat::Table => {
            for (n, dimension) in Dimension::ALL.iter().enumerate() {
                if n > 0 {
                    println!();
                }
                println!("== {} ==", dimension.heading());
                for q in dimension.questions() {
                    println!("\n{}. {}", q.index() + 1, q.prompt());
                    for (i, label) in q.options().iter().enumerate() {
                        println!("   {}) {}", i + 1, label);
                    }
                }
            }
        }
    }
    Ok(())
}

pub fn print_triggers(triggers: &[String], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(triggers)?),
        OutputFormat::Table => {
            for t in triggers {
                println!("{}", t);
            }
        }
    }
    Ok(())
}

pub fn scores_table(scores: &ScoreTriple) -> Table {
    let mut table = table();
    table.set_header(vec!["Dimension", "Score"]);
    for dimension in Dimension::ALL {
        table.add_row(vec![
            format!("Overall {} Score", dimension),
            format!("{:.2} / 5", score_of(scores, dimension)),
        ]);
    }
    table
}

pub fn selections_table(selections: &[Selection]) -> Table {
    let mut table = table();
    table.set_header(vec!["Question", "Level", "Selected option"]);
    for s in selections {
        table.add_row(vec![s.question.title().to_string(), s.level.to_string(), s.label.clone()]);
    }
    table
}

/// Scores of the current submission; used when no report can be built
pub fn print_scores(session: &AssessmentSession, format: OutputFormat) -> anyhow::Result<()> {
    let submission = match session.submission() {
        Some(s) => s,
        None => return Ok(()),
    };
    match format {
        OutputFormat::Json => {
            let doc = json!({
                "scores": submission.scores,
                "selections": submission.selections,
            });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        OutputFormat::Table => {
            println!("{}", scores_table(&submission.scores));
            println!("{}", selections_table(&submission.selections));
        }
    }
    Ok(())
}

fn summary_cells(section: &GraphSection) -> Vec<String> {
    match (&section.summary, section.available) {
        (Some(s), true) => vec![
            section.artifact.clone(),
            s.nodes.to_string(),
            s.new_nodes.to_string(),
            s.edges.to_string(),
            s.new_edges.to_string(),
            section.skipped.total().to_string(),
        ],
        _ => vec![
            section.artifact.clone(),
            "-".into(),
            "-".into(),
            "-".into(),
            "-".into(),
            "-".into(),
        ],
    }
}

pub fn graphs_table(report: &AssessmentReport) -> Table {
    let mut table = table();
    table.set_header(vec!["Graph", "Nodes", "New nodes", "Edges", "New edges", "Skipped"]);
    table.add_row(summary_cells(&report.typical));
    table.add_row(summary_cells(&report.doubled));
    for s in &report.strategies {
        table.add_row(summary_cells(&s.section));
    }
    table
}

pub fn print_match(report: &AssessmentReport) {
    println!("{}", report.typical.title);
    if !report.typical.available {
        println!("  Typical graph data is not available for this selection.");
    }
    if report.doubled.available {
        if let Some(caption) = &report.doubled.caption {
            println!("{}: {}", report.doubled.title, caption);
        }
    } else {
        println!("  Doubled size typical graph data is not available for this selection.");
    }
}

pub fn print_strategies(report: &AssessmentReport) {
    if report.strategies.is_empty() {
        println!("No simulation output entries to display for the matched item.");
        return;
    }
    for outcome in &report.strategies {
        println!("#### Strategy: {}", outcome.name);
        println!("  Effect on Network: {}", outcome.description);
        if !outcome.section.available {
            println!("  No resulting graph available for this strategy.");
        }
    }
}

pub fn print_report(report: &AssessmentReport, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Table => {
            println!("{}", scores_table(&report.scores));
            println!("{}", selections_table(&report.selections));
            print_match(report);
            print_strategies(report);
            println!("{}", graphs_table(report));
        }
    }
    Ok(())
}
