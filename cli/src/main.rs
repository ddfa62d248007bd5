//! Orgnet CLI — network assessment questionnaire
//!
//! One-shot subcommands for scripted use, plus an interactive shell that walks
//! the questionnaire and keeps a single assessment session.

mod output;
mod shell;

use anyhow::Context;
use clap::{Parser, Subcommand};
use orgnet::{Answers, AssessmentSession, OrgnetConfig, RenderFormat, SessionError};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "orgnet", version, about = "Organizational network assessment CLI")]
struct Cli {
    /// Directory of per-trigger simulation JSON files
    #[arg(long, global = true, env = "ORGNET_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// YAML configuration file
    #[arg(long, global = true, env = "ORGNET_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum RenderArg {
    Dot,
    Json,
    Html,
    All,
}

fn render_formats(args: &[RenderArg]) -> Vec<RenderFormat> {
    let mut formats = Vec::new();
    for arg in args {
        let expanded: &[RenderFormat] = match arg {
            RenderArg::Dot => &[RenderFormat::Dot],
            RenderArg::Json => &[RenderFormat::Json],
            RenderArg::Html => &[RenderFormat::Html],
            RenderArg::All => &RenderFormat::ALL,
        };
        for f in expanded {
            if !formats.contains(f) {
                formats.push(*f);
            }
        }
    }
    formats
}

#[derive(Subcommand)]
enum Commands {
    /// Print the questionnaire with option numbers
    Questions,
    /// List simulation trigger categories
    Triggers,
    /// Score answers, match a simulation record and run its strategies
    Assess {
        /// Nine comma-separated levels (1-5) in questionnaire order
        #[arg(long, default_value = "3,3,3,3,3,3,3,3,3")]
        answers: Answers,

        /// Trigger category (defaults to the configured default trigger)
        #[arg(long)]
        trigger: Option<String>,

        /// Write rendered graphs to this directory
        #[arg(long)]
        out: Option<PathBuf>,

        /// Rendered graph formats
        #[arg(long, value_delimiter = ',', default_value = "all")]
        render: Vec<RenderArg>,
    },
    /// Start an interactive questionnaire session
    Shell,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<OrgnetConfig> {
    let mut config = match &cli.config {
        Some(path) => OrgnetConfig::from_yaml_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => OrgnetConfig::default(),
    };
    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }
    debug!(data_dir = %config.data_dir.display(), "Configuration resolved");
    Ok(config)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    let format = cli.format;

    match cli.command {
        Commands::Questions => {
            output::print_questions(format)?;
            Ok(())
        }
        Commands::Triggers => {
            let session = AssessmentSession::new(config);
            output::print_triggers(&session.triggers(), format)?;
            Ok(())
        }
        Commands::Assess {
            answers,
            trigger,
            out,
            render,
        } => run_assess(config, answers, trigger, out, &render_formats(&render), format),
        Commands::Shell => shell::run_shell(AssessmentSession::new(config), format),
    }
}

fn run_assess(
    config: OrgnetConfig,
    answers: Answers,
    trigger: Option<String>,
    out: Option<PathBuf>,
    formats: &[RenderFormat],
    format: OutputFormat,
) -> anyhow::Result<()> {
    let mut session = AssessmentSession::new(config);
    session.set_answers(answers);
    session.submit();

    let trigger = trigger.unwrap_or_else(|| session.preferred_trigger());
    if let Err(e) = session.select_trigger(&trigger) {
        // Scores are still useful without simulation data
        output::print_scores(&session, format)?;
        eprintln!("{}", e);
        return Ok(());
    }

    match session.run_simulation() {
        Ok(_) => {}
        Err(SessionError::NoMatch) => {
            output::print_scores(&session, format)?;
            eprintln!(
                "No matching simulation data found for the calculated scores. \
                 Please try different answers or check the JSON data."
            );
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }

    let report = session.report()?;
    output::print_report(&report, format)?;

    if let Some(dir) = out {
        let written = session.render(&dir, formats)?;
        eprintln!("Wrote {} file(s) to {}", written.len(), dir.display());
    }

    Ok(())
}
