//! Assessment session
//!
//! Explicit state for one user's pass through the questionnaire:
//! answers -> submission -> trigger catalog -> matched record -> simulation.
//! Later stages are cleared whenever an earlier stage changes, and [`reset`]
//! returns the session to its freshly created state.
//!
//! [`reset`]: AssessmentSession::reset

use crate::catalog::{available_triggers, Catalog, CatalogError, SimulationItem};
use crate::config::OrgnetConfig;
use crate::questionnaire::{aggregate, Answers, Likert, Question, Selection};
use crate::render::{RenderError, RenderFormat};
use crate::report::{doubled_section, strategy_outcomes, typical_section, AssessmentReport, StrategyOutcome};
use orgnet_match::ScoreTriple;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Questionnaire has not been submitted")]
    NotSubmitted,

    #[error("No simulation data loaded; select a trigger first")]
    NoCatalog,

    #[error("No matching simulation data found for the calculated scores")]
    NoMatch,

    #[error("Simulation has not been run")]
    NotSimulated,

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Could not load simulation data for '{trigger}': {source}")]
    Catalog {
        trigger: String,
        #[source]
        source: CatalogError,
    },
}

pub type SessionResult<T> = Result<T, SessionError>;

/// Scores and selections captured when the questionnaire is submitted
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub answers: Answers,
    pub scores: ScoreTriple,
    pub selections: Vec<Selection>,
}

/// A matched record pinned by running the simulation
#[derive(Debug, Clone)]
pub struct SimulationRun {
    pub trigger: String,
    pub item_index: usize,
    pub item: SimulationItem,
    pub outcomes: Vec<StrategyOutcome>,
}

pub struct AssessmentSession {
    config: OrgnetConfig,
    answers: Answers,
    submission: Option<Submission>,
    catalog: Option<Catalog>,
    simulation: Option<SimulationRun>,
}

impl AssessmentSession {
    pub fn new(config: OrgnetConfig) -> Self {
        Self {
            config,
            answers: Answers::default(),
            submission: None,
            catalog: None,
            simulation: None,
        }
    }

    pub fn config(&self) -> &OrgnetConfig {
        &self.config
    }

    pub fn data_dir(&self) -> &Path {
        &self.config.data_dir
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn set_answer(&mut self, question: Question, level: Likert) {
        self.answers.set(question, level);
    }

    pub fn set_answers(&mut self, answers: Answers) {
        self.answers = answers;
    }

    /// Score the current answers. Any earlier simulation run is discarded.
    pub fn submit(&mut self) -> &Submission {
        let scores = aggregate(&self.answers);
        info!(
            connectivity = scores.connectivity,
            clustering = scores.clustering,
            centrality = scores.centrality,
            "Questionnaire submitted"
        );
        self.simulation = None;
        self.submission.insert(Submission {
            answers: self.answers,
            scores,
            selections: self.answers.selections(),
        })
    }

    pub fn submission(&self) -> Option<&Submission> {
        self.submission.as_ref()
    }

    pub fn scores(&self) -> SessionResult<ScoreTriple> {
        self.submission
            .as_ref()
            .map(|s| s.scores)
            .ok_or(SessionError::NotSubmitted)
    }

    /// Trigger categories available in the data directory (never empty)
    pub fn triggers(&self) -> Vec<String> {
        available_triggers(&self.config.data_dir, &self.config.default_trigger)
    }

    /// Name of the loaded trigger, if any
    pub fn trigger(&self) -> Option<&str> {
        self.catalog.as_ref().map(|c| c.trigger.as_str())
    }

    /// Trigger to load when the caller names none: the loaded one, else the
    /// configured default
    pub fn preferred_trigger(&self) -> String {
        self.trigger()
            .map(str::to_string)
            .unwrap_or_else(|| self.config.default_trigger.clone())
    }

    /// Load the catalog for `name`, replacing the current one.
    ///
    /// A name not among [`triggers`](Self::triggers) falls back to the first
    /// available trigger. On failure the session holds no catalog.
    pub fn select_trigger(&mut self, name: &str) -> SessionResult<&Catalog> {
        let triggers = self.triggers();
        let trigger = if triggers.iter().any(|t| t == name) {
            name.to_string()
        } else {
            let first = triggers[0].clone();
            if !name.is_empty() {
                warn!("Unknown trigger '{}'; using '{}'", name, first);
            }
            first
        };

        self.simulation = None;
        self.catalog = None;

        match Catalog::load(&self.config.data_dir, &trigger) {
            Ok(catalog) => {
                debug!("Selected trigger '{}'", trigger);
                Ok(&*self.catalog.insert(catalog))
            }
            Err(source) => Err(SessionError::Catalog { trigger, source }),
        }
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    /// Index and distance² of the record nearest to the submitted scores
    pub fn matched(&self) -> SessionResult<(usize, f64, &SimulationItem)> {
        let scores = self.scores()?;
        let catalog = self.catalog.as_ref().ok_or(SessionError::NoCatalog)?;
        let m = catalog.nearest(&scores).ok_or(SessionError::NoMatch)?;
        debug!("Nearest record to {} is #{} (distance² {:.3})", scores, m.index, m.distance_sq);
        Ok((m.index, m.distance_sq, m.item))
    }

    /// Pin the matched record and diff each strategy's resulting graph
    /// against its typical graph. Any failure clears the previous run.
    pub fn run_simulation(&mut self) -> SessionResult<&SimulationRun> {
        let matched = self.matched().map(|(index, _, item)| (index, item.clone()));
        let (item_index, item) = match matched {
            Ok(m) => m,
            Err(e) => {
                self.simulation = None;
                return Err(e);
            }
        };

        let catalog = self.catalog.as_ref().ok_or(SessionError::NoCatalog)?;
        let run = SimulationRun {
            trigger: catalog.trigger.clone(),
            item_index,
            outcomes: strategy_outcomes(&item, &catalog.file_base(), &self.config.styles),
            item,
        };

        info!(
            trigger = %run.trigger,
            item = run.item_index,
            strategies = run.outcomes.len(),
            "Simulation run"
        );
        Ok(&*self.simulation.insert(run))
    }

    pub fn simulation(&self) -> Option<&SimulationRun> {
        self.simulation.as_ref()
    }

    pub fn outcomes(&self) -> SessionResult<&[StrategyOutcome]> {
        self.simulation
            .as_ref()
            .map(|run| run.outcomes.as_slice())
            .ok_or(SessionError::NotSimulated)
    }

    /// Assemble the presentation view of the current state
    pub fn report(&self) -> SessionResult<AssessmentReport> {
        let submission = self.submission.as_ref().ok_or(SessionError::NotSubmitted)?;
        let catalog = self.catalog.as_ref().ok_or(SessionError::NoCatalog)?;
        let (matched_index, distance_sq, item) = self.matched()?;
        let file_base = catalog.file_base();
        let styles = &self.config.styles;

        Ok(AssessmentReport {
            scores: submission.scores,
            selections: submission.selections.clone(),
            trigger: catalog.trigger.clone(),
            matched_index,
            matched_scores: item.scores,
            distance_sq,
            typical: typical_section(item, &file_base, &catalog.trigger, styles),
            doubled: doubled_section(item, &file_base, styles),
            strategies: self
                .simulation
                .as_ref()
                .map(|run| run.outcomes.clone())
                .unwrap_or_default(),
        })
    }

    /// Write every available graph of the current report to `dir`
    pub fn render(&self, dir: &Path, formats: &[RenderFormat]) -> SessionResult<Vec<PathBuf>> {
        let report = self.report()?;
        let mut written = Vec::new();
        for section in report.sections() {
            if let Some(graph) = &section.graph {
                written.extend(graph.write_all(dir, formats, &self.config.view)?);
            }
        }
        Ok(written)
    }

    /// Drop answers, submission, catalog and simulation; keep configuration
    pub fn reset(&mut self) {
        debug!("Session reset");
        self.answers = Answers::default();
        self.submission = None;
        self.catalog = None;
        self.simulation = None;
    }
}
