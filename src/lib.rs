//! Orgnet: organizational network assessment
//!
//! Scores a nine-question Likert questionnaire about how an organization
//! communicates, finds the pre-computed simulation record nearest to those
//! scores, and renders the record's graphs with additions highlighted.
//!
//! # Pipeline
//!
//! 1. [`questionnaire`]: answers -> (connectivity, clustering, centrality)
//! 2. [`catalog`]: per-trigger JSON files of simulation records
//! 3. nearest match ([`orgnet_match::nearest_by`]), first record wins on ties
//! 4. [`graph`] + [`style`]: validated graphs, diffed against the typical graph
//! 5. [`render`]: Graphviz DOT, vis-network JSON/HTML
//!
//! [`session::AssessmentSession`] threads these steps for one interactive user.
//!
//! ## Example Usage
//!
//! ```rust
//! use orgnet::questionnaire::{aggregate, Answers, Likert, Question};
//!
//! let answers = Answers::new()
//!     .with(Question::CommunicationFrequency, Likert::VeryHigh)
//!     .with(Question::InformationFlow, Likert::VeryHigh)
//!     .with(Question::SpontaneousCommunication, Likert::High);
//!
//! let scores = aggregate(&answers);
//! assert!((scores.connectivity - 14.0 / 3.0).abs() < 1e-9);
//! assert_eq!(scores.clustering, 3.0);
//! ```

#![warn(clippy::all)]

pub mod catalog;
pub mod config;
pub mod graph;
pub mod questionnaire;
pub mod render;
pub mod report;
pub mod session;
pub mod style;

// Re-export main types for convenience
pub use catalog::{Catalog, CatalogError, CatalogResult, SimulationItem, StrategyEntry};
pub use config::{ConfigError, ConfigResult, OrgnetConfig, ViewOptions};
pub use graph::{Graph, GraphEdge, GraphNode};
pub use questionnaire::{aggregate, Answers, Dimension, Likert, Question};
pub use render::{RenderError, RenderFormat, RenderResult, StyledGraph};
pub use report::AssessmentReport;
pub use session::{AssessmentSession, SessionError, SessionResult};
pub use style::StyleTable;

pub use orgnet_match::{DiffSummary, PartialScores, Provenance, ScoreTriple};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
