pub mod common;
pub mod nearest;
pub mod diff;

pub use common::{EdgeKey, PartialScores, ScoreTriple, MISSING_SCORE_SENTINEL};
pub use nearest::{nearest_by, NearestMatch};
pub use diff::{classify, BaselineIndex, DiffResult, DiffSummary, Provenance};
