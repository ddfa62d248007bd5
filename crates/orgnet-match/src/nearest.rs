//! Nearest-score selection
//!
//! Linear scan for the candidate whose score triple minimizes the squared
//! Euclidean distance to a query. Catalogs hold at most a few dozen records,
//! so no spatial index is involved.

use super::common::{PartialScores, ScoreTriple};

/// The winning candidate of a nearest-score scan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestMatch<'a, T> {
    /// Position of the winner in the input slice
    pub index: usize,
    /// Squared distance between the winner's scores and the query
    pub distance_sq: f64,
    pub item: &'a T,
}

/// Find the candidate nearest to `query`.
///
/// `scores_of` extracts each candidate's (possibly incomplete) scores; missing
/// fields resolve to [`crate::MISSING_SCORE_SENTINEL`]. Returns `None` for an
/// empty slice.
///
/// Ties keep the first candidate encountered: a later candidate must be
/// strictly closer to replace the current best.
pub fn nearest_by<'a, T, F>(
    candidates: &'a [T],
    query: &ScoreTriple,
    mut scores_of: F,
) -> Option<NearestMatch<'a, T>>
where
    F: FnMut(&T) -> PartialScores,
{
    let mut best: Option<NearestMatch<'a, T>> = None;

    for (index, item) in candidates.iter().enumerate() {
        let distance_sq = scores_of(item).resolve().distance_sq(query);

        let closer = match &best {
            None => true,
            // NaN never wins against a finite distance; a NaN incumbent loses to anything finite
            Some(current) => {
                distance_sq < current.distance_sq
                    || (current.distance_sq.is_nan() && !distance_sq.is_nan())
            }
        };

        if closer {
            best = Some(NearestMatch {
                index,
                distance_sq,
                item,
            });
        }
    }

    best
}
