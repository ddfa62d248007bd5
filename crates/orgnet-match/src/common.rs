//! Shared types for matching and diffing
//!
//! Score triples are the coordinates the nearest-match selector works in;
//! edge keys are the undirected identity the diff classifier compares by.

use std::fmt;

/// Value a missing score field resolves to. Far outside the 1..=5 range, so
/// records with holes in their scores sort behind every complete record.
pub const MISSING_SCORE_SENTINEL: f64 = -1000.0;

/// The three network dimensions, each on the 1.0..=5.0 Likert scale
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreTriple {
    pub connectivity: f64,
    pub clustering: f64,
    pub centrality: f64,
}

impl ScoreTriple {
    pub fn new(connectivity: f64, clustering: f64, centrality: f64) -> Self {
        ScoreTriple {
            connectivity,
            clustering,
            centrality,
        }
    }

    /// Squared Euclidean distance across (centrality, connectivity, clustering)
    pub fn distance_sq(&self, other: &ScoreTriple) -> f64 {
        (self.centrality - other.centrality).powi(2)
            + (self.connectivity - other.connectivity).powi(2)
            + (self.clustering - other.clustering).powi(2)
    }
}

impl fmt::Display for ScoreTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "C={:.1}, N={:.1}, L={:.1}",
            self.centrality, self.connectivity, self.clustering
        )
    }
}

/// Scores as stored on a catalog record, where any field may be absent
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartialScores {
    #[cfg_attr(feature = "serde", serde(default))]
    pub connectivity: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub clustering: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub centrality: Option<f64>,
}

impl PartialScores {
    /// Fill holes with [`MISSING_SCORE_SENTINEL`]
    pub fn resolve(&self) -> ScoreTriple {
        ScoreTriple {
            connectivity: self.connectivity.unwrap_or(MISSING_SCORE_SENTINEL),
            clustering: self.clustering.unwrap_or(MISSING_SCORE_SENTINEL),
            centrality: self.centrality.unwrap_or(MISSING_SCORE_SENTINEL),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.connectivity.is_some() && self.clustering.is_some() && self.centrality.is_some()
    }
}

/// Undirected edge identity: the endpoint ids in sorted order
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey(String, String);

impl EdgeKey {
    pub fn new(source: &str, target: &str) -> Self {
        if source <= target {
            EdgeKey(source.to_string(), target.to_string())
        } else {
            EdgeKey(target.to_string(), source.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_sq() {
        let a = ScoreTriple::new(1.0, 1.0, 1.0);
        let b = ScoreTriple::new(3.0, 3.0, 3.0);
        assert_eq!(a.distance_sq(&b), 12.0);
        assert_eq!(b.distance_sq(&a), 12.0);
        assert_eq!(a.distance_sq(&a), 0.0);
    }

    #[test]
    fn test_resolve_missing_fields() {
        let partial = PartialScores {
            connectivity: Some(2.0),
            clustering: None,
            centrality: Some(4.0),
        };
        let t = partial.resolve();
        assert_eq!(t.connectivity, 2.0);
        assert_eq!(t.clustering, MISSING_SCORE_SENTINEL);
        assert_eq!(t.centrality, 4.0);
        assert!(!partial.is_complete());
    }

    #[test]
    fn test_edge_key_is_undirected() {
        assert_eq!(EdgeKey::new("a", "b"), EdgeKey::new("b", "a"));
        assert_ne!(EdgeKey::new("a", "b"), EdgeKey::new("a", "c"));
        assert_eq!(EdgeKey::new("b", "a"), EdgeKey("a".to_string(), "b".to_string()));
    }

    #[test]
    fn test_score_display() {
        let t = ScoreTriple::new(3.0, 2.5, 4.3);
        assert_eq!(format!("{}", t), "C=4.3, N=3.0, L=2.5");
    }
}
