//! Trigger discovery and category file loading

use super::model::SimulationItem;
use orgnet_match::{nearest_by, NearestMatch, ScoreTriple};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Trigger used when the data directory offers none
pub const DEFAULT_TRIGGER: &str = "Accelerated Growth";

/// Errors loading a category file
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Data file not found: {0:?}")]
    NotFound(PathBuf),

    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// `"Accelerated Growth"` -> `"accelerated_growth"`
pub fn filename_from_trigger(trigger: &str) -> String {
    trigger.to_lowercase().replace(' ', "_")
}

/// `"accelerated_growth.json"` -> `"Accelerated Growth"`
pub fn pretty_name_from_filename(filename: &str) -> String {
    let base = filename.strip_suffix(".json").unwrap_or(filename);
    title_case(&base.replace('_', " "))
}

/// Uppercase the first letter of every alphabetic run, lowercase the rest
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

/// Sorted trigger names for the `*.json` files in `dir`.
///
/// Never empty: a missing or unreadable directory, or one without JSON files,
/// yields `[fallback]` and a warning.
pub fn available_triggers(dir: &Path, fallback: &str) -> Vec<String> {
    if !dir.is_dir() {
        warn!("Trigger directory not found: {}; using '{}'", dir.display(), fallback);
        return vec![fallback.to_string()];
    }

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Failed to list trigger files in {}: {}; using '{}'", dir.display(), e, fallback);
            return vec![fallback.to_string()];
        }
    };

    let mut triggers: Vec<String> = entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.file_name().to_string_lossy().into_owned()),
            Err(e) => {
                debug!("Skipping unreadable directory entry: {}", e);
                None
            }
        })
        .filter(|name| name.ends_with(".json"))
        .map(|name| pretty_name_from_filename(&name))
        .collect();
    triggers.sort();

    if triggers.is_empty() {
        warn!("No JSON files found in {}; using '{}'", dir.display(), fallback);
        return vec![fallback.to_string()];
    }

    debug!("Found {} trigger(s) in {}", triggers.len(), dir.display());
    triggers
}

/// The simulation records of one trigger category
#[derive(Debug, Clone)]
pub struct Catalog {
    pub trigger: String,
    pub path: PathBuf,
    pub items: Vec<SimulationItem>,
}

impl Catalog {
    /// Load `<dir>/<filename_from_trigger(trigger)>.json`
    pub fn load(dir: &Path, trigger: &str) -> CatalogResult<Self> {
        let path = dir.join(format!("{}.json", filename_from_trigger(trigger)));
        if !path.exists() {
            warn!("Simulation data file not found: {}", path.display());
            return Err(CatalogError::NotFound(path));
        }

        let content = fs::read_to_string(&path).map_err(|source| {
            warn!("Failed to read {}: {}", path.display(), source);
            CatalogError::Io {
                path: path.clone(),
                source,
            }
        })?;

        let items: Vec<SimulationItem> = serde_json::from_str(&content).map_err(|source| {
            warn!("Failed to parse {}: {}", path.display(), source);
            CatalogError::Parse {
                path: path.clone(),
                source,
            }
        })?;

        info!("Loaded {} simulation record(s) for '{}'", items.len(), trigger);
        let incomplete = items.iter().filter(|item| !item.scores.is_complete()).count();
        if incomplete > 0 {
            warn!(
                "{} record(s) in {} have incomplete scores and rank behind complete ones",
                incomplete,
                path.display()
            );
        }

        Ok(Catalog {
            trigger: trigger.to_string(),
            path,
            items,
        })
    }

    /// File-name base of this catalog's trigger, used to key rendered artifacts
    pub fn file_base(&self) -> String {
        filename_from_trigger(&self.trigger)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Record whose scores are nearest to `scores`; first wins on ties
    pub fn nearest(&self, scores: &ScoreTriple) -> Option<NearestMatch<'_, SimulationItem>> {
        nearest_by(&self.items, scores, |item| item.scores)
    }
}
