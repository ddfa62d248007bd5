//! Runtime configuration
//!
//! Every field has a default, so an empty (or absent) YAML file is valid.
//! Command-line flags override values read from file.

use crate::catalog::DEFAULT_TRIGGER;
use crate::style::StyleTable;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// vis-network view options for rendered graphs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewOptions {
    pub width: u32,
    pub height: u32,
    pub stabilization_iterations: u32,
    pub gravitational_constant: f64,
    pub tooltip_delay: u32,
    pub font_size: u32,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            width: 500,
            height: 400,
            stabilization_iterations: 1000,
            gravitational_constant: -3000.0,
            tooltip_delay: 200,
            font_size: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrgnetConfig {
    /// Directory of per-trigger category files
    pub data_dir: PathBuf,
    /// Trigger used when the data directory offers none
    pub default_trigger: String,
    /// Where rendered graph artifacts are written
    pub output_dir: PathBuf,
    pub view: ViewOptions,
    pub styles: StyleTable,
}

impl Default for OrgnetConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("simulation_growth"),
            default_trigger: DEFAULT_TRIGGER.to_string(),
            output_dir: PathBuf::from("orgnet_output"),
            view: ViewOptions::default(),
            styles: StyleTable::default(),
        }
    }
}

impl OrgnetConfig {
    pub fn from_yaml_str(s: &str) -> ConfigResult<Self> {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        debug!("Loading config from {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }
}
