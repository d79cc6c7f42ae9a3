// src/config.rs

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::views::DEFAULT_TOP_N;

/// Runtime settings, read from an optional YAML file.
///
/// ```yaml
/// data_path: "Compiled data.csv"
/// top_n: 20
/// log_filter: "info"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// CSV file loaded at startup.
    pub data_path: PathBuf,
    /// Row cap for the bar-chart views.
    pub top_n: usize,
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("Compiled data.csv"),
            top_n: DEFAULT_TOP_N,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Parse a YAML config file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config file {:?}", path))?;
        serde_yaml::from_str(&raw).with_context(|| format!("parsing config file {:?}", path))
    }

    /// `path` if given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }
}
