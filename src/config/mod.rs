//! Configuration module for readlint
//!
//! This module handles:
//! - Per-rule options (target age, consensus threshold, minimum words)
//! - Project-level configuration (readlint.toml)
//! - Merging CLI flags over file values over defaults

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Name of the project configuration file.
pub const CONFIG_FILE_NAME: &str = "readlint.toml";

/// Errors raised while loading a project configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Options for the readability rule, prior to resolution.
///
/// `age` and `threshold` treat an explicit zero like "unset" and fall back
/// to the defaults; `min_words` distinguishes the two, so `min-words = 0`
/// genuinely disables the short-sentence gate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ReadabilityOptions {
    /// Target reader age (default 16)
    pub age: Option<f64>,
    /// Fraction of the formulas that must agree before warning (default 4/7)
    pub threshold: Option<f64>,
    /// Sentences with fewer words are never scored (default 5)
    pub min_words: Option<usize>,
}

impl ReadabilityOptions {
    /// Overlay `self` on `base`: set fields win, unset fields fall through.
    pub fn merged_over(self, base: Self) -> Self {
        Self {
            age: self.age.or(base.age),
            threshold: self.threshold.or(base.threshold),
            min_words: self.min_words.or(base.min_words),
        }
    }
}

/// Project-level configuration loaded from `readlint.toml`.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ProjectConfig {
    #[serde(default)]
    pub readability: ReadabilityOptions,
}

/// Load `readlint.toml` from `dir`, if present.
///
/// A missing file is not an error; a present-but-malformed file is.
pub fn load_project_config(dir: &Path) -> Result<Option<ProjectConfig>, ConfigError> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.is_file() {
        return Ok(None);
    }
    load_config_file(&path).map(Some)
}

/// Load a configuration file from an exact path.
pub fn load_config_file(path: &Path) -> Result<ProjectConfig, ConfigError> {
    let path_display = path.display().to_string();
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path_display.clone(),
        source,
    })?;
    let config: ProjectConfig = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path_display.clone(),
        source,
    })?;
    debug!("loaded project config from {}", path_display);
    Ok(config)
}
