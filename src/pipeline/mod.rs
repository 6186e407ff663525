//! Text checking pipeline
//!
//! Orchestrates the full analysis pipeline:
//! 1. Parse text into a sentence/word tree
//! 2. Run the registered detectors over the tree
//! 3. Collect warnings into a report

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ReadabilityOptions;
use crate::detectors::{default_detectors, DetectorEngine};
use crate::models::{TextFile, Warning, WarningsSummary};
use crate::parsers;

/// Full checking pipeline: parse, detect, report.
///
/// A pipeline is immutable after construction and holds no per-run state;
/// checking different texts through one pipeline, in any order or from
/// multiple threads, yields independent reports.
pub struct Pipeline {
    engine: DetectorEngine,
}

impl Pipeline {
    /// Create a pipeline running the default detectors with `options`.
    pub fn new(options: &ReadabilityOptions) -> Self {
        let mut engine = DetectorEngine::new();
        for detector in default_detectors(options) {
            engine = engine.detector(detector);
        }
        Self { engine }
    }

    /// Check one piece of text, identified by `name` in the report.
    pub fn check(&self, name: &str, contents: &str) -> Result<CheckReport> {
        let tree = parsers::parse(contents);
        let mut file = TextFile::new(name, contents);

        let summary = self.engine.run(&tree, &mut file)?;
        debug!(
            file = name,
            detectors = summary.detectors_run,
            warnings = summary.total_warnings,
            duration_ms = summary.total_duration_ms,
            "check finished"
        );

        let warnings = file.into_messages();
        let summary = WarningsSummary::from_warnings(&warnings);
        Ok(CheckReport {
            name: name.to_string(),
            warnings,
            summary,
        })
    }
}

/// Outcome of checking a single file or input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    pub name: String,
    pub warnings: Vec<Warning>,
    pub summary: WarningsSummary,
}

impl CheckReport {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
