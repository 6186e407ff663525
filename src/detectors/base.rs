//! Base detector trait and types
//!
//! This module defines the core abstractions for prose checking:
//! - `Detector` trait that all detectors must implement
//! - `DetectorResult` for capturing execution results
//! - `DetectionSummary` for aggregate statistics

use crate::models::TextFile;
use crate::tree::Node;
use anyhow::Result;

/// Result from running a single detector
#[derive(Debug, Clone)]
pub struct DetectorResult {
    /// Name of the detector that produced these results
    pub detector_name: String,
    /// Number of warnings the detector appended to the file
    pub warnings_emitted: usize,
    /// Execution time in milliseconds
    pub duration_ms: u64,
    /// Whether the detector completed successfully
    pub success: bool,
    /// Error message if the detector failed
    pub error: Option<String>,
}

impl DetectorResult {
    /// Create a successful result
    pub fn success(detector_name: String, warnings_emitted: usize, duration_ms: u64) -> Self {
        Self {
            detector_name,
            warnings_emitted,
            duration_ms,
            success: true,
            error: None,
        }
    }

    /// Create a failed result
    pub fn failure(detector_name: String, error: String, duration_ms: u64) -> Self {
        Self {
            detector_name,
            warnings_emitted: 0,
            duration_ms,
            success: false,
            error: Some(error),
        }
    }
}

/// Trait for all prose detectors
///
/// Detectors walk the parsed text tree and append diagnostics to the
/// file's sink. They hold their resolved configuration, never mutable
/// state: a detector instance can be reused across files and calls.
pub trait Detector: Send + Sync {
    /// Unique identifier for this detector (doubles as the rule id)
    fn name(&self) -> &'static str;

    /// Human-readable description of what this detector finds
    fn description(&self) -> &'static str;

    /// Reference documentation for the rule, attached to its warnings
    fn url(&self) -> Option<&'static str> {
        None
    }

    /// Run detection over `tree`, appending warnings to `file`.
    fn detect(&self, tree: &Node, file: &mut TextFile) -> Result<()>;
}

/// Summary statistics from running all detectors
#[derive(Debug, Clone, Default)]
pub struct DetectionSummary {
    /// Total number of detectors run
    pub detectors_run: usize,
    /// Number of detectors that succeeded
    pub detectors_succeeded: usize,
    /// Number of detectors that failed
    pub detectors_failed: usize,
    /// Total warnings across all detectors
    pub total_warnings: usize,
    /// Total execution time in milliseconds
    pub total_duration_ms: u64,
}

impl DetectionSummary {
    /// Update summary with a detector result
    pub fn add_result(&mut self, result: &DetectorResult) {
        self.detectors_run += 1;
        self.total_duration_ms += result.duration_ms;

        if result.success {
            self.detectors_succeeded += 1;
            self.total_warnings += result.warnings_emitted;
        } else {
            self.detectors_failed += 1;
        }
    }
}
