//! Detector execution engine
//!
//! The DetectorEngine runs every registered detector over a parsed tree in
//! registration order, times each one, and aggregates results. Detection
//! is synchronous and single-threaded: the detectors themselves are pure
//! per-sentence passes, so the engine stays deliberately simple. A failing
//! detector is logged and skipped; it never aborts the run.

use crate::detectors::base::{DetectionSummary, Detector, DetectorResult};
use crate::models::TextFile;
use crate::tree::Node;
use anyhow::Result;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error};

/// Orchestrates prose checks across all registered detectors
#[derive(Default)]
pub struct DetectorEngine {
    detectors: Vec<Arc<dyn Detector>>,
}

impl DetectorEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a detector. Detectors run in registration order.
    pub fn detector(mut self, detector: Arc<dyn Detector>) -> Self {
        self.detectors.push(detector);
        self
    }

    pub fn detector_count(&self) -> usize {
        self.detectors.len()
    }

    /// Run every detector over `tree`, appending warnings to `file`.
    pub fn run(&self, tree: &Node, file: &mut TextFile) -> Result<DetectionSummary> {
        let mut summary = DetectionSummary::default();

        for detector in &self.detectors {
            let before = file.messages().len();
            let start = Instant::now();
            let outcome = detector.detect(tree, file);
            let duration_ms = start.elapsed().as_millis() as u64;

            let result = match outcome {
                Ok(()) => {
                    let emitted = file.messages().len() - before;
                    debug!(
                        detector = detector.name(),
                        warnings = emitted,
                        duration_ms,
                        "detector finished"
                    );
                    DetectorResult::success(detector.name().to_string(), emitted, duration_ms)
                }
                Err(e) => {
                    error!(detector = detector.name(), "detector failed: {e:#}");
                    DetectorResult::failure(detector.name().to_string(), format!("{e:#}"), duration_ms)
                }
            };
            summary.add_result(&result);
        }

        Ok(summary)
    }
}
