//! Prose detectors
//!
//! This module provides the detector framework and implementations for
//! finding hard-to-read prose in parsed text.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                    DetectorEngine                       │
//! │  - Registers detectors                                  │
//! │  - Runs them in order over the parsed tree              │
//! │  - Collects per-detector timing and results             │
//! └─────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                    Detector Trait                       │
//! │  - name(): Unique identifier / rule id                  │
//! │  - description(): Human-readable description            │
//! │  - detect(tree, file): Append warnings to the sink      │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Detectors are immutable after construction and keep no state between
//! sentences or files, so one instance can serve any number of checks.

mod base;
mod engine;

mod readability;

pub use base::{DetectionSummary, Detector, DetectorResult};
pub use engine::DetectorEngine;
pub use readability::ReadabilityDetector;

use crate::config::ReadabilityOptions;
use std::sync::Arc;

/// Build the default detector set for the given options.
pub fn default_detectors(options: &ReadabilityOptions) -> Vec<Arc<dyn Detector>> {
    vec![Arc::new(ReadabilityDetector::new(options))]
}
