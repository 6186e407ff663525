//! readlint - prose readability linting
//!
//! Parses text into a sentence/word tree, scores every sentence with seven
//! published readability formulas, and flags the sentences that enough of
//! the formulas agree are too hard for a target reader age.
//!
//! # Example
//!
//! ```
//! use readlint::{Pipeline, ReadabilityOptions};
//!
//! let pipeline = Pipeline::new(&ReadabilityOptions::default());
//! let report = pipeline.check("essay.txt", "The cat sat on the mat").unwrap();
//! assert!(report.warnings.is_empty());
//! ```

pub mod cli;
pub mod config;
pub mod detectors;
pub mod formulas;
pub mod models;
pub mod parsers;
pub mod pipeline;
pub mod reporters;
pub mod syllables;
pub mod tree;
pub mod vocabulary;

pub use config::ReadabilityOptions;
pub use models::{Severity, TextFile, Warning, WarningsSummary};
pub use pipeline::{CheckReport, Pipeline};
