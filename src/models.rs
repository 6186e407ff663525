//! Core data models for readlint
//!
//! These models are used throughout the codebase for representing
//! checked files, warnings, and analysis results.

use crate::tree::Span;
use serde::{Deserialize, Serialize};

/// Generate a deterministic warning ID based on content hash.
///
/// This ensures warnings have stable IDs across runs, enabling:
/// - Tracking warnings over time
/// - Suppression by ID in config files
/// - Reliable deduplication
///
/// The ID is a 16-character hex string derived from hashing the source,
/// rule, location, and message of the warning.
pub fn deterministic_warning_id(
    source: &str,
    rule_id: &str,
    line: usize,
    column: usize,
    message: &str,
) -> String {
    // MD5 keeps the ID stable across Rust versions; DefaultHasher does not.
    let input = format!("{source}\n{rule_id}\n{line}\n{column}\n{message}");
    let digest = md5::compute(input.as_bytes());
    format!("{:x}", digest)[..16].to_string()
}

/// Severity levels for warnings
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    #[default]
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single diagnostic attached to a span of checked text.
///
/// `expected` is the list of suggested replacements; an empty list means
/// the rule offers no automatic fix. `confidence` and `confidence_label`
/// are set by rules that score agreement between several signals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Warning {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub rule_id: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub span: Option<Span>,
    #[serde(default)]
    pub actual: Option<String>,
    #[serde(default)]
    pub expected: Vec<String>,
    /// Agreement ratio from 0.0 to 1.0 (set by consensus-based rules)
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub confidence_label: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// A piece of text being checked, together with the diagnostics collected
/// against it. Detectors append warnings; they never remove or reorder
/// them.
#[derive(Debug, Clone)]
pub struct TextFile {
    /// Display name ("<stdin>" when piped)
    name: String,
    contents: String,
    messages: Vec<Warning>,
}

impl TextFile {
    pub fn new(name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: contents.into(),
            messages: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Register a new warning and return a handle to it so the caller can
    /// attach rule-specific fields (`actual`, `expected`, `confidence`,
    /// `url`).
    pub fn warn(
        &mut self,
        message: impl Into<String>,
        span: Option<Span>,
        rule_id: &str,
        source: &str,
    ) -> &mut Warning {
        let message = message.into();
        let (line, column) = span
            .map(|s| (s.start.line, s.start.column))
            .unwrap_or((0, 0));
        self.messages.push(Warning {
            id: deterministic_warning_id(source, rule_id, line, column, &message),
            rule_id: rule_id.to_string(),
            source: source.to_string(),
            severity: Severity::Warning,
            message,
            span,
            ..Default::default()
        });
        self.messages.last_mut().expect("just pushed")
    }

    pub fn messages(&self) -> &[Warning] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<Warning> {
        self.messages
    }
}

/// Summary of warnings by severity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningsSummary {
    pub info: usize,
    pub warnings: usize,
    pub errors: usize,
    pub total: usize,
}

impl WarningsSummary {
    pub fn from_warnings(warnings: &[Warning]) -> Self {
        let mut summary = Self::default();
        for w in warnings {
            match w.severity {
                Severity::Info => summary.info += 1,
                Severity::Warning => summary.warnings += 1,
                Severity::Error => summary.errors += 1,
            }
            summary.total += 1;
        }
        summary
    }
}
