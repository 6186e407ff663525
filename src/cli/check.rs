//! Check command implementation
//!
//! This command runs the full checking pipeline:
//! 1. Resolve options (CLI flags over readlint.toml over defaults)
//! 2. Read each input (files, or stdin for "-")
//! 3. Parse and run the detectors
//! 4. Render the reports (text, json)

use crate::config::{self, ReadabilityOptions};
use crate::pipeline::{CheckReport, Pipeline};
use crate::reporters;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;
use tracing::info;

#[allow(clippy::too_many_arguments)] // CLI surface, mirrors the flag list
pub fn run(
    paths: &[std::path::PathBuf],
    age: Option<f64>,
    threshold: Option<f64>,
    min_words: Option<usize>,
    format: &str,
    output: Option<&Path>,
    config_path: Option<&Path>,
    fail_on_warning: bool,
) -> Result<()> {
    let options = resolve_options(
        ReadabilityOptions {
            age,
            threshold,
            min_words,
        },
        config_path,
    )?;
    let pipeline = Pipeline::new(&options);

    let mut reports: Vec<CheckReport> = Vec::new();
    for path in paths {
        let (name, contents) = read_input(path)?;
        reports.push(pipeline.check(&name, &contents)?);
    }

    let total_warnings: usize = reports.iter().map(|r| r.warnings.len()).sum();
    info!(
        files = reports.len(),
        warnings = total_warnings,
        "check complete"
    );

    let rendered = reporters::report(&reports, format)?;
    match output {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{rendered}"),
    }

    if fail_on_warning && total_warnings > 0 {
        std::process::exit(1);
    }
    Ok(())
}

/// Merge CLI flags over file configuration over defaults.
fn resolve_options(
    flags: ReadabilityOptions,
    config_path: Option<&Path>,
) -> Result<ReadabilityOptions> {
    let file_options = match config_path {
        Some(path) => {
            config::load_config_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?
                .readability
        }
        None => config::load_project_config(Path::new("."))
            .context("failed to load readlint.toml")?
            .map(|c| c.readability)
            .unwrap_or_default(),
    };
    Ok(flags.merged_over(file_options))
}

/// Read one input, returning its display name and contents.
fn read_input(path: &Path) -> Result<(String, String)> {
    if path.to_str() == Some("-") {
        let mut contents = String::new();
        std::io::stdin()
            .read_to_string(&mut contents)
            .context("failed to read stdin")?;
        Ok(("<stdin>".to_string(), contents))
    } else {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Ok((path.display().to_string(), contents))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_options_prefers_flags_over_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config_file = dir.path().join("readlint.toml");
        std::fs::write(&config_file, "[readability]\nage = 18\nmin-words = 2\n")
            .expect("write config");

        let flags = ReadabilityOptions {
            age: Some(12.0),
            threshold: None,
            min_words: None,
        };
        let options = resolve_options(flags, Some(&config_file)).expect("resolve");
        assert_eq!(options.age, Some(12.0));
        assert_eq!(options.threshold, None);
        assert_eq!(options.min_words, Some(2));
    }

    #[test]
    fn test_resolve_options_missing_explicit_config_fails() {
        let flags = ReadabilityOptions::default();
        assert!(resolve_options(flags, Some(Path::new("/nonexistent/readlint.toml"))).is_err());
    }

    #[test]
    fn test_read_input_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("essay.txt");
        std::fs::write(&file, "The cat sat on the mat").expect("write");

        let (name, contents) = read_input(&file).expect("read");
        assert!(name.ends_with("essay.txt"));
        assert_eq!(contents, "The cat sat on the mat");
    }

    #[test]
    fn test_read_input_missing_file_fails() {
        assert!(read_input(Path::new("/nonexistent/essay.txt")).is_err());
    }
}
