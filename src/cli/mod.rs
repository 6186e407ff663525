//! CLI command definitions and handlers

pub(crate) mod check;
mod init;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parse and validate a threshold in (0, 1]
fn parse_threshold(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if !(value > 0.0 && value <= 1.0) {
        Err("threshold must be in (0, 1]".to_string())
    } else {
        Ok(value)
    }
}

/// readlint - prose readability linting
///
/// Flags sentences that several independent readability formulas agree
/// are too hard for your target reader age.
#[derive(Parser, Debug)]
#[command(name = "readlint")]
#[command(
    version,
    about = "Prose readability linter — flags sentences that independent readability formulas agree are too hard for a target age",
    long_about = "readlint parses text into sentences and words, scores every sentence with \
seven published readability formulas (Dale–Chall, ARI, Coleman–Liau, Flesch, SMOG, \
Gunning fog, Spache), and warns when enough of them agree a sentence overshoots the \
target reader age.\n\n\
Runs fully offline; no data leaves your machine.",
    after_help = "\
Examples:
  readlint check README.md                 Check one file
  readlint check docs/*.md --age 12        Check for younger readers
  readlint check - < draft.txt             Check stdin
  readlint check notes.txt --format json   JSON output for scripting
  readlint check ch1.txt --fail-on-warning Exit 1 when anything is flagged (CI mode)
  readlint init                            Write a starter readlint.toml

Documentation: https://github.com/readlint/readlint"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check files (or stdin) for hard-to-read sentences
    Check {
        /// Files to check; use "-" for stdin
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Target reader age
        #[arg(long)]
        age: Option<f64>,

        /// Fraction of the 7 formulas that must agree before warning
        #[arg(long, value_parser = parse_threshold)]
        threshold: Option<f64>,

        /// Skip sentences with fewer words (0 scores everything)
        #[arg(long)]
        min_words: Option<usize>,

        /// Output format: text, json
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
        format: String,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Explicit config file (default: ./readlint.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Exit with code 1 if any warning was emitted (CI mode)
        #[arg(long)]
        fail_on_warning: bool,
    },

    /// Initialize a readlint.toml config file with example settings
    Init {
        /// Directory to write the config into
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

/// Dispatch a parsed CLI invocation.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Check {
            paths,
            age,
            threshold,
            min_words,
            format,
            output,
            config,
            fail_on_warning,
        } => check::run(
            &paths,
            age,
            threshold,
            min_words,
            &format,
            output.as_deref(),
            config.as_deref(),
            fail_on_warning,
        ),
        Commands::Init { path } => init::run(&path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_parser_bounds() {
        assert!(parse_threshold("0.5").is_ok());
        assert!(parse_threshold("1").is_ok());
        assert!(parse_threshold("0").is_err());
        assert!(parse_threshold("1.5").is_err());
        assert!(parse_threshold("nope").is_err());
    }

    #[test]
    fn test_cli_parses_check_command() {
        let cli = Cli::try_parse_from([
            "readlint",
            "check",
            "essay.txt",
            "--age",
            "12",
            "--threshold",
            "0.71",
            "--min-words",
            "3",
            "--format",
            "json",
        ])
        .expect("parse");
        match cli.command {
            Commands::Check {
                paths,
                age,
                threshold,
                min_words,
                format,
                ..
            } => {
                assert_eq!(paths, vec![std::path::PathBuf::from("essay.txt")]);
                assert_eq!(age, Some(12.0));
                assert_eq!(threshold, Some(0.71));
                assert_eq!(min_words, Some(3));
                assert_eq!(format, "json");
            }
            _ => panic!("expected check command"),
        }
    }

    #[test]
    fn test_check_requires_a_path() {
        assert!(Cli::try_parse_from(["readlint", "check"]).is_err());
    }
}
