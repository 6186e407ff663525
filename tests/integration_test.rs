//! Integration tests for the readlint pipeline
//!
//! These tests drive the public library API end to end to verify:
//! - Scoring scenarios across ages, thresholds, and word-count gates
//! - Warning payloads (message, span, confidence, label)
//! - JSON output format is valid and complete
//! - Determinism across repeated runs

use readlint::reporters;
use readlint::{CheckReport, Pipeline, ReadabilityOptions};

/// The well-known hard sentence: three lines, one sentence, 23 words.
const OBERON: &str = "Oberon, also designated Uranus IV, is the outermost \nmajor moon of the planet Uranus and quite large\nand massive for a Uranian moon.\n";

const EASY: &str = "The cat sat on the mat";

/// Check `text` with `options` and return the report.
fn check(text: &str, options: ReadabilityOptions) -> CheckReport {
    Pipeline::new(&options)
        .check("test.txt", text)
        .expect("check should succeed")
}

fn options(age: Option<f64>, threshold: Option<f64>, min_words: Option<usize>) -> ReadabilityOptions {
    ReadabilityOptions {
        age,
        threshold,
        min_words,
    }
}

// ============================================================================
// Scenario matrix
// ============================================================================

#[test]
fn test_easy_sentence_produces_no_warnings() {
    let report = check(EASY, ReadabilityOptions::default());
    assert!(
        report.warnings.is_empty(),
        "easy prose should pass, got: {:?}",
        report.warnings.iter().map(|w| &w.message).collect::<Vec<_>>()
    );
}

#[test]
fn test_hard_sentence_warns_at_four_of_seven() {
    let report = check(OBERON, ReadabilityOptions::default());
    assert_eq!(report.warnings.len(), 1);

    let warning = &report.warnings[0];
    assert_eq!(
        warning.message,
        "Unexpected hard to read sentence, according to 4 out of 7 algorithms"
    );
    assert_eq!(warning.confidence_label.as_deref(), Some("4/7"));
    assert_eq!(warning.confidence, Some(4.0 / 7.0));
    assert_eq!(warning.rule_id, "readability");
    assert_eq!(warning.source, "readlint");
    assert_eq!(warning.span.expect("span").to_string(), "1:1-3:32");
    assert_eq!(
        warning.actual.as_deref(),
        Some("Oberon, also designated Uranus IV, is the outermost \nmajor moon of the planet Uranus and quite large\nand massive for a Uranian moon.")
    );
    assert!(warning.expected.is_empty());
    assert!(warning.url.is_some());
}

#[test]
fn test_raised_threshold_suppresses_warning() {
    let report = check(OBERON, options(None, Some(5.0 / 7.0), None));
    assert!(report.warnings.is_empty());
}

#[test]
fn test_lower_age_warns_at_five_of_seven() {
    let report = check(OBERON, options(Some(14.0), None, None));
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].confidence_label.as_deref(), Some("5/7"));
}

#[test]
fn test_higher_age_suppresses_warning() {
    let report = check(OBERON, options(Some(18.0), None, None));
    assert!(report.warnings.is_empty());
}

#[test]
fn test_single_word_sentence_is_gated_by_default() {
    let report = check("Honorificabilitudinitatibus.", ReadabilityOptions::default());
    assert!(report.warnings.is_empty());
}

#[test]
fn test_min_words_zero_scores_everything() {
    let report = check("Honorificabilitudinitatibus.", options(None, None, Some(0)));
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].confidence_label.as_deref(), Some("4/7"));
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_sentences_below_min_words_are_never_scored() {
    // Five hard words, but the gate is above the sentence length.
    let report = check(
        "Honorificabilitudinitatibus notwithstanding, circumlocution flourishes.",
        options(None, None, Some(10)),
    );
    assert!(report.warnings.is_empty());
}

#[test]
fn test_raising_age_never_raises_fail_count() {
    let mut previous_fails = usize::MAX;
    for age in [6.0, 10.0, 14.0, 16.0, 18.0, 25.0] {
        // Threshold 1/7 so any failing formula produces a warning to read
        // the fail count from.
        let report = check(OBERON, options(Some(age), Some(1.0 / 7.0), None));
        let fails = match report.warnings.first() {
            Some(warning) => {
                let label = warning.confidence_label.as_deref().expect("label");
                label
                    .split('/')
                    .next()
                    .expect("numerator")
                    .parse::<usize>()
                    .expect("count")
            }
            None => 0,
        };
        assert!(
            fails <= previous_fails,
            "fail count rose from {previous_fails} to {fails} at age {age}"
        );
        previous_fails = fails;
    }
}

#[test]
fn test_raising_threshold_never_adds_warnings() {
    let mut previously_warned = true;
    for numerator in 1..=7 {
        let threshold = numerator as f64 / 7.0;
        let report = check(OBERON, options(None, Some(threshold), None));
        let warned = !report.warnings.is_empty();
        assert!(
            warned <= previously_warned,
            "warning appeared when threshold rose to {numerator}/7"
        );
        previously_warned = warned;
    }
}

#[test]
fn test_confidence_is_always_a_seventh() {
    let texts = [
        EASY,
        OBERON,
        "Honorificabilitudinitatibus.",
        "Reading is one of the great pleasures available to everyone.",
    ];
    for text in texts {
        let report = check(text, options(Some(10.0), Some(1.0 / 7.0), Some(0)));
        for warning in &report.warnings {
            let confidence = warning.confidence.expect("confidence");
            let scaled = confidence * 7.0;
            assert!(
                (scaled - scaled.round()).abs() < 1e-9,
                "confidence {confidence} is not k/7"
            );
            assert!((0.0..=1.0).contains(&confidence));
        }
    }
}

#[test]
fn test_repeated_runs_are_identical() {
    let pipeline = Pipeline::new(&ReadabilityOptions::default());
    let first = pipeline.check("a.txt", OBERON).expect("check");
    let second = pipeline.check("a.txt", OBERON).expect("check");

    assert_eq!(first.warnings, second.warnings);
    assert_eq!(
        serde_json::to_string(&first).expect("json"),
        serde_json::to_string(&second).expect("json")
    );
}

#[test]
fn test_multiple_sentences_warn_independently() {
    let text = format!("{EASY}. {OBERON}");
    let report = check(&text, ReadabilityOptions::default());
    // Only the hard sentence is flagged, exactly once.
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0]
        .actual
        .as_deref()
        .expect("actual")
        .starts_with("Oberon"));
}

// ============================================================================
// Output formats
// ============================================================================

#[test]
fn test_json_report_is_valid_and_complete() {
    let report = check(OBERON, ReadabilityOptions::default());
    let rendered = reporters::report(&[report], "json").expect("render");
    let parsed: serde_json::Value = serde_json::from_str(&rendered).expect("valid JSON");

    let warning = &parsed[0]["warnings"][0];
    assert_eq!(warning["rule_id"], "readability");
    assert_eq!(warning["source"], "readlint");
    assert_eq!(warning["confidence_label"], "4/7");
    assert_eq!(warning["span"]["start"]["offset"], 0);
    assert_eq!(warning["span"]["end"]["offset"], 132);
    assert_eq!(parsed[0]["summary"]["warnings"], 1);
}

#[test]
fn test_text_report_names_location_and_label() {
    let report = check(OBERON, ReadabilityOptions::default());
    let rendered = reporters::report(&[report], "text").expect("render");
    assert!(rendered.contains("1:1-3:32"));
    assert!(rendered.contains("[4/7]"));
    assert!(rendered.contains("hard to read"));
}

#[test]
fn test_unknown_format_is_rejected() {
    let report = check(EASY, ReadabilityOptions::default());
    assert!(reporters::report(&[report], "yaml").is_err());
}
