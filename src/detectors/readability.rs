//! Readability detector
//!
//! Scores every sentence with seven published readability formulas
//! (Dale–Chall, Automated Readability Index, Coleman–Liau, Flesch reading
//! ease, SMOG, Gunning fog, Spache), converts each result to an estimated
//! reader age, and warns when enough of them agree the sentence overshoots
//! the target age. One warning per sentence, carrying the agreement ratio
//! and the offending text.
//!
//! Each formula alone is noisy, especially on single sentences; the
//! consensus vote is what makes the rule usable. Sentences below the
//! minimum word count are skipped outright because the formulas are
//! calibrated on longer samples and a single rare word can dominate a
//! short sentence's scores.

use crate::config::ReadabilityOptions;
use crate::detectors::base::Detector;
use crate::formulas::{self, FormulaCounts};
use crate::models::TextFile;
use crate::syllables::syllable_count;
use crate::tree::Node;
use crate::vocabulary::{is_easy_word, is_familiar_word};
use anyhow::Result;
use std::collections::HashSet;

const RULE_ID: &str = "readability";
const SOURCE: &str = "readlint";
const RULE_URL: &str = "https://github.com/readlint/readlint#readability";

const DEFAULT_TARGET_AGE: f64 = 16.0;
const DEFAULT_THRESHOLD: f64 = 4.0 / 7.0;
const DEFAULT_MIN_WORDS: usize = 5;

/// Number of formulas voting on every sentence.
const ALGORITHMS: usize = 7;

/// Flags sentences that several readability formulas agree are too hard
/// for the target reader age.
pub struct ReadabilityDetector {
    target_age: f64,
    threshold: f64,
    min_words: usize,
}

impl ReadabilityDetector {
    /// Resolve options into a detector.
    ///
    /// `age` and `threshold` fall back to their defaults when unset or
    /// zero. `min_words` honors an explicit zero: every sentence is scored,
    /// even one-word sentences.
    pub fn new(options: &ReadabilityOptions) -> Self {
        let target_age = match options.age {
            Some(age) if age != 0.0 => age,
            _ => DEFAULT_TARGET_AGE,
        };
        let threshold = match options.threshold {
            Some(threshold) if threshold != 0.0 => threshold,
            _ => DEFAULT_THRESHOLD,
        };
        let min_words = options.min_words.unwrap_or(DEFAULT_MIN_WORDS);
        Self {
            target_age,
            threshold,
            min_words,
        }
    }

    fn check_sentence(&self, sentence: &Node, file: &mut TextFile) {
        let stats = sentence
            .words()
            .iter()
            .fold(SentenceStatistics::default(), |stats, word| {
                stats.observe(&word.text())
            });

        if stats.word_count < self.min_words {
            return;
        }

        let ages = estimated_reader_ages(&stats.to_counts());
        let fail_count = ages.iter().filter(|age| **age > self.target_age).count();
        let confidence = fail_count as f64 / ALGORITHMS as f64;

        if confidence >= self.threshold {
            let message = if fail_count == ALGORITHMS {
                format!("Unexpected hard to read sentence, according to all {ALGORITHMS} algorithms")
            } else {
                format!(
                    "Unexpected hard to read sentence, according to {fail_count} out of {ALGORITHMS} algorithms"
                )
            };
            let warning = file.warn(message, Some(sentence.span), RULE_ID, SOURCE);
            warning.actual = Some(sentence.text());
            warning.expected = Vec::new();
            warning.confidence = Some(confidence);
            warning.confidence_label = Some(format!("{fail_count}/{ALGORITHMS}"));
            warning.url = Some(RULE_URL.to_string());
        }
    }
}

impl Detector for ReadabilityDetector {
    fn name(&self) -> &'static str {
        RULE_ID
    }

    fn description(&self) -> &'static str {
        "Flags sentences that multiple readability formulas agree are too hard for the target age"
    }

    fn url(&self) -> Option<&'static str> {
        Some(RULE_URL)
    }

    fn detect(&self, tree: &Node, file: &mut TextFile) -> Result<()> {
        for sentence in tree.sentences() {
            self.check_sentence(sentence, file);
        }
        Ok(())
    }
}

/// Lexical statistics accumulated over one sentence's words.
///
/// Built by folding [`SentenceStatistics::observe`] over the words in
/// source order; discarded as soon as the sentence is scored. The
/// distinctness sets are per sentence: a word repeated within a sentence
/// counts toward familiarity at most once.
#[derive(Debug, Default)]
struct SentenceStatistics {
    word_count: usize,
    total_syllables: usize,
    letters: usize,
    polysyllabic_words: usize,
    complex_polysyllabic_words: usize,
    familiar_words: usize,
    easy_words: usize,
    seen_familiar: HashSet<String>,
    seen_easy: HashSet<String>,
}

impl SentenceStatistics {
    fn observe(mut self, value: &str) -> Self {
        let caseless = value.to_lowercase();
        let syllables = syllable_count(value);

        self.word_count += 1;
        self.total_syllables += syllables;
        self.letters += value.chars().count();

        // Count complex words for gunning fog based on whether they have
        // three or more syllables and whether they aren't proper nouns.
        // The last is checked a little simple (does lowercasing change the
        // first character), so this index might be over-eager.
        if syllables >= 3 {
            self.polysyllabic_words += 1;

            if value.chars().next() == caseless.chars().next() {
                self.complex_polysyllabic_words += 1;
            }
        }

        // Find unique familiar words for spache.
        if is_familiar_word(&caseless) && self.seen_familiar.insert(caseless.clone()) {
            self.familiar_words += 1;
        }

        // Find unique easy words for dale-chall.
        if is_easy_word(&caseless) && self.seen_easy.insert(caseless) {
            self.easy_words += 1;
        }

        self
    }

    fn to_counts(&self) -> FormulaCounts {
        FormulaCounts {
            complex_polysyllabic_word: self.complex_polysyllabic_words,
            polysyllabic_word: self.polysyllabic_words,
            unfamiliar_word: self.word_count - self.familiar_words,
            difficult_word: self.word_count - self.easy_words,
            syllable: self.total_syllables,
            sentence: 1,
            word: self.word_count,
            character: self.letters,
            letter: self.letters,
        }
    }
}

/// The seven formula outputs, converted to estimated reader ages, in a
/// fixed order so confidence labels are deterministic.
fn estimated_reader_ages(counts: &FormulaCounts) -> [f64; ALGORITHMS] {
    [
        grade_to_age(formulas::dale_chall_grade_level(formulas::dale_chall(counts)).1),
        grade_to_age(formulas::automated_readability(counts)),
        grade_to_age(formulas::coleman_liau(counts)),
        flesch_to_age(formulas::flesch(counts)),
        smog_to_age(formulas::smog(counts)),
        grade_to_age(formulas::gunning_fog(counts)),
        grade_to_age(formulas::spache(counts)),
    ]
}

// Calculate the typical starting age (on the higher end) when someone
// joins `grade` grade, in the US.
fn grade_to_age(grade: f64) -> f64 {
    (grade + 5.0).round()
}

// Calculate the age relating to a Flesch reading ease result.
fn flesch_to_age(value: f64) -> f64 {
    20.0 - (value / 10.0).floor()
}

// Calculate the age relating to a SMOG result.
fn smog_to_age(value: f64) -> f64 {
    (value.sqrt() + 2.5).ceil()
}
