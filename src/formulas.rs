//! The seven readability formulas
//!
//! Each formula is a pure function from per-sentence counts to its
//! published score: a US grade level (ARI, Coleman–Liau, Gunning fog,
//! Spache), a grade bracket via lookup (Dale–Chall), an ease score
//! (Flesch), or a grade-like index (SMOG). Conversion of those
//! heterogeneous outputs into reader ages lives with the consensus logic,
//! not here.
//!
//! Formulas guard their denominators: counts with zero words or zero
//! sentences score `NaN`, which never compares greater than a target age.

/// Lexical counts for one sentence, in the shape the formulas expect.
///
/// `character` and `letter` carry the same value under the two names the
/// published formulas use for it. `sentence` is always 1 here; the field
/// exists because every formula is defined over arbitrary samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormulaCounts {
    /// Polysyllabic words that are not (heuristically) proper nouns.
    pub complex_polysyllabic_word: usize,
    /// Words of three or more syllables.
    pub polysyllabic_word: usize,
    /// Words absent from the familiar-word list.
    pub unfamiliar_word: usize,
    /// Words absent from the easy-word list.
    pub difficult_word: usize,
    pub syllable: usize,
    pub sentence: usize,
    pub word: usize,
    pub character: usize,
    pub letter: usize,
}

impl FormulaCounts {
    fn words(&self) -> f64 {
        self.word as f64
    }

    fn sentences(&self) -> f64 {
        self.sentence as f64
    }

    fn degenerate(&self) -> bool {
        self.word == 0 || self.sentence == 0
    }
}

/// Automated Readability Index: grade level from characters per word and
/// words per sentence.
pub fn automated_readability(counts: &FormulaCounts) -> f64 {
    if counts.degenerate() {
        return f64::NAN;
    }
    4.71 * (counts.character as f64 / counts.words()) + 0.5 * (counts.words() / counts.sentences())
        - 21.43
}

/// Coleman–Liau index: grade level from letters and sentences per 100
/// words.
pub fn coleman_liau(counts: &FormulaCounts) -> f64 {
    if counts.degenerate() {
        return f64::NAN;
    }
    0.0588 * (100.0 * counts.letter as f64 / counts.words())
        - 0.296 * (100.0 * counts.sentences() / counts.words())
        - 15.8
}

/// Dale–Chall raw score from the share of difficult words and the average
/// sentence length. Scores above the 5% difficult-word bound gain a fixed
/// adjustment.
pub fn dale_chall(counts: &FormulaCounts) -> f64 {
    if counts.degenerate() {
        return f64::NAN;
    }
    let share_of_difficult_words = counts.difficult_word as f64 / counts.words();
    let mut score = 0.1579 * share_of_difficult_words * 100.0
        + 0.0496 * (counts.words() / counts.sentences());
    if share_of_difficult_words > 0.05 {
        score += 3.6365;
    }
    score
}

/// Map a Dale–Chall raw score to its published grade bracket
/// `(lowest, highest)`. The top bracket is open-ended: "college graduate
/// and above" has no highest grade.
pub fn dale_chall_grade_level(score: f64) -> (f64, f64) {
    let floored = score.floor();
    if floored < 5.0 {
        (0.0, 4.0)
    } else if floored < 6.0 {
        (5.0, 6.0)
    } else if floored < 7.0 {
        (7.0, 8.0)
    } else if floored < 8.0 {
        (9.0, 10.0)
    } else if floored < 9.0 {
        (11.0, 12.0)
    } else if floored < 10.0 {
        (13.0, 15.0)
    } else {
        (16.0, f64::INFINITY)
    }
}

/// Flesch reading ease: 0–100, higher is easier.
pub fn flesch(counts: &FormulaCounts) -> f64 {
    if counts.degenerate() {
        return f64::NAN;
    }
    206.835 - 1.015 * (counts.words() / counts.sentences())
        - 84.6 * (counts.syllable as f64 / counts.words())
}

/// Gunning fog index: grade level from sentence length and the share of
/// complex (polysyllabic, non-proper-noun) words.
pub fn gunning_fog(counts: &FormulaCounts) -> f64 {
    if counts.degenerate() {
        return f64::NAN;
    }
    0.4 * (counts.words() / counts.sentences()
        + 100.0 * (counts.complex_polysyllabic_word as f64 / counts.words()))
}

/// SMOG grade: from polysyllabic words normalized to a 30-sentence sample.
pub fn smog(counts: &FormulaCounts) -> f64 {
    if counts.sentence == 0 {
        return f64::NAN;
    }
    3.1291 + 1.043 * (counts.polysyllabic_word as f64 * (30.0 / counts.sentences())).sqrt()
}

/// Spache grade level: from sentence length and the share of unfamiliar
/// words.
pub fn spache(counts: &FormulaCounts) -> f64 {
    if counts.degenerate() {
        return f64::NAN;
    }
    0.659 + 0.121 * (counts.words() / counts.sentences())
        + 0.082 * (100.0 * counts.unfamiliar_word as f64 / counts.words())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    /// Counts for a moderately hard 23-word sentence.
    fn hard() -> FormulaCounts {
        FormulaCounts {
            complex_polysyllabic_word: 2,
            polysyllabic_word: 6,
            unfamiliar_word: 14,
            difficult_word: 12,
            syllable: 41,
            sentence: 1,
            word: 23,
            character: 106,
            letter: 106,
        }
    }

    /// Counts for an ordinary 10-word sentence.
    fn plain() -> FormulaCounts {
        FormulaCounts {
            complex_polysyllabic_word: 1,
            polysyllabic_word: 2,
            unfamiliar_word: 3,
            difficult_word: 2,
            syllable: 14,
            sentence: 1,
            word: 10,
            character: 40,
            letter: 40,
        }
    }

    #[test]
    fn test_automated_readability() {
        assert_close(automated_readability(&hard()), 11.77695652173913);
        assert_close(automated_readability(&plain()), 2.41);
    }

    #[test]
    fn test_coleman_liau() {
        assert_close(coleman_liau(&hard()), 10.012173913043476);
        assert_close(coleman_liau(&plain()), 4.759999999999998);
    }

    #[test]
    fn test_dale_chall() {
        assert_close(dale_chall(&hard()), 13.015560869565219);
        assert_close(dale_chall(&plain()), 7.2905);
    }

    #[test]
    fn test_dale_chall_skips_adjustment_at_bound() {
        // Exactly 5% difficult words does not trigger the adjustment.
        let counts = FormulaCounts {
            difficult_word: 1,
            sentence: 1,
            word: 20,
            ..Default::default()
        };
        assert_close(dale_chall(&counts), 1.7815);
    }

    #[test]
    fn test_dale_chall_grade_level() {
        assert_eq!(dale_chall_grade_level(4.2), (0.0, 4.0));
        assert_eq!(dale_chall_grade_level(5.9), (5.0, 6.0));
        assert_eq!(dale_chall_grade_level(6.57), (7.0, 8.0));
        assert_eq!(dale_chall_grade_level(7.0), (9.0, 10.0));
        assert_eq!(dale_chall_grade_level(8.5), (11.0, 12.0));
        assert_eq!(dale_chall_grade_level(9.99), (13.0, 15.0));
        let (lowest, highest) = dale_chall_grade_level(13.0);
        assert_eq!(lowest, 16.0);
        assert!(highest.is_infinite());
    }

    #[test]
    fn test_flesch() {
        assert_close(flesch(&hard()), 32.681304347826114);
        assert_close(flesch(&plain()), 78.24500000000002);
    }

    #[test]
    fn test_gunning_fog() {
        assert_close(gunning_fog(&hard()), 12.678260869565218);
        assert_close(gunning_fog(&plain()), 8.0);
    }

    #[test]
    fn test_smog() {
        assert_close(smog(&hard()), 17.122413403193683);
        assert_close(smog(&plain()), 11.20814326018867);
    }

    #[test]
    fn test_spache() {
        assert_close(spache(&hard()), 8.433304347826088);
        assert_close(spache(&plain()), 4.329);
    }

    #[test]
    fn test_zero_words_score_nan() {
        let empty = FormulaCounts {
            sentence: 1,
            ..Default::default()
        };
        assert!(automated_readability(&empty).is_nan());
        assert!(coleman_liau(&empty).is_nan());
        assert!(dale_chall(&empty).is_nan());
        assert!(flesch(&empty).is_nan());
        assert!(gunning_fog(&empty).is_nan());
        assert!(spache(&empty).is_nan());
        // SMOG only needs a sentence count.
        assert_close(smog(&empty), 3.1291);
    }
}
