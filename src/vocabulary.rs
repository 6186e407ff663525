//! Embedded vocabulary lists
//!
//! Two curated common-word lists back the vocabulary-based formulas:
//! `data/dale_chall.txt` holds "easy" words a US 4th grader reliably knows
//! (Dale–Chall), `data/spache.txt` holds primer-grade "familiar" words
//! (Spache). Lookups take the already-lowercased word form; absent or
//! unknown words simply never match.

use std::collections::HashSet;
use std::sync::OnceLock;

static DALE_CHALL: OnceLock<HashSet<&'static str>> = OnceLock::new();
static SPACHE: OnceLock<HashSet<&'static str>> = OnceLock::new();

fn dale_chall() -> &'static HashSet<&'static str> {
    DALE_CHALL.get_or_init(|| include_str!("../data/dale_chall.txt").split_whitespace().collect())
}

fn spache() -> &'static HashSet<&'static str> {
    SPACHE.get_or_init(|| include_str!("../data/spache.txt").split_whitespace().collect())
}

/// Whether `caseless` is on the easy-word list used by Dale–Chall.
pub fn is_easy_word(caseless: &str) -> bool {
    dale_chall().contains(caseless)
}

/// Whether `caseless` is on the familiar-word list used by Spache.
pub fn is_familiar_word(caseless: &str) -> bool {
    spache().contains(caseless)
}
