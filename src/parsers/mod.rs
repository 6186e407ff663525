//! Text parsers
//!
//! Turns raw text into the sentence/word tree the detectors consume.
//! English (and other Latin-script, sentence-punctuated) text is the only
//! supported input.

mod english;

pub use english::parse;
