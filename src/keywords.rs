//! Keyword extraction for notes: word tokens longer than 3 characters,
//! minus a short stop-list, lowercased, in original order. Duplicates are
//! kept on purpose so repeated terms keep their weight downstream.

use once_cell::sync::Lazy;
use regex::Regex;

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\b").expect("valid word regex"));

const STOP_WORDS: [&str; 4] = ["have", "that", "with", "this"];

pub fn extract_keywords(text: &str) -> Vec<String> {
    WORD_RE
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|word| word.chars().count() > 3)
        .map(|word| word.to_lowercase())
        .filter(|word| !STOP_WORDS.contains(&word.as_str()))
        .collect()
}
