//! Normalizer: turns a raw user query into the cleaned, stopword-filtered,
//! synonym-expanded token string the scorer works on.
//!
//! Steps, in order: lowercase → punctuation to spaces → collapse whitespace →
//! split → drop stopwords and tokens of fewer than 3 characters → append
//! synonym variants → ordered dedup → join with single spaces.

use crate::lexicon::Lexicon;
use regex::Regex;
use std::{collections::HashSet, sync::Arc};

/// Anything that is not a word character, whitespace or a Spanish accented
/// vowel / ñ becomes a space.
const PUNCTUATION_PATTERN: &str = r"[^\w\sáéíóúñ]";
const WHITESPACE_PATTERN: &str = r"\s+";

/// Tokens must be longer than this many characters.
const MIN_TOKEN_CHARS: usize = 2;

#[derive(Debug, Clone)]
pub struct Normalizer {
    lexicon: Arc<Lexicon>,
    punctuation: Regex,
    whitespace: Regex,
}

impl Normalizer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            lexicon,
            punctuation: Regex::new(PUNCTUATION_PATTERN).expect("punctuation pattern must compile"),
            whitespace: Regex::new(WHITESPACE_PATTERN).expect("whitespace pattern must compile"),
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Normalized query as a space-joined token string. Empty input (or input
    /// made only of stopwords and punctuation) yields `""`.
    pub fn clean_query(&self, query: &str) -> String {
        self.tokens(query).join(" ")
    }

    /// Normalized query tokens, deduplicated in first-occurrence order.
    pub fn tokens(&self, query: &str) -> Vec<String> {
        if query.is_empty() {
            return Vec::new();
        }

        let lowered = query.trim().to_lowercase();
        let stripped = self.punctuation.replace_all(&lowered, " ");
        let collapsed = self.whitespace.replace_all(&stripped, " ");

        let mut expanded: Vec<&str> = Vec::new();
        for word in collapsed
            .split_whitespace()
            .filter(|w| w.chars().count() > MIN_TOKEN_CHARS && !self.lexicon.is_stopword(w))
        {
            expanded.push(word);
            if let Some(variants) = self.lexicon.synonyms(word) {
                expanded.extend(variants.iter().map(String::as_str));
            }
        }

        let mut seen = HashSet::with_capacity(expanded.len());
        expanded
            .into_iter()
            .filter(|w| seen.insert(*w))
            .map(str::to_string)
            .collect()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(Arc::new(Lexicon::builtin()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
