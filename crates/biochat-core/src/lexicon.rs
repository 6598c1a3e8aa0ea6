//! Lexicon: the fixed Spanish word lists behind normalization and keyword
//! extraction.
//!
//! The built-in tables are compile-time perfect-hash sets and maps. A
//! [`Lexicon`] owns a runtime copy so that the `[lexicon]` section of the user
//! config can replace any list without touching the others.

use crate::{config::LexiconConfig, types::Category};
use std::collections::{HashMap, HashSet};

// ---------------------------------------------------------------------------
// Built-in tables
// ---------------------------------------------------------------------------

pub static STOPWORDS: phf::Set<&'static str> = phf::phf_set! {
    "que", "de", "la", "el", "en", "y", "a", "los", "del", "se", "las", "por",
    "un", "para", "con", "no", "una", "su", "al", "lo", "como", "mas", "pero",
    "sus", "le", "ya", "o", "este", "si", "porque", "esta", "entre", "cuando",
    "muy", "sin", "sobre", "tambien", "me", "ha", "todo", "ser", "son", "dos",
    "fue", "habia", "hay", "puede", "todos", "asi", "nos", "ni", "parte",
    "tiene", "eso", "etc", "cual", "cuales", "donde", "quien", "cuyo", "cuyos",
};

/// Synonym expansions. Each value lists the key itself first.
pub static SYNONYMS: phf::Map<&'static str, &'static [&'static str]> = phf::phf_map! {
    "jaguar" => &["jaguar", "pantera", "felino"],
    "condor" => &["condor", "ave", "rapaz"],
    "oso" => &["oso", "jucumari", "andino"],
    "amazonia" => &["amazonia", "amazonico", "selva"],
    "altiplano" => &["altiplano", "andino", "puna"],
    "peligro" => &["peligro", "amenaza", "extincion", "amenazada"],
};

pub const ESPECIES: &[&str] = &["jaguar", "condor", "oso", "paraba", "delfin", "rana", "armadillo"];
pub const REGIONES: &[&str] = &["amazonia", "altiplano", "yungas", "chaco", "andino", "titicaca"];
pub const CONCEPTOS: &[&str] = &["peligro", "extincion", "conservacion", "proteccion", "habitat"];

// ---------------------------------------------------------------------------
// Lexicon
// ---------------------------------------------------------------------------

/// Immutable word lists used by the normalizer and keyword extractor.
#[derive(Debug, Clone)]
pub struct Lexicon {
    stopwords: HashSet<String>,
    synonyms: HashMap<String, Vec<String>>,
    especies: Vec<String>,
    regiones: Vec<String>,
    conceptos: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Lexicon {
    /// The built-in Spanish lexicon.
    pub fn builtin() -> Self {
        Self {
            stopwords: STOPWORDS.iter().map(|s| s.to_string()).collect(),
            synonyms: SYNONYMS
                .entries()
                .map(|(k, v)| (k.to_string(), owned(v)))
                .collect(),
            especies: owned(ESPECIES),
            regiones: owned(REGIONES),
            conceptos: owned(CONCEPTOS),
        }
    }

    /// Built-in lexicon with every list present in `cfg` replaced wholesale.
    /// Entries are lowercased so they compare against normalized tokens.
    pub fn from_config(cfg: &LexiconConfig) -> Self {
        let mut lex = Self::builtin();
        if let Some(words) = &cfg.stopwords {
            lex.stopwords = words.iter().map(|w| w.to_lowercase()).collect();
        }
        if let Some(map) = &cfg.synonyms {
            lex.synonyms = map
                .iter()
                .map(|(k, v)| (k.to_lowercase(), v.iter().map(|w| w.to_lowercase()).collect()))
                .collect();
        }
        if let Some(words) = &cfg.especies {
            lex.especies = lowercased(words);
        }
        if let Some(words) = &cfg.regiones {
            lex.regiones = lowercased(words);
        }
        if let Some(words) = &cfg.conceptos {
            lex.conceptos = lowercased(words);
        }
        lex
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    /// Synonym variants for `token`, if it is a key of the synonym table.
    pub fn synonyms(&self, token: &str) -> Option<&[String]> {
        self.synonyms.get(token).map(Vec::as_slice)
    }

    pub fn terms(&self, category: Category) -> &[String] {
        match category {
            Category::Especies => &self.especies,
            Category::Regiones => &self.regiones,
            Category::Conceptos => &self.conceptos,
        }
    }

    /// First category (in [`Category::ALL`] order) whose list contains `token`.
    pub fn category_of(&self, token: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|&c| self.terms(c).iter().any(|t| t == token))
    }

    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn lowercased(words: &[String]) -> Vec<String> {
    words.iter().map(|w| w.to_lowercase()).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
