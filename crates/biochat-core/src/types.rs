//! Core types for biochat-core.
//!
//! This module defines the values that flow between the pipeline stages: the
//! categorised [`KeywordSet`], the [`SearchResult`] handed to the presentation
//! layer, and the [`ReloadReport`] produced by a knowledge base rebuild.

/// Fixed keyword categories a normalized token can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Especies,
    Regiones,
    Conceptos,
}

impl Category {
    /// All categories in matching priority order.
    pub const ALL: [Category; 3] = [Category::Especies, Category::Regiones, Category::Conceptos];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Especies => "especies",
            Category::Regiones => "regiones",
            Category::Conceptos => "conceptos",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized query tokens partitioned by category.
///
/// `all` holds every token in normalization order; the per-category lists are
/// ordered subsets of it. A token appears in at most one category list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    pub all: Vec<String>,
    pub especies: Vec<String>,
    pub regiones: Vec<String>,
    pub conceptos: Vec<String>,
}

impl KeywordSet {
    /// Tokens for one category.
    pub fn get(&self, category: Category) -> &[String] {
        match category {
            Category::Especies => &self.especies,
            Category::Regiones => &self.regiones,
            Category::Conceptos => &self.conceptos,
        }
    }

    pub(crate) fn push(&mut self, category: Category, token: String) {
        match category {
            Category::Especies => self.especies.push(token),
            Category::Regiones => self.regiones.push(token),
            Category::Conceptos => self.conceptos.push(token),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}

/// Which path of the matcher produced an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnswerKind {
    /// A knowledge base sentence scored above the confidence threshold.
    Match,
    /// No sentence was good enough; the answer is a canned prompt.
    Fallback,
    /// The query was blank or the knowledge base was empty.
    NoInformation,
    /// The query normalized to nothing (only stopwords or punctuation).
    NotUnderstood,
}

impl std::fmt::Display for AnswerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerKind::Match => write!(f, "match"),
            AnswerKind::Fallback => write!(f, "fallback"),
            AnswerKind::NoInformation => write!(f, "no_information"),
            AnswerKind::NotUnderstood => write!(f, "not_understood"),
        }
    }
}

/// Answer text plus a heuristic confidence in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub answer: String,
    pub confidence: f32,
    pub kind: AnswerKind,
}

impl SearchResult {
    pub(crate) fn zero(answer: impl Into<String>, kind: AnswerKind) -> Self {
        Self {
            answer: answer.into(),
            confidence: 0.0,
            kind,
        }
    }

    /// The `(answer, confidence)` pair callers display.
    pub fn into_pair(self) -> (String, f32) {
        (self.answer, self.confidence)
    }
}

/// Outcome of assembling a knowledge base from the backup list and sources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReloadReport {
    /// Sentences in the resulting knowledge base.
    pub sentences: usize,
    /// Candidates returned by sources, before deduplication and filtering.
    pub scraped: usize,
    /// Names of sources whose fetch failed.
    pub failed_sources: Vec<String>,
}
