//! Test builders for engines, knowledge bases and sentence sources.
//!
//! These panic on invalid input rather than returning `Result`.

use biochat_core::{
    config::SearchConfig, KnowledgeBase, Lexicon, SearchEngine, SentenceSource, SourceError,
};

// ---------------------------------------------------------------------------
// Sources
// ---------------------------------------------------------------------------

/// A source that always returns the same sentences.
pub struct StaticSource {
    pub name: String,
    pub sentences: Vec<String>,
}

impl StaticSource {
    pub fn new(name: &str, sentences: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            sentences: sentences.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl SentenceSource for StaticSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch_candidate_sentences(&self) -> Result<Vec<String>, SourceError> {
        Ok(self.sentences.clone())
    }
}

/// A source that always fails, like an unreachable site.
pub struct FailingSource(pub &'static str);

impl SentenceSource for FailingSource {
    fn name(&self) -> &str {
        self.0
    }

    fn fetch_candidate_sentences(&self) -> Result<Vec<String>, SourceError> {
        Err(SourceError::Network(format!("{} unreachable", self.0)))
    }
}

// ---------------------------------------------------------------------------
// EngineBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`SearchEngine`] fixtures.
///
/// ```rust
/// let engine = EngineBuilder::new()
///     .sentences(&[JAGUAR_SENTENCE])
///     .build();
/// ```
#[derive(Default)]
pub struct EngineBuilder {
    config: SearchConfig,
    lexicon: Option<Lexicon>,
    sentences: Option<Vec<String>>,
    sources: Vec<Box<dyn SentenceSource>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    /// Start from exactly these sentences instead of assembling the base.
    pub fn sentences(mut self, sentences: &[&str]) -> Self {
        self.sentences = Some(sentences.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn source(mut self, source: impl SentenceSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn build(self) -> SearchEngine {
        let lexicon = self.lexicon.unwrap_or_default();
        match self.sentences {
            Some(sentences) => SearchEngine::with_knowledge_base(
                self.config,
                lexicon,
                self.sources,
                KnowledgeBase::from_sentences(sentences),
            ),
            None => SearchEngine::new(self.config, lexicon, self.sources),
        }
    }
}

/// Engine over the backup corpus only.
pub fn backup_engine() -> SearchEngine {
    EngineBuilder::new().build()
}

/// Engine whose base is the single jaguar sentence.
pub fn jaguar_engine() -> SearchEngine {
    EngineBuilder::new()
        .sentences(&[crate::common::JAGUAR_SENTENCE])
        .build()
}
