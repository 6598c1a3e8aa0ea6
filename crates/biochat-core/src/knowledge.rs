//! Knowledge base: the ordered, deduplicated set of candidate answer
//! sentences.
//!
//! The base is assembled from the fixed [`BACKUP_SENTENCES`] plus whatever
//! the registered [`SentenceSource`]s return. Source failures are logged and
//! skipped; the backup list is always included, so assembly cannot fail.

use crate::{error::SourceError, types::ReloadReport};
use std::collections::HashSet;

/// Sentences must be longer than this many characters to enter the base.
pub const MIN_SENTENCE_CHARS: usize = 20;

/// Always-present domain corpus.
pub const BACKUP_SENTENCES: &[&str] = &[
    "El jaguar es el felino más grande de América y habita en la Amazonía boliviana",
    "El jaguar está en peligro de extinción debido a la caza y pérdida de hábitat",
    "El cóndor andino es el ave voladora más grande del mundo y símbolo de Bolivia",
    "El cóndor andino vive en las montañas de los Andes bolivianos",
    "El oso andino o jucumari es el único oso de Sudamérica y está en peligro de extinción",
    "El oso andino habita en los bosques nublados de los Yungas bolivianos",
    "La paraba frente roja es una ave endémica de Bolivia en peligro crítico de extinción",
    "La paraba frente roja solo existe en los valles secos de Bolivia",
    "El armadillo gigante está en peligro de extinción en el Chaco boliviano",
    "El delfín rosado habita en los ríos de la Amazonía boliviana",
    "La rana gigante del Lago Titicaca es una especie endémica en peligro de extinción",
    "El Lago Titicaca es el lago navegable más alto del mundo compartido con Perú",
    "La quinua es un cultivo ancestral boliviano con alto valor nutricional",
    "El Parque Nacional Madidi es una de las áreas más biodiversas del planeta",
    "El Parque Nacional Madidi alberga jaguares, osos andinos y miles de especies de aves",
    "La Amazonía boliviana tiene una gran diversidad de animales y plantas únicas",
    "El Chaco boliviano es hábitat del armadillo gigante y otras especies amenazadas",
    "Los Yungas bolivianos son bosques nublados con gran biodiversidad de orquídeas",
    "El altiplano boliviano tiene especies adaptadas al clima frío y seco como la vicuña",
    "Bolivia tiene más de 300 especies de mamíferos y 1400 especies de aves registradas",
];

/// A provider of candidate sentences, typically backed by the network.
///
/// Implementations report failures through [`SourceError`]; the knowledge
/// base never lets them escape.
pub trait SentenceSource: Send + Sync {
    /// Short human-readable name used in logs and the info popup.
    fn name(&self) -> &str;

    /// Candidate sentences, already cleaned and length-filtered by the source.
    fn fetch_candidate_sentences(&self) -> Result<Vec<String>, SourceError>;
}

/// Ordered set of sentences, unique by exact text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnowledgeBase {
    sentences: Vec<String>,
}

impl KnowledgeBase {
    /// Build from candidates: first occurrence wins, then sentences of
    /// [`MIN_SENTENCE_CHARS`] characters or fewer are dropped.
    pub fn from_sentences<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let sentences = candidates
            .into_iter()
            .map(Into::into)
            .filter(|s: &String| s.chars().count() > MIN_SENTENCE_CHARS)
            .filter(|s| seen.insert(s.clone()))
            .collect();
        Self { sentences }
    }

    /// Only the backup corpus.
    pub fn backup() -> Self {
        Self::from_sentences(BACKUP_SENTENCES.iter().copied())
    }

    /// Merge `backup` with every source's candidates.
    ///
    /// Backup sentences come first, then each source's sentences in
    /// registration order. A failing source contributes nothing and is named
    /// in the report.
    pub fn assemble(backup: &[&str], sources: &[Box<dyn SentenceSource>]) -> (Self, ReloadReport) {
        let mut report = ReloadReport::default();
        let mut scraped: Vec<String> = Vec::new();

        for source in sources {
            match source.fetch_candidate_sentences() {
                Ok(found) => {
                    tracing::info!(source = source.name(), sentences = found.len(), "source fetched");
                    scraped.extend(found);
                }
                Err(err) => {
                    tracing::warn!(source = source.name(), error = %err, "source failed, using backup data");
                    report.failed_sources.push(source.name().to_string());
                }
            }
        }

        report.scraped = scraped.len();
        let kb = Self::from_sentences(
            backup
                .iter()
                .map(|s| s.to_string())
                .chain(scraped),
        );
        report.sentences = kb.len();
        tracing::info!(
            sentences = report.sentences,
            scraped = report.scraped,
            failed = report.failed_sources.len(),
            "knowledge base loaded"
        );
        (kb, report)
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Sentences in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.sentences.iter().map(String::as_str)
    }

    pub fn contains(&self, sentence: &str) -> bool {
        self.sentences.iter().any(|s| s == sentence)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Fixed(&'static str, Vec<&'static str>);

    impl SentenceSource for Fixed {
        fn name(&self) -> &str {
            self.0
        }
        fn fetch_candidate_sentences(&self) -> Result<Vec<String>, SourceError> {
            Ok(self.1.iter().map(|s| s.to_string()).collect())
        }
    }

    struct Broken;

    impl SentenceSource for Broken {
        fn name(&self) -> &str {
            "broken"
        }
        fn fetch_candidate_sentences(&self) -> Result<Vec<String>, SourceError> {
            Err(SourceError::Network("connection refused".to_string()))
        }
    }

    #[test]
    fn backup_has_twenty_sentences() {
        assert_eq!(KnowledgeBase::backup().len(), 20);
    }

    #[test]
    fn dedup_keeps_insertion_order() {
        let kb = KnowledgeBase::from_sentences([
            "segunda oración suficientemente larga",
            "primera oración suficientemente larga",
            "segunda oración suficientemente larga",
        ]);
        assert_eq!(
            kb.iter().collect::<Vec<_>>(),
            [
                "segunda oración suficientemente larga",
                "primera oración suficientemente larga"
            ]
        );
    }

    #[test]
    fn short_sentences_are_dropped() {
        // exactly 20 characters is not enough
        let kb = KnowledgeBase::from_sentences(["", "aaaaaaaaaaaaaaaaaaaa", "aaaaaaaaaaaaaaaaaaaaa"]);
        assert_eq!(kb.len(), 1);
    }

    #[test]
    fn assemble_appends_source_sentences_after_backup() {
        let sources: Vec<Box<dyn SentenceSource>> = vec![Box::new(Fixed(
            "fixed",
            vec!["La vicuña vive en el altiplano boliviano", BACKUP_SENTENCES[0]],
        ))];
        let (kb, report) = KnowledgeBase::assemble(BACKUP_SENTENCES, &sources);
        assert_eq!(kb.len(), 21);
        assert_eq!(kb.iter().last(), Some("La vicuña vive en el altiplano boliviano"));
        assert_eq!(report.scraped, 2);
        assert!(report.failed_sources.is_empty());
    }

    #[test]
    fn failing_source_falls_back_to_backup() {
        let sources: Vec<Box<dyn SentenceSource>> = vec![Box::new(Broken)];
        let (kb, report) = KnowledgeBase::assemble(BACKUP_SENTENCES, &sources);
        assert_eq!(kb, KnowledgeBase::backup());
        assert_eq!(report.failed_sources, ["broken"]);
        assert_eq!(report.sentences, 20);
    }
}
