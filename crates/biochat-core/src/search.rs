//! Search layer: scores every knowledge base sentence against the
//! normalized query and picks the best one.
//!
//! Scoring is additive over substring containment in the lowercased
//! sentence: points per query token found, plus one-off bonuses when any
//! token, any species token or any region token is found. Confidence is the
//! best score divided by `tokens * token_hit_points + normalizer_base`,
//! clamped to 1.0. Anything at or below the threshold goes to the
//! [fallback responder](crate::fallback).
//!
//! The knowledge base is copy-on-reload: [`SearchEngine::reload`] builds a
//! complete new base and swaps the shared [`Arc`], so a search in flight
//! keeps scoring the snapshot it started with.

use crate::{
    config::SearchConfig,
    fallback,
    keywords::KeywordExtractor,
    knowledge::{KnowledgeBase, SentenceSource, BACKUP_SENTENCES},
    lexicon::Lexicon,
    normalizer::Normalizer,
    types::{AnswerKind, KeywordSet, ReloadReport, SearchResult},
};
use parking_lot::RwLock;
use std::sync::Arc;

pub const NO_INFORMATION: &str = "No tengo información disponible en este momento.";
pub const NOT_UNDERSTOOD: &str = "No entendí tu pregunta. ¿Podrías reformular?";

pub struct SearchEngine {
    config: SearchConfig,
    normalizer: Normalizer,
    extractor: KeywordExtractor,
    sources: Vec<Box<dyn SentenceSource>>,
    knowledge: RwLock<Arc<KnowledgeBase>>,
}

impl SearchEngine {
    /// Build the engine and assemble the initial knowledge base from the
    /// backup corpus plus `sources`.
    pub fn new(config: SearchConfig, lexicon: Lexicon, sources: Vec<Box<dyn SentenceSource>>) -> Self {
        let (kb, _) = KnowledgeBase::assemble(BACKUP_SENTENCES, &sources);
        Self::with_knowledge_base(config, lexicon, sources, kb)
    }

    /// Engine over the backup corpus only, with no sources registered.
    pub fn offline(config: SearchConfig, lexicon: Lexicon) -> Self {
        Self::with_knowledge_base(config, lexicon, Vec::new(), KnowledgeBase::backup())
    }

    /// Engine over an explicit knowledge base. Reloads still rebuild from the
    /// backup corpus plus `sources`.
    pub fn with_knowledge_base(
        config: SearchConfig,
        lexicon: Lexicon,
        sources: Vec<Box<dyn SentenceSource>>,
        knowledge: KnowledgeBase,
    ) -> Self {
        let normalizer = Normalizer::new(Arc::new(lexicon));
        Self {
            config,
            extractor: KeywordExtractor::new(normalizer.clone()),
            normalizer,
            sources,
            knowledge: RwLock::new(Arc::new(knowledge)),
        }
    }

    /// Current knowledge base snapshot.
    pub fn knowledge_base(&self) -> Arc<KnowledgeBase> {
        Arc::clone(&self.knowledge.read())
    }

    pub fn source_names(&self) -> Vec<String> {
        self.sources.iter().map(|s| s.name().to_string()).collect()
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn extractor(&self) -> &KeywordExtractor {
        &self.extractor
    }

    /// Rebuild the knowledge base from the backup corpus and every source,
    /// then swap it in. Never fails; failing sources are listed in the report.
    pub fn reload(&self) -> ReloadReport {
        let (kb, report) = KnowledgeBase::assemble(BACKUP_SENTENCES, &self.sources);
        *self.knowledge.write() = Arc::new(kb);
        report
    }

    /// Answer `query`. Total: every input produces a result.
    pub fn search(&self, query: &str) -> SearchResult {
        let kb = self.knowledge_base();
        if query.trim().is_empty() || kb.is_empty() {
            return SearchResult::zero(NO_INFORMATION, AnswerKind::NoInformation);
        }

        let tokens = self.normalizer.tokens(query);
        let keywords = self.extractor.classify(tokens.clone());
        tracing::debug!(query, clean = %tokens.join(" "), ?keywords, "search");

        if tokens.is_empty() {
            return SearchResult::zero(NOT_UNDERSTOOD, AnswerKind::NotUnderstood);
        }

        let mut best: Option<&str> = None;
        let mut best_score = 0u32;
        for sentence in kb.iter() {
            let score = self.score(sentence, &tokens, &keywords);
            if score > best_score {
                best_score = score;
                best = Some(sentence);
            }
        }

        let confidence = self.confidence(best_score, tokens.len());
        tracing::debug!(best_score, confidence, matched = best.is_some(), "scored");

        match best {
            Some(sentence) if confidence > self.config.confidence_threshold => SearchResult {
                answer: sentence.to_string(),
                confidence,
                kind: AnswerKind::Match,
            },
            _ => SearchResult::zero(fallback::respond(&keywords, query), AnswerKind::Fallback),
        }
    }

    /// Relevance of one sentence. `tokens` are the normalized query tokens and
    /// `keywords` their categorisation.
    pub fn score(&self, sentence: &str, tokens: &[String], keywords: &KeywordSet) -> u32 {
        let cfg = &self.config;
        let lower = sentence.to_lowercase();
        let found = |words: &[String]| words.iter().any(|w| lower.contains(w.as_str()));

        let hits = tokens.iter().filter(|t| lower.contains(t.as_str())).count() as u32;
        let mut score = hits * cfg.token_hit_points;
        if found(&keywords.all) {
            score += cfg.any_keyword_bonus;
        }
        if found(&keywords.especies) {
            score += cfg.species_bonus;
        }
        if found(&keywords.regiones) {
            score += cfg.region_bonus;
        }
        score
    }

    fn confidence(&self, best_score: u32, token_count: usize) -> f32 {
        let max_possible =
            token_count as u32 * self.config.token_hit_points + self.config.normalizer_base;
        (best_score as f32 / max_possible.max(1) as f32).clamp(0.0, 1.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
