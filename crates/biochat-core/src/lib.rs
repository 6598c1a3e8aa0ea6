//! biochat-core: query matching for the Bolivian biodiversity chatbot.
//!
//! This crate holds every pipeline stage as a public module, plus the shared
//! types passed between them.
//!
//! # Architecture
//!
//! ```text
//! raw query ──► Normalizer ──► KeywordExtractor ──► SearchEngine ──► SearchResult
//!                                                        │    ▲
//!                                                        │    └── KnowledgeBase ◄── SentenceSource*
//!                                                        └──► fallback
//! ```
//!
//! Searching is synchronous. Sentence sources live in `biochat-feeds`; the
//! core only knows the [`SentenceSource`] trait.

pub mod config;
pub mod error;
pub mod fallback;
pub mod keywords;
pub mod knowledge;
pub mod lexicon;
pub mod normalizer;
pub mod search;
pub mod types;

pub use error::SourceError;
pub use keywords::KeywordExtractor;
pub use knowledge::{KnowledgeBase, SentenceSource, BACKUP_SENTENCES};
pub use lexicon::Lexicon;
pub use normalizer::Normalizer;
pub use search::SearchEngine;
pub use types::{AnswerKind, Category, KeywordSet, ReloadReport, SearchResult};
