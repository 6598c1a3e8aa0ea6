//! biochat: Chatbot de Biodiversidad de Bolivia
//!
//! Terminal chatbot that answers questions about Bolivian biodiversity by
//! keyword-scoring a small corpus of Spanish sentences. The binary wires the
//! three workspace crates together:
//!
//! ```text
//! biochat-feeds ──► biochat-core (SearchEngine) ──► biochat-tui
//!                                      │
//!                                      └──► headless `ask`
//! ```

pub mod headless;

use biochat_core::{config::Config, Lexicon, SearchEngine};

/// Build the engine described by `config`. With `offline` no sentence
/// source is registered and the knowledge base is the backup corpus.
pub fn build_engine(config: &Config, offline: bool) -> SearchEngine {
    let lexicon = Lexicon::from_config(&config.lexicon);
    if offline || !config.scrape.enabled {
        tracing::info!("offline: using backup corpus only");
        return SearchEngine::offline(config.search.clone(), lexicon);
    }
    let sources = biochat_feeds::default_sources(&config.scrape);
    SearchEngine::new(config.search.clone(), lexicon, sources)
}
