//! biochat-feeds: sentence sources for the biochat knowledge base.
//!
//! Each source implements [`biochat_core::SentenceSource`]: it fetches,
//! cleans and length-filters candidate sentences, and reports failures as
//! [`biochat_core::SourceError`] for the knowledge base to log and skip.

pub mod clean;
pub mod curated;
pub mod wikipedia;

use biochat_core::{config::ScrapeConfig, SentenceSource};
use std::time::Duration;

pub use curated::CuratedSource;
pub use wikipedia::WikipediaSource;

/// Build the sources selected by `cfg`. With `enabled = false` (or
/// `--offline`) the list is empty and the knowledge base is the backup corpus.
///
/// A page whose HTTP client cannot be built is logged and left out.
pub fn default_sources(cfg: &ScrapeConfig) -> Vec<Box<dyn SentenceSource>> {
    let mut sources: Vec<Box<dyn SentenceSource>> = Vec::new();
    if !cfg.enabled {
        return sources;
    }

    let timeout = Duration::from_secs(cfg.timeout_secs);
    for url in &cfg.pages {
        match WikipediaSource::new(url.as_str(), timeout, &cfg.user_agent, cfg.max_sentences_per_page) {
            Ok(source) => sources.push(Box::new(source)),
            Err(err) => tracing::warn!(%url, error = %err, "skipping page source"),
        }
    }

    if cfg.curated {
        sources.push(Box::new(CuratedSource::biodiversidad()));
        sources.push(Box::new(CuratedSource::fauna()));
    }

    sources
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_scrape_has_no_sources() {
        let cfg = ScrapeConfig {
            enabled: false,
            ..Default::default()
        };
        assert!(default_sources(&cfg).is_empty());
    }

    #[test]
    fn default_config_registers_page_and_curated_lists() {
        let names: Vec<String> = default_sources(&ScrapeConfig::default())
            .iter()
            .map(|s| s.name().to_string())
            .collect();
        assert_eq!(
            names,
            [
                "wikipedia:Biodiversidad_de_Bolivia",
                "biodiversidad-bolivia",
                "fauna-bolivia"
            ]
        );
    }
}
