//! Wikipedia source: scrapes paragraphs and list items from an article.
//!
//! Only blocks longer than 50 characters that mention Bolivia / the Andes /
//! the Amazon are kept, then cleaned and capped per page.

use crate::clean::Cleaner;
use biochat_core::{SentenceSource, SourceError};
use scraper::{Html, Selector};
use std::time::Duration;

const CONTENT_SELECTOR: &str = "div.mw-parser-output";
const BLOCK_SELECTOR: &str = "p, li";

pub struct WikipediaSource {
    name: String,
    url: String,
    max_sentences: usize,
    http: reqwest::blocking::Client,
    cleaner: Cleaner,
}

impl WikipediaSource {
    pub fn new(
        url: impl Into<String>,
        timeout: Duration,
        user_agent: &str,
        max_sentences: usize,
    ) -> anyhow::Result<Self> {
        let url = url.into();
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            name: format!("wikipedia:{}", page_title(&url)),
            url,
            max_sentences,
            http,
            cleaner: Cleaner::default(),
        })
    }

    fn fetch_html(&self) -> Result<String, SourceError> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .map_err(|e| SourceError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SourceError::Status(response.status().as_u16()));
        }

        response
            .text()
            .map_err(|e| SourceError::Network(e.to_string()))
    }
}

impl SentenceSource for WikipediaSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch_candidate_sentences(&self) -> Result<Vec<String>, SourceError> {
        tracing::debug!(url = %self.url, "scraping");
        let html = self.fetch_html()?;
        extract_sentences(&html, &self.cleaner, self.max_sentences)
    }
}

/// Pull candidate sentences out of an article's HTML.
pub fn extract_sentences(
    html: &str,
    cleaner: &Cleaner,
    max_sentences: usize,
) -> Result<Vec<String>, SourceError> {
    let document = Html::parse_document(html);
    let content_selector =
        Selector::parse(CONTENT_SELECTOR).map_err(|e| SourceError::Parse(e.to_string()))?;
    let block_selector =
        Selector::parse(BLOCK_SELECTOR).map_err(|e| SourceError::Parse(e.to_string()))?;

    let content = document
        .select(&content_selector)
        .next()
        .ok_or_else(|| SourceError::Parse("no article content found".to_string()))?;

    Ok(content
        .select(&block_selector)
        .map(|el| el.text().collect::<String>())
        .map(|text| text.trim().to_string())
        .filter(|text| cleaner.is_candidate(text))
        .filter_map(|text| cleaner.clean(&text))
        .take(max_sentences)
        .collect())
}

fn page_title(url: &str) -> &str {
    url.rsplit('/')
        .next()
        .and_then(|last| last.split('#').next())
        .filter(|t| !t.is_empty())
        .unwrap_or(url)
}
