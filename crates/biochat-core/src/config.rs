//! Configuration types for biochat.
//!
//! [`Config::load`] reads `~/.config/biochat/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[search]
token_hit_points     = 2
any_keyword_bonus    = 3
species_bonus        = 5
region_bonus         = 3
confidence_threshold = 0.2
normalizer_base      = 8

[scrape]
enabled                = true
timeout_secs           = 10
user_agent             = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36"
curated                = true
max_sentences_per_page = 20
pages                  = ["https://es.wikipedia.org/wiki/Biodiversidad_de_Bolivia"]

[ui]
show_confidence = true
theme           = "default"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/biochat/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub scrape: ScrapeConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub lexicon: LexiconConfig,
}

/// `[search]` section: the scorer's point values and thresholds.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Points per query token found as a substring of the sentence.
    #[serde(default = "default_token_hit_points")]
    pub token_hit_points: u32,
    /// Awarded once when any query token is found.
    #[serde(default = "default_any_keyword_bonus")]
    pub any_keyword_bonus: u32,
    /// Awarded once when any species token is found.
    #[serde(default = "default_species_bonus")]
    pub species_bonus: u32,
    /// Awarded once when any region token is found.
    #[serde(default = "default_region_bonus")]
    pub region_bonus: u32,
    /// A match is returned only when confidence is strictly above this.
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f32,
    /// Added to `tokens * token_hit_points` to form the confidence divisor.
    #[serde(default = "default_normalizer_base")]
    pub normalizer_base: u32,
}

fn default_token_hit_points() -> u32 { 2 }
fn default_any_keyword_bonus() -> u32 { 3 }
fn default_species_bonus() -> u32 { 5 }
fn default_region_bonus() -> u32 { 3 }
fn default_confidence_threshold() -> f32 { 0.2 }
fn default_normalizer_base() -> u32 { 8 }

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            token_hit_points: default_token_hit_points(),
            any_keyword_bonus: default_any_keyword_bonus(),
            species_bonus: default_species_bonus(),
            region_bonus: default_region_bonus(),
            confidence_threshold: default_confidence_threshold(),
            normalizer_base: default_normalizer_base(),
        }
    }
}

/// `[scrape]` section: which sentence sources run and how.
#[derive(Debug, Clone, Deserialize)]
pub struct ScrapeConfig {
    /// When false no network source is registered.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Register the two curated portal lists.
    #[serde(default = "default_enabled")]
    pub curated: bool,
    #[serde(default = "default_max_sentences_per_page")]
    pub max_sentences_per_page: usize,
    /// Wikipedia pages to scrape.
    #[serde(default = "default_pages")]
    pub pages: Vec<String>,
}

fn default_enabled() -> bool { true }
fn default_timeout_secs() -> u64 { 10 }
fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string()
}
fn default_max_sentences_per_page() -> usize { 20 }
fn default_pages() -> Vec<String> {
    vec!["https://es.wikipedia.org/wiki/Biodiversidad_de_Bolivia".to_string()]
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            curated: default_enabled(),
            max_sentences_per_page: default_max_sentences_per_page(),
            pages: default_pages(),
        }
    }
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_show_confidence")]
    pub show_confidence: bool,
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_show_confidence() -> bool { true }
fn default_theme() -> String { "default".to_string() }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_confidence: default_show_confidence(),
            theme: default_theme(),
        }
    }
}

/// Optional `[lexicon]` section. Every list left out keeps its built-in value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LexiconConfig {
    pub stopwords: Option<Vec<String>>,
    pub synonyms: Option<HashMap<String, Vec<String>>>,
    pub especies: Option<Vec<String>>,
    pub regiones: Option<Vec<String>>,
    pub conceptos: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/biochat/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::load_from(&path)
    }

    /// Layer an arbitrary (possibly missing) file over the built-in defaults.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("biochat")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
