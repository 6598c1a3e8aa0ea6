//! Text cleanup shared by every sentence source.

use regex::Regex;

/// Cleaned sentences must have between these many characters (inclusive).
pub const MIN_CLEAN_CHARS: usize = 30;
pub const MAX_CLEAN_CHARS: usize = 300;

/// Raw scraped blocks must be longer than this before cleanup.
pub const MIN_RAW_CHARS: usize = 50;

/// A scraped block must mention one of these (lowercased) to be considered.
pub const MARKERS: &[&str] = &["bolivia", "boliviana", "andino", "amazon"];

#[derive(Debug, Clone)]
pub struct Cleaner {
    references: Regex,
    whitespace: Regex,
}

impl Default for Cleaner {
    fn default() -> Self {
        Self {
            references: Regex::new(r"\[\d+\]").expect("reference pattern must compile"),
            whitespace: Regex::new(r"\s+").expect("whitespace pattern must compile"),
        }
    }
}

impl Cleaner {
    /// Strip `[n]` reference marks and collapse whitespace. Returns `None`
    /// when the result falls outside the accepted length range.
    pub fn clean(&self, text: &str) -> Option<String> {
        let text = self.references.replace_all(text, "");
        let text = self.whitespace.replace_all(&text, " ");
        let text = text.trim();
        let chars = text.chars().count();
        (MIN_CLEAN_CHARS..=MAX_CLEAN_CHARS)
            .contains(&chars)
            .then(|| text.to_string())
    }

    /// Whether a raw scraped block is worth cleaning at all.
    pub fn is_candidate(&self, raw: &str) -> bool {
        if raw.chars().count() <= MIN_RAW_CHARS {
            return false;
        }
        let lower = raw.to_lowercase();
        MARKERS.iter().any(|m| lower.contains(m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strips_references_and_whitespace() {
        let out = Cleaner::default()
            .clean("  El   Parque Madidi[12] es muy\n biodiverso[3]  ")
            .unwrap();
        assert_eq!(out, "El Parque Madidi es muy biodiverso");
    }

    #[test]
    fn rejects_out_of_range_lengths() {
        let c = Cleaner::default();
        assert_eq!(c.clean("demasiado corto"), None);
        assert_eq!(c.clean(&"a".repeat(301)), None);
        assert!(c.clean(&"a".repeat(300)).is_some());
    }

    #[test]
    fn candidates_need_length_and_marker() {
        let c = Cleaner::default();
        assert!(c.is_candidate(
            "La fauna boliviana incluye cientos de especies de aves y mamíferos"
        ));
        assert!(!c.is_candidate("Bolivia es grande"));
        assert!(!c.is_candidate(
            "Un texto suficientemente largo pero sin ninguna palabra marcadora aquí"
        ));
    }
}
