//! Keyword extraction: partitions normalized query tokens into the fixed
//! species / region / concept categories.

use crate::{normalizer::Normalizer, types::KeywordSet};

#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    normalizer: Normalizer,
}

impl KeywordExtractor {
    pub fn new(normalizer: Normalizer) -> Self {
        Self { normalizer }
    }

    /// Normalize `query` and classify every resulting token.
    pub fn extract(&self, query: &str) -> KeywordSet {
        self.classify(self.normalizer.tokens(query))
    }

    /// Classify tokens that are already normalized.
    pub fn classify(&self, tokens: Vec<String>) -> KeywordSet {
        let lexicon = self.normalizer.lexicon();
        let mut keywords = KeywordSet::default();
        for token in &tokens {
            if let Some(category) = lexicon.category_of(token) {
                keywords.push(category, token.clone());
            }
        }
        keywords.all = tokens;
        keywords
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(Normalizer::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;
    use pretty_assertions::assert_eq;

    #[test]
    fn partitions_by_category() {
        let kw = KeywordExtractor::default().extract("oso en peligro en los yungas");
        assert_eq!(
            kw.all,
            ["oso", "jucumari", "andino", "peligro", "amenaza", "extincion", "amenazada", "yungas"]
        );
        assert_eq!(kw.get(Category::Especies), ["oso"]);
        assert_eq!(kw.get(Category::Regiones), ["andino", "yungas"]);
        assert_eq!(kw.get(Category::Conceptos), ["peligro", "extincion"]);
    }

    #[test]
    fn uncategorised_tokens_only_in_all() {
        let kw = KeywordExtractor::default().extract("quinua cultivo");
        assert_eq!(kw.all, ["quinua", "cultivo"]);
        assert!(kw.especies.is_empty());
        assert!(kw.regiones.is_empty());
        assert!(kw.conceptos.is_empty());
    }

    #[test]
    fn empty_query_gives_empty_set() {
        assert!(KeywordExtractor::default().extract("").is_empty());
    }
}
