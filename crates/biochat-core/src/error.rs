//! Error types for sentence sources.
//!
//! Source failures never reach the caller of `search` or `reload`; the
//! knowledge base logs them and carries on with the backup corpus.

/// Failure reported by a [`SentenceSource`](crate::knowledge::SentenceSource).
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_is_reported_by_a_source() {
        // exhaustive over every variant
        let all = [
            SourceError::Network("timeout".into()),
            SourceError::Status(503),
            SourceError::Parse("no article content found".into()),
        ];
        for err in &all {
            let shown = match err {
                SourceError::Network(_) | SourceError::Status(_) | SourceError::Parse(_) => {
                    err.to_string()
                }
            };
            assert!(!shown.is_empty());
        }
        assert_eq!(all[1].to_string(), "HTTP 503");
    }
}
