//! Domain-specific assertion macros for biochat harnesses.
//!
//! These add context-rich failure messages that name the query, the answer
//! and the confidence that broke the expectation.

/// Assert that a search produced a sentence match containing `$needle`.
///
/// ```rust
/// assert_match!(engine.search("jaguar"), "jaguar");
/// ```
#[macro_export]
macro_rules! assert_match {
    ($result:expr, $needle:expr) => {{
        let result: biochat_core::SearchResult = $result;
        let needle: &str = $needle;
        if result.kind != biochat_core::AnswerKind::Match {
            panic!(
                "assert_match! failed: expected a match, got {}\n  answer: {:?}\n  confidence: {}",
                result.kind, result.answer, result.confidence
            );
        }
        if !result.answer.contains(needle) {
            panic!(
                "assert_match! failed: answer does not contain {:?}\n  answer: {:?}",
                needle, result.answer
            );
        }
        result
    }};
}

/// Assert that a search fell through to the fallback responder.
#[macro_export]
macro_rules! assert_fallback {
    ($result:expr) => {{
        let result: biochat_core::SearchResult = $result;
        if result.kind != biochat_core::AnswerKind::Fallback || result.confidence != 0.0 {
            panic!(
                "assert_fallback! failed: got {} with confidence {}\n  answer: {:?}",
                result.kind, result.confidence, result.answer
            );
        }
        result
    }};
}

/// Assert a confidence lies in `[0.0, 1.0]`.
#[macro_export]
macro_rules! assert_confidence_in_range {
    ($result:expr, $query:expr) => {{
        let result: &biochat_core::SearchResult = &$result;
        if !(0.0..=1.0).contains(&result.confidence) {
            panic!(
                "assert_confidence_in_range! failed for query {:?}: {}",
                $query, result.confidence
            );
        }
    }};
}

/// Whitespace-split token set of a normalized query.
pub fn token_set(clean: &str) -> std::collections::BTreeSet<String> {
    clean.split_whitespace().map(str::to_string).collect()
}
