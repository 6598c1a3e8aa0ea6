//! Headless `ask` output: one answer printed to stdout.

use biochat_core::SearchResult;
use serde_json::json;

/// Plain-text rendering: the answer, then the confidence line.
pub fn render_text(result: &SearchResult) -> String {
    format!("{}\nConfianza: {:.2}", result.answer, result.confidence)
}

/// JSON rendering with `answer`, `confidence` and `kind`.
pub fn render_json(result: &SearchResult) -> String {
    json!({
        "answer": result.answer,
        "confidence": result.confidence,
        "kind": result.kind.to_string(),
    })
    .to_string()
}
