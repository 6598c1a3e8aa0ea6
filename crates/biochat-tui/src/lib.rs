//! biochat TUI: ratatui chat shell over a [`SearchEngine`].

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod transcript;
pub mod widgets;

pub use app::App;

use biochat_core::{config::UiConfig, SearchEngine};
use std::sync::Arc;
use tokio::runtime::Handle;

/// Run the chat UI until the user quits. Owns the tokio runtime used for
/// background reloads.
pub fn run(engine: Arc<SearchEngine>, ui: &UiConfig) -> anyhow::Result<()> {
    tracing::info!(sentences = engine.knowledge_base().len(), "starting tui");
    with_runtime(|handle| App::new(engine, ui, handle).run())?
}

/// Run `f` with a handle to a fresh runtime. Blocking tasks still running
/// when `f` returns (an in-flight reload) are abandoned, not awaited.
fn with_runtime<T>(f: impl FnOnce(Handle) -> T) -> anyhow::Result<T> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("biochat-reload")
        .enable_all()
        .build()?;
    let out = f(runtime.handle().clone());
    runtime.shutdown_background();
    Ok(out)
}
