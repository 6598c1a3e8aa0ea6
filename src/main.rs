use biochat_core::config::Config;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const DEBUG_LOG: &str = "/tmp/biochat-debug.log";

#[derive(Parser)]
#[command(name = "biochat", about = "Chatbot de biodiversidad de Bolivia")]
struct Cli {
    /// Verbose logs. The TUI writes them to /tmp/biochat-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    debug: bool,

    /// Skip every network source and answer from the backup corpus.
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Option<Cmd>,
}

#[derive(Subcommand)]
enum Cmd {
    /// Answer one question and exit.
    Ask {
        /// The question; several words are joined with spaces.
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Print a JSON object instead of text.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let headless = cli.command.is_some();
    init_logging(cli.debug, headless)?;

    let config = Config::load().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "config unreadable, using defaults");
        Config::defaults()
    });
    let engine = biochat::build_engine(&config, cli.offline);

    match cli.command {
        Some(Cmd::Ask { query, json }) => {
            let result = engine.search(&query.join(" "));
            let out = if json {
                biochat::headless::render_json(&result)
            } else {
                biochat::headless::render_text(&result)
            };
            println!("{out}");
            Ok(())
        }
        None => biochat_tui::run(Arc::new(engine), &config.ui),
    }
}

/// The TUI owns the terminal, so it only logs (to a file) with `--debug`.
/// Headless mode logs to stderr at `warn` unless `RUST_LOG` says otherwise.
fn init_logging(debug: bool, headless: bool) -> anyhow::Result<()> {
    let default_level = if debug { "debug" } else { "warn" };
    let filter = || {
        EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new(default_level))
    };

    if headless {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter())
            .init();
    } else if debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(DEBUG_LOG)?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(filter())
            .init();
        tracing::info!("biochat debug log started, tail -f {DEBUG_LOG}");
    }
    Ok(())
}
