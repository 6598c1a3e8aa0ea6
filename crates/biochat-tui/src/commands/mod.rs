//! `:` commands typed into the command bar.
//!
//! | Command | Action |
//! |---------|--------|
//! | `q`, `quit` | Quit |
//! | `help` | Keybinding popup |
//! | `info` | Knowledge base / sources popup |
//! | `examples` | Sample queries popup |
//! | `clear` | Reset the chat to the welcome message |
//! | `reload` | Rebuild the knowledge base in the background |
//! | `theme <name>` | Switch theme (`default`, `gruvbox`) |
//! | `confidence` | Toggle the `Confianza` line under answers |
//! | `export <path>` | Write the chat as JSON lines |

use std::path::PathBuf;

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    Info,
    Examples,
    Clear,
    Reload,
    Theme(String),
    Confidence,
    Export(PathBuf),
}

impl Command {
    /// Parse a raw command string (the text after the `:` prefix).
    ///
    /// An empty string returns `Err("")` as a sentinel meaning "close without
    /// acting".
    pub fn parse(input: &str) -> Result<Command, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(String::new());
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" => Ok(Command::Quit),
            "help" => Ok(Command::Help),
            "info" => Ok(Command::Info),
            "examples" | "ejemplos" => Ok(Command::Examples),
            "clear" | "limpiar" => Ok(Command::Clear),
            "reload" | "recargar" => Ok(Command::Reload),
            "confidence" | "conf" => Ok(Command::Confidence),
            "theme" => {
                if rest.is_empty() {
                    Err("usage: theme <default|gruvbox>".to_string())
                } else {
                    Ok(Command::Theme(rest.to_string()))
                }
            }
            "export" => {
                if rest.is_empty() {
                    Err("usage: export <path>".to_string())
                } else {
                    Ok(Command::Export(PathBuf::from(rest)))
                }
            }
            other => Err(format!("unknown command: {other}")),
        }
    }
}
