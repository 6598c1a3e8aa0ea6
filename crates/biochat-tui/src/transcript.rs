//! Chat transcript: the ordered list of messages shown in the chat pane.
//!
//! The transcript always starts with the welcome message; `clear` resets it
//! to just that. [`Transcript::export`] writes one JSON object per line.

use biochat_core::SearchResult;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

pub const WELCOME: &str = "¡Bienvenido al Chatbot de Biodiversidad de Bolivia!

Pregunta sobre especies, regiones o conservación. Por ejemplo:
  • jaguar
  • condor andino
  • oso andino habitat
  • animales en peligro extincion
  • amazonia boliviana
  • parques nacionales

Escribe tu pregunta abajo. `:help` muestra los atajos.";

/// Grouped sample queries for the examples popup.
pub const EXAMPLE_QUERIES: &[(&str, &[&str])] = &[
    (
        "Consultas sencillas",
        &["jaguar", "condor", "oso andino", "animales peligro", "amazonia", "parques nacionales"],
    ),
    (
        "Consultas elaboradas",
        &[
            "¿Dónde vive el jaguar en Bolivia?",
            "Características del cóndor andino",
            "Hábitat del oso andino en los Yungas",
            "Especies en peligro de extinción",
            "Animales de la Amazonía boliviana",
            "Flora del altiplano andino",
        ],
    ),
    (
        "Consultas técnicas",
        &[
            "Estado de conservación del armadillo gigante",
            "Especies endémicas del Lago Titicaca",
            "Biodiversidad del Parque Nacional Madidi",
            "Aves migratorias de Bolivia",
            "Plantas medicinales de los Yungas",
        ],
    ),
];

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("cannot write transcript: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot encode transcript: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
    System,
}

impl Sender {
    pub fn label(self) -> &'static str {
        match self {
            Sender::User => "Tú",
            Sender::Bot => "Bot",
            Sender::System => "Sistema",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub ts: DateTime<Utc>,
    pub sender: Sender,
    pub text: String,
    /// Set on bot answers only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

impl ChatMessage {
    fn new(sender: Sender, text: impl Into<String>, confidence: Option<f32>) -> Self {
        Self {
            ts: Utc::now(),
            sender,
            text: text.into(),
            confidence,
        }
    }
}

#[derive(Debug)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::new(Sender::Bot, WELCOME, None)],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::new(Sender::User, text, None));
    }

    pub fn push_answer(&mut self, result: SearchResult) {
        let (answer, confidence) = result.into_pair();
        self.messages
            .push(ChatMessage::new(Sender::Bot, answer, Some(confidence)));
    }

    pub fn push_system(&mut self, text: impl Into<String>) {
        self.messages
            .push(ChatMessage::new(Sender::System, text, None));
    }

    /// Drop every message and show the welcome message again.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Write the transcript to `path` as JSON lines. Returns the number of
    /// messages written.
    pub fn export(&self, path: &Path) -> Result<usize, ExportError> {
        let mut out = BufWriter::new(File::create(path)?);
        for message in &self.messages {
            serde_json::to_writer(&mut out, message)?;
            out.write_all(b"\n")?;
        }
        out.flush()?;
        tracing::info!(path = %path.display(), messages = self.messages.len(), "transcript exported");
        Ok(self.messages.len())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
