//! Info and examples popups.

use crate::theme::Theme;
use crate::transcript::EXAMPLE_QUERIES;
use crate::widgets::centered_rect;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget, Wrap},
};

const FEATURES: &[&str] = &[
    "Limpieza de consultas (minúsculas, puntuación, stopwords)",
    "Expansión de sinónimos",
    "Puntuación por palabras clave, especies y regiones",
    "Respuestas de respaldo por especie o región",
    "Recarga en segundo plano sin bloquear el chat",
];

fn frame<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::bordered()
        .title(title)
        .border_style(theme.border_focused)
}

// ---------------------------------------------------------------------------
// Info
// ---------------------------------------------------------------------------

pub struct InfoPopup<'a> {
    sentences: usize,
    sources: &'a [String],
    theme: &'a Theme,
}

impl<'a> InfoPopup<'a> {
    pub fn new(sentences: usize, sources: &'a [String], theme: &'a Theme) -> Self {
        Self { sentences, sources, theme }
    }
}

impl Widget for InfoPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let mut lines = vec![
            Line::from(Span::styled("Estadísticas", self.theme.sender_bot)),
            Line::from(vec![
                Span::raw("  Oraciones en base: "),
                Span::styled(self.sentences.to_string(), bold),
            ]),
            Line::from(vec![
                Span::raw("  Fuentes registradas: "),
                Span::styled(self.sources.len().to_string(), bold),
            ]),
            Line::default(),
            Line::from(Span::styled("Fuentes", self.theme.sender_bot)),
        ];
        if self.sources.is_empty() {
            lines.push(Line::from("  solo el corpus de respaldo (modo sin conexión)"));
        }
        lines.extend(
            self.sources
                .iter()
                .enumerate()
                .map(|(i, name)| Line::from(format!("  {}. {name}", i + 1))),
        );
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Características", self.theme.sender_bot)));
        lines.extend(FEATURES.iter().map(|f| Line::from(format!("  • {f}"))));

        let popup = centered_rect(70, lines.len() as u16 + 2, area);
        Clear.render(popup, buf);
        let block = frame(" Información del sistema (Esc para cerrar) ", self.theme);
        let inner = block.inner(popup);
        block.render(popup, buf);
        Paragraph::new(lines).wrap(Wrap { trim: false }).render(inner, buf);
    }
}

// ---------------------------------------------------------------------------
// Examples
// ---------------------------------------------------------------------------

pub struct ExamplesPopup<'a> {
    theme: &'a Theme,
}

impl<'a> ExamplesPopup<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for ExamplesPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines: Vec<Line> = Vec::new();
        for (group, queries) in EXAMPLE_QUERIES {
            if !lines.is_empty() {
                lines.push(Line::default());
            }
            lines.push(Line::from(Span::styled(*group, self.theme.sender_bot)));
            lines.extend(queries.iter().map(|q| Line::from(format!("  • {q}"))));
        }

        let popup = centered_rect(60, lines.len() as u16 + 2, area);
        Clear.render(popup, buf);
        let block = frame(" Consultas de ejemplo (Esc para cerrar) ", self.theme);
        let inner = block.inner(popup);
        block.render(popup, buf);
        Paragraph::new(lines).render(inner, buf);
    }
}
