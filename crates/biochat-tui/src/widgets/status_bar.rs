//! Status bar widget: the 1-line strip at the top of the screen.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Widget,
};

const TITLE: &str = " biochat · Biodiversidad de Bolivia ";
const HINTS: &str = " F1 ayuda  F2 info  F3 ejemplos  F5 recargar  Ctrl+c salir ";

/// Title, knowledge base size and reload indicator on the left; key hints
/// right-aligned in the same row.
pub struct StatusBar<'a> {
    sentences: usize,
    reloading: bool,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(sentences: usize, reloading: bool, theme: &'a Theme) -> Self {
        Self { sentences, reloading, theme }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.theme.status_bar);

        let mut spans = vec![
            Span::styled(TITLE, self.theme.status_bar.add_modifier(Modifier::BOLD)),
            Span::styled(format!("│ {} oraciones ", self.sentences), self.theme.status_bar),
        ];
        if self.reloading {
            spans.push(Span::styled(" ⟳ recargando… ", self.theme.status_reloading));
        }
        let line = Line::from(spans);
        let used = line.width() as u16;
        buf.set_line(area.x, area.y, &line, area.width);

        let hint_width = HINTS.chars().count() as u16;
        if used + hint_width <= area.width {
            let hint_x = area.right().saturating_sub(hint_width);
            buf.set_string(
                hint_x,
                area.y,
                HINTS,
                self.theme.status_bar.add_modifier(Modifier::DIM),
            );
        }
    }
}
