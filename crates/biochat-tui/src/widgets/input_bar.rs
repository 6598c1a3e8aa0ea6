//! Input bar widget: the question prompt at the bottom of the screen.
//!
//! - `Char(c)` inserts at the cursor.
//! - `Backspace` deletes the character before the cursor.
//! - `Nav(Left)` / `Nav(Right)` move the cursor.
//! - `Enter` is handled by the app shell, which takes the text.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use crate::widgets::LineEditor;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct InputBarState {
    pub editor: LineEditor,
}

impl InputBarState {
    pub fn handle(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Char(c) => self.editor.insert(*c),
            AppEvent::Backspace => self.editor.backspace(),
            AppEvent::Nav(Direction::Left) => self.editor.left(),
            AppEvent::Nav(Direction::Right) => self.editor.right(),
            _ => return,
        }
        tracing::trace!(input = %self.editor.text(), "input: edited");
    }

    /// Take the typed question, leaving the bar empty.
    pub fn take(&mut self) -> String {
        self.editor.take()
    }

    pub fn is_empty(&self) -> bool {
        self.editor.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct InputBar<'a> {
    state: &'a InputBarState,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> InputBar<'a> {
    pub fn new(state: &'a InputBarState, focused: bool, theme: &'a Theme) -> Self {
        Self { state, focused, theme }
    }

    /// Absolute terminal position of the text cursor within this widget's
    /// rendered area. Pass to `frame.set_cursor_position()` after rendering.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        let col = self.state.editor.cursor_chars() as u16;
        let x = (area.x + 1 + col).min(area.right().saturating_sub(2));
        (x, area.y + 1)
    }
}

impl Widget for InputBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" Pregunta ")
            .title_bottom(Line::from(" Enter: enviar ").right_aligned())
            .border_style(self.theme.border(self.focused));

        let inner = block.inner(area);
        block.render(area, buf);

        let line = if self.state.is_empty() && !self.focused {
            Line::from(Span::styled(
                "pulsa i para escribir una pregunta",
                Style::default().add_modifier(Modifier::DIM),
            ))
        } else {
            // Keep the cursor visible on long input
            let width = inner.width.saturating_sub(1) as usize;
            let skip = self.state.editor.cursor_chars().saturating_sub(width);
            Line::from(self.state.editor.text().chars().skip(skip).collect::<String>())
        };
        Paragraph::new(line).render(inner, buf);
    }
}
