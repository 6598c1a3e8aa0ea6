//! Vim-style command bar: a single-line overlay at the bottom of the screen.
//!
//! Opened with `:` from the transcript pane (or from an empty input bar).
//! `Enter` hands the text to [`Command::parse`](crate::commands::Command::parse);
//! `Escape` cancels.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use crate::widgets::LineEditor;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Widget},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct CommandBarState {
    pub editor: LineEditor,
    /// Error message from the last failed command, cleared on the next key.
    pub error: Option<String>,
}

impl CommandBarState {
    /// Reset to a blank, error-free state.
    pub fn clear(&mut self) {
        self.editor.clear();
        self.error = None;
    }

    pub fn input(&self) -> &str {
        self.editor.text()
    }

    /// Apply an editing event. `Enter` and `Escape` are handled by the app.
    pub fn handle(&mut self, event: &AppEvent) {
        self.error = None;
        match event {
            AppEvent::Char(c) => self.editor.insert(*c),
            AppEvent::Backspace => self.editor.backspace(),
            AppEvent::Nav(Direction::Left) => self.editor.left(),
            AppEvent::Nav(Direction::Right) => self.editor.right(),
            _ => {}
        }
    }

    /// Absolute terminal column of the text cursor within `area`. The `:`
    /// glyph occupies column 0.
    pub fn cursor_col(&self, area: Rect) -> u16 {
        let col = 1 + self.editor.cursor_chars() as u16;
        (area.x + col).min(area.right().saturating_sub(1))
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct CommandBar<'a> {
    state: &'a CommandBarState,
    theme: &'a Theme,
}

impl<'a> CommandBar<'a> {
    pub fn new(state: &'a CommandBarState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for CommandBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let line = if let Some(ref err) = self.state.error {
            Line::from(Span::styled(
                format!("E  {err}"),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(vec![
                Span::styled(":", self.theme.border_focused),
                Span::raw(self.state.input()),
            ])
        };

        buf.set_line(area.x, area.y, &line, area.width);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_insert_and_backspace() {
        let mut s = CommandBarState::default();
        for c in "foo".chars() {
            s.handle(&AppEvent::Char(c));
        }
        assert_eq!(s.input(), "foo");
        s.handle(&AppEvent::Backspace);
        assert_eq!(s.input(), "fo");
    }

    #[test]
    fn error_cleared_on_next_key() {
        let mut s = CommandBarState::default();
        s.error = Some("oops".to_string());
        s.handle(&AppEvent::Char('x'));
        assert!(s.error.is_none());
    }

    #[test]
    fn cursor_col_counts_prefix() {
        let mut s = CommandBarState::default();
        for c in "quit".chars() {
            s.handle(&AppEvent::Char(c));
        }
        let area = Rect::new(0, 23, 80, 1);
        assert_eq!(s.cursor_col(area), 5);
    }
}
