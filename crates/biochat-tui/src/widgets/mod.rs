//! Ratatui widgets for the biochat TUI.

pub mod chat_log;
pub mod command_bar;
pub mod help;
pub mod input_bar;
pub mod popups;
pub mod status_bar;

use ratatui::layout::Rect;

// ---------------------------------------------------------------------------
// LineEditor
// ---------------------------------------------------------------------------

/// Single-line text buffer with a char-boundary-safe cursor, shared by the
/// input bar and the command bar.
#[derive(Debug, Default, Clone)]
pub struct LineEditor {
    text: String,
    /// Byte offset of the cursor within `text`.
    cursor: usize,
}

impl LineEditor {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Return the text and leave the editor empty.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    pub fn insert(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.prev_boundary();
            self.text.remove(prev);
            self.cursor = prev;
        }
    }

    pub fn left(&mut self) {
        self.cursor = self.prev_boundary();
    }

    pub fn right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    /// Cursor position in characters, for terminal column math.
    pub fn cursor_chars(&self) -> usize {
        self.text[..self.cursor].chars().count()
    }

    fn prev_boundary(&self) -> usize {
        self.text[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }
}

// ---------------------------------------------------------------------------
// Layout helpers
// ---------------------------------------------------------------------------

/// A `width` x `height` rectangle centred in `area`, clipped to it.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

/// Greedy word wrap on character counts. Words longer than `width` are split.
/// Blank input lines are kept as empty rows.
pub(crate) fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for paragraph in text.lines() {
        let mut row = String::new();
        let mut row_len = 0usize;

        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            while word.len() > width {
                if row_len > 0 {
                    rows.push(std::mem::take(&mut row));
                    row_len = 0;
                }
                let rest = word.split_off(width);
                rows.push(word.into_iter().collect());
                word = rest;
            }

            let needed = if row_len == 0 { word.len() } else { row_len + 1 + word.len() };
            if needed > width {
                rows.push(std::mem::take(&mut row));
                row_len = 0;
            }
            if row_len > 0 {
                row.push(' ');
                row_len += 1;
            }
            row.extend(word.iter());
            row_len += word.len();
        }

        rows.push(row);
    }

    rows
}
