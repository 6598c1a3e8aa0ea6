//! Chat log widget: the scrollable transcript pane.
//!
//! # Scroll semantics
//!
//! `scroll_offset` = number of rendered rows hidden below the view (0 = the
//! newest message is visible). Rows are produced by word-wrapping every
//! message to the pane width, so the offset is in screen rows, not messages.

use std::cell::Cell;

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use crate::transcript::{ChatMessage, Sender, Transcript};
use crate::widgets::wrap;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
    },
};

const PAGE_STEP: usize = 10;
const INDENT: &str = "  ";

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct ChatLogState {
    pub scroll_offset: usize,
    /// Cached from the last render so `handle()` can clamp scrolling.
    last_height: Cell<usize>,
    last_rows: Cell<usize>,
}

impl Default for ChatLogState {
    fn default() -> Self {
        Self {
            scroll_offset: 0,
            last_height: Cell::new(20),
            last_rows: Cell::new(0),
        }
    }
}

impl ChatLogState {
    fn max_offset(&self) -> usize {
        self.last_rows.get().saturating_sub(self.last_height.get().max(1))
    }

    pub fn scroll_to_tail(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn handle(&mut self, event: &AppEvent) {
        let max = self.max_offset();
        match event {
            AppEvent::Nav(Direction::Up) => {
                self.scroll_offset = (self.scroll_offset + 1).min(max);
            }
            AppEvent::Nav(Direction::Down) => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
            }
            AppEvent::ScrollUp => {
                self.scroll_offset = (self.scroll_offset + PAGE_STEP).min(max);
            }
            AppEvent::ScrollDown => {
                self.scroll_offset = self.scroll_offset.saturating_sub(PAGE_STEP);
            }
            AppEvent::ScrollToTail => self.scroll_to_tail(),
            _ => return,
        }
        tracing::debug!(scroll_offset = self.scroll_offset, max, "chat: scrolled");
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct ChatLog<'a> {
    state: &'a ChatLogState,
    transcript: &'a Transcript,
    /// Match threshold for the confidence bands; `None` hides the line.
    confidence_threshold: Option<f32>,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> ChatLog<'a> {
    pub fn new(
        state: &'a ChatLogState,
        transcript: &'a Transcript,
        confidence_threshold: Option<f32>,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self { state, transcript, confidence_threshold, focused, theme }
    }
}

impl Widget for ChatLog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" Conversación ")
            .border_style(self.theme.border(self.focused));
        let inner = block.inner(area);
        block.render(area, buf);

        // One column for the scrollbar
        let text_area = Rect { width: inner.width.saturating_sub(1), ..inner };
        let sb_area = Rect {
            x: inner.right().saturating_sub(1),
            width: 1,
            ..inner
        };

        let rows: Vec<Line<'static>> = self
            .transcript
            .messages()
            .iter()
            .flat_map(|m| render_message(m, text_area.width as usize, self.confidence_threshold, self.theme))
            .collect();

        let height = inner.height as usize;
        let total = rows.len();
        self.state.last_height.set(height);
        self.state.last_rows.set(total);

        let offset = self.state.scroll_offset.min(total.saturating_sub(height));
        let end = total - offset;
        let start = end.saturating_sub(height);

        Paragraph::new(rows[start..end].to_vec()).render(text_area, buf);

        if total > height {
            let mut sb_state = ScrollbarState::new(total)
                .position(start)
                .viewport_content_length(height);
            StatefulWidget::render(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(None)
                    .end_symbol(None),
                sb_area,
                buf,
                &mut sb_state,
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Message rendering
// ---------------------------------------------------------------------------

fn render_message(
    message: &ChatMessage,
    width: usize,
    confidence_threshold: Option<f32>,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(format!("{}:", message.sender.label()), theme.sender_style(message.sender)),
        Span::styled(
            format!(" {}", message.ts.with_timezone(&chrono::Local).format("%H:%M")),
            Style::default().add_modifier(Modifier::DIM),
        ),
    ])];

    let body_width = width.saturating_sub(INDENT.len());
    let body_style = match message.sender {
        Sender::System => theme.sender_system,
        _ => Style::default(),
    };
    lines.extend(
        wrap(&message.text, body_width)
            .into_iter()
            .map(|row| Line::from(Span::styled(format!("{INDENT}{row}"), body_style))),
    );

    if let (Some(threshold), Some(confidence)) = (confidence_threshold, message.confidence) {
        lines.push(Line::from(Span::styled(
            format!("{INDENT}Confianza: {confidence:.2}"),
            theme.confidence_style(confidence, threshold),
        )));
        lines.push(Line::from(Span::styled(
            "─".repeat(width.min(60)),
            Style::default().add_modifier(Modifier::DIM),
        )));
    }

    lines.push(Line::default());
    lines
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use biochat_core::{AnswerKind, SearchResult};

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn transcript_with_answer() -> Transcript {
        let mut t = Transcript::new();
        t.push_user("jaguar");
        t.push_answer(SearchResult {
            answer: "El jaguar es el felino más grande de América".to_string(),
            confidence: 0.857,
            kind: AnswerKind::Match,
        });
        t
    }

    #[test]
    fn renders_latest_answer_with_confidence() {
        let t = transcript_with_answer();
        let state = ChatLogState::default();
        let theme = Theme::load_default();
        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);
        ChatLog::new(&state, &t, Some(0.2), false, &theme).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("El jaguar es el felino"), "{text}");
        assert!(text.contains("Confianza: 0.86"), "{text}");
    }

    #[test]
    fn confidence_line_can_be_hidden() {
        let t = transcript_with_answer();
        let state = ChatLogState::default();
        let theme = Theme::load_default();
        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);
        ChatLog::new(&state, &t, None, false, &theme).render(area, &mut buf);

        assert!(!buffer_text(&buf).contains("Confianza"));
    }

    #[test]
    fn scrolling_is_clamped_to_content() {
        let t = transcript_with_answer();
        let mut state = ChatLogState::default();
        let theme = Theme::load_default();
        let area = Rect::new(0, 0, 60, 8);
        let mut buf = Buffer::empty(area);
        ChatLog::new(&state, &t, Some(0.2), true, &theme).render(area, &mut buf);

        for _ in 0..100 {
            state.handle(&AppEvent::ScrollUp);
        }
        assert_eq!(state.scroll_offset, state.max_offset());
        assert!(state.scroll_offset > 0);

        state.handle(&AppEvent::ScrollToTail);
        assert_eq!(state.scroll_offset, 0);
    }
}
