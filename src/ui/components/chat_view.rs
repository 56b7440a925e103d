//! Transcript rendering for the active session.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};

use crate::api::types::DocumentInfo;
use crate::chat::{ChatMessage, MessageRole};
use crate::util::format::format_size;

const THINKING_FRAMES: &[&str] = &["·  ", "·· ", "···", " ··", "  ·", "   "];

/// Scroll state for the transcript.
#[derive(Debug)]
pub struct ChatViewState {
    pub offset: u16,
    /// Follow mode: keep the view pinned to the newest message.
    pub follow: bool,
}

impl Default for ChatViewState {
    fn default() -> Self {
        Self {
            offset: 0,
            follow: true,
        }
    }
}

impl ChatViewState {
    pub fn scroll_up(&mut self, lines: u16) {
        self.offset = self.offset.saturating_sub(lines);
        self.follow = false;
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.offset = self.offset.saturating_add(lines);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.follow = true;
    }
}

/// Transcript widget: session attachments header, messages, and a thinking
/// indicator while a reply is pending.
pub struct ChatView<'a> {
    messages: &'a [ChatMessage],
    session_docs: &'a [DocumentInfo],
    waiting: bool,
    tick: u32,
}

impl<'a> ChatView<'a> {
    pub fn new(messages: &'a [ChatMessage]) -> Self {
        Self {
            messages,
            session_docs: &[],
            waiting: false,
            tick: 0,
        }
    }

    pub fn session_docs(mut self, docs: &'a [DocumentInfo]) -> Self {
        self.session_docs = docs;
        self
    }

    pub fn waiting(mut self, waiting: bool) -> Self {
        self.waiting = waiting;
        self
    }

    pub fn tick(mut self, tick: u32) -> Self {
        self.tick = tick;
        self
    }

    fn build_lines(&self) -> Vec<Line<'a>> {
        let mut lines = Vec::new();

        if !self.session_docs.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("Attachments ({})", self.session_docs.len()),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )));
            for doc in self.session_docs {
                lines.push(Line::from(Span::styled(
                    format!("  ⎘ {} · {}", doc.filename, format_size(doc.size)),
                    Style::default().fg(Color::Magenta),
                )));
            }
            lines.push(Line::default());
        }

        for message in self.messages {
            let (label, style) = match message.role {
                MessageRole::User => ("You", Style::default().fg(Color::Cyan)),
                MessageRole::Assistant => ("AI", Style::default().fg(Color::Green)),
            };
            lines.push(Line::from(Span::styled(
                label,
                style.add_modifier(Modifier::BOLD),
            )));
            for text in message.content.lines() {
                lines.push(Line::from(format!("  {text}")));
            }
            if let Some(knowledge) = &message.retrieved_knowledge {
                lines.push(Line::from(Span::styled(
                    "  Retrieved context",
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                )));
                for text in knowledge.lines() {
                    lines.push(Line::from(Span::styled(
                        format!("  ▏ {text}"),
                        Style::default().fg(Color::DarkGray),
                    )));
                }
            }
            lines.push(Line::default());
        }

        if self.waiting {
            let frame = THINKING_FRAMES[(self.tick as usize / 2) % THINKING_FRAMES.len()];
            lines.push(Line::from(Span::styled(
                frame,
                Style::default().fg(Color::DarkGray),
            )));
        }

        lines
    }
}

impl StatefulWidget for ChatView<'_> {
    type State = ChatViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let lines = self.build_lines();
        let total = lines.len() as u16;
        let max_offset = total.saturating_sub(area.height);

        if state.follow {
            state.offset = max_offset;
        } else {
            state.offset = state.offset.min(max_offset);
        }

        Paragraph::new(lines)
            .scroll((state.offset, 0))
            .render(area, buf);
    }
}
