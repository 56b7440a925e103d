//! Single-line prompt input.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Single-line input editor for the prompt bar.
#[derive(Debug, Default)]
pub struct InputBox {
    value: String,
    /// Cursor position in chars.
    cursor: usize,
}

impl InputBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.trim().is_empty()
    }

    pub fn insert(&mut self, c: char) {
        let byte_idx = self
            .value
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len());
        self.value.insert(byte_idx, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let byte_idx = self
            .value
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len());
        self.value.remove(byte_idx);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.value.chars().count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    /// Take the trimmed value and reset the editor.
    pub fn submit(&mut self) -> String {
        let value = std::mem::take(&mut self.value);
        self.cursor = 0;
        value.trim().to_string()
    }

    /// Column the terminal cursor should sit at, relative to the text start.
    pub fn cursor_column(&self) -> u16 {
        let prefix: String = self.value.chars().take(self.cursor).collect();
        prefix.width() as u16
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, enabled: bool) {
        let hint = if enabled {
            "Enter to send · /upload <path> attaches a file"
        } else {
            "Waiting for reply..."
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(hint, Style::default().fg(Color::DarkGray)));
        let style = if enabled {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Paragraph::new(Line::from(self.value.as_str()))
            .style(style)
            .block(block)
            .render(area, buf);
    }
}
