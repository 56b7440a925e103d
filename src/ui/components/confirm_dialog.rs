//! Confirmation dialog for destructive actions.
//!
//! Nothing is removed locally until the backend confirms; the dialog only
//! gates which request gets issued.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::chat::SessionId;
use crate::docs::DocScope;

/// Destructive action awaiting the user's confirmation.
#[derive(Debug, Clone)]
pub enum ConfirmAction {
    DeleteSession(SessionId),
    DeleteDocument { scope: DocScope, id: String },
    ClearKnowledgeBase,
    ClearSessionDocuments,
}

impl ConfirmAction {
    pub fn message(&self) -> &'static str {
        match self {
            ConfirmAction::DeleteSession(_) => {
                "Delete this conversation? This cannot be undone."
            }
            ConfirmAction::DeleteDocument { .. } => {
                "Delete this document? This cannot be undone."
            }
            ConfirmAction::ClearKnowledgeBase => {
                "Clear the knowledge base? All documents will be deleted."
            }
            ConfirmAction::ClearSessionDocuments => {
                "Remove all documents attached to this conversation?"
            }
        }
    }
}

/// Centered modal asking for confirmation of a destructive action.
pub struct ConfirmDialog<'a> {
    action: &'a ConfirmAction,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(action: &'a ConfirmAction) -> Self {
        Self { action }
    }

    fn dialog_area(area: Rect) -> Rect {
        let width = 50.min(area.width.saturating_sub(4));
        let height = 6;
        Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        }
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dialog = Self::dialog_area(area);
        Clear.render(dialog, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(Span::styled(
                " e-talk ",
                Style::default().add_modifier(Modifier::BOLD),
            ));

        let lines = vec![
            Line::from(self.action.message()),
            Line::default(),
            Line::from(Span::styled(
                "Enter confirm · Esc cancel",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(dialog, buf);
    }
}
