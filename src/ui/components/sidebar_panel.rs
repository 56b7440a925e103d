//! Sidebar rendering: tab strip plus the active tab's list.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::api::types::{DocumentInfo, SessionSummary};
use crate::chat::SessionId;
use crate::ui::sidebar::{SidebarState, SidebarTab};
use crate::util::format::{format_age, format_size, format_timestamp};

/// Sidebar widget: History / Knowledge / Settings tabs.
pub struct SidebarPanel<'a> {
    state: &'a SidebarState,
    sessions: &'a [SessionSummary],
    active_id: &'a SessionId,
    knowledge: &'a [DocumentInfo],
    knowledge_loading: bool,
    api_url: &'a str,
}

impl<'a> SidebarPanel<'a> {
    pub fn new(state: &'a SidebarState, active_id: &'a SessionId) -> Self {
        Self {
            state,
            sessions: &[],
            active_id,
            knowledge: &[],
            knowledge_loading: false,
            api_url: "",
        }
    }

    pub fn sessions(mut self, sessions: &'a [SessionSummary]) -> Self {
        self.sessions = sessions;
        self
    }

    pub fn knowledge(mut self, docs: &'a [DocumentInfo], loading: bool) -> Self {
        self.knowledge = docs;
        self.knowledge_loading = loading;
        self
    }

    pub fn api_url(mut self, api_url: &'a str) -> Self {
        self.api_url = api_url;
        self
    }

    fn tab_line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for tab in [
            SidebarTab::History,
            SidebarTab::Knowledge,
            SidebarTab::Settings,
        ] {
            let style = if tab == self.state.active_tab {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(format!(" {} ", tab.title()), style));
        }
        Line::from(spans)
    }

    fn list_lines(&self) -> Vec<Line<'static>> {
        match self.state.active_tab {
            SidebarTab::History => self.history_lines(),
            SidebarTab::Knowledge => self.knowledge_lines(),
            SidebarTab::Settings => self.settings_lines(),
        }
    }

    fn history_lines(&self) -> Vec<Line<'static>> {
        if self.sessions.is_empty() {
            return vec![Line::from(Span::styled(
                "No conversations yet",
                Style::default().fg(Color::DarkGray),
            ))];
        }

        self.sessions
            .iter()
            .enumerate()
            .map(|(index, session)| {
                let is_active = session.session_id == self.active_id.as_str();
                let is_selected = index == self.state.selected;
                let marker = if is_active { "● " } else { "  " };
                let mut style = Style::default();
                if is_active {
                    style = style.fg(Color::Cyan);
                }
                if is_selected {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                Line::from(Span::styled(
                    format!(
                        "{marker}{} · {}",
                        session.title,
                        format_timestamp(&session.last_message_time)
                    ),
                    style,
                ))
            })
            .collect()
    }

    fn knowledge_lines(&self) -> Vec<Line<'static>> {
        if self.knowledge_loading {
            return vec![Line::from(Span::styled(
                "Loading...",
                Style::default().fg(Color::DarkGray),
            ))];
        }
        if self.knowledge.is_empty() {
            return vec![Line::from(Span::styled(
                "Knowledge base is empty",
                Style::default().fg(Color::DarkGray),
            ))];
        }

        self.knowledge
            .iter()
            .enumerate()
            .map(|(index, doc)| {
                let mut style = Style::default();
                if index == self.state.selected {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                Line::from(Span::styled(
                    format!(
                        "⎘ {} · {} · {} chunks · {}",
                        doc.filename,
                        format_size(doc.size),
                        doc.chunk_count,
                        format_age(&doc.upload_time)
                    ),
                    style,
                ))
            })
            .collect()
    }

    fn settings_lines(&self) -> Vec<Line<'static>> {
        vec![
            Line::from(format!("Backend: {}", self.api_url)),
            Line::default(),
            Line::from(Span::styled(
                "Ctrl+N new chat · Ctrl+B sidebar",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "Tab cycles tabs · Ctrl+D deletes the selected entry",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "Ctrl+K clears the knowledge base · Ctrl+X clears attachments",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "/upload <path> attaches to this chat",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "/upload-kb <path> adds to knowledge base · /remove <name>",
                Style::default().fg(Color::DarkGray),
            )),
        ]
    }
}

impl Widget for SidebarPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.state.is_open || area.width < 10 {
            return;
        }

        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(inner);

        Paragraph::new(self.tab_line()).render(chunks[0], buf);
        Paragraph::new(self.list_lines()).render(chunks[1], buf);
    }
}
