//! Keyboard and mouse input handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::chat::SessionId;
use crate::docs::DocScope;
use crate::ui::app::App;
use crate::ui::components::ConfirmAction;
use crate::ui::sidebar::SidebarTab;

impl App {
    pub(super) fn handle_key_event(&mut self, key: KeyEvent) {
        // Any keypress dismisses a standing notice.
        self.notice = None;

        // A confirmation dialog swallows all input.
        if self.pending_confirm.is_some() {
            match key.code {
                KeyCode::Enter => self.confirm_pending(),
                KeyCode::Esc => self.pending_confirm = None,
                _ => {}
            }
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.start_new_chat(),
                KeyCode::Char('b') => self.sidebar.toggle(),
                KeyCode::Char('d') => self.request_delete_selected(),
                KeyCode::Char('k') => {
                    self.pending_confirm = Some(ConfirmAction::ClearKnowledgeBase);
                }
                KeyCode::Char('x') => {
                    self.pending_confirm = Some(ConfirmAction::ClearSessionDocuments);
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Tab if self.sidebar.is_open => {
                self.sidebar.active_tab = self.sidebar.active_tab.next();
                self.sidebar.selected = 0;
                // Switching tabs re-fetches that tab's catalog.
                match self.sidebar.active_tab {
                    SidebarTab::History => self.refresh_sessions(),
                    SidebarTab::Knowledge => self.refresh_knowledge(),
                    SidebarTab::Settings => {}
                }
            }
            KeyCode::Up if self.sidebar.is_open => {
                self.sidebar.selected = self.sidebar.selected.saturating_sub(1);
            }
            KeyCode::Down if self.sidebar.is_open => {
                let len = self.sidebar_list_len();
                if len > 0 {
                    self.sidebar.selected = (self.sidebar.selected + 1).min(len - 1);
                }
            }
            KeyCode::PageUp => self.chat_scroll.scroll_up(10),
            KeyCode::PageDown => self.chat_scroll.scroll_down(10),
            KeyCode::Enter => {
                if !self.input.is_empty() {
                    self.submit_input();
                } else if self.sidebar.is_open
                    && self.sidebar.active_tab == SidebarTab::History
                {
                    if let Some(session) = self.store.sessions().get(self.sidebar.selected) {
                        let id = SessionId::from(session.session_id.clone());
                        self.select_session(id);
                    }
                }
            }
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.move_home(),
            KeyCode::End => self.input.move_end(),
            KeyCode::Char(c) => self.input.insert(c),
            _ => {}
        }
    }

    pub(super) fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.sidebar.is_divider_column(mouse.column) {
                    self.sidebar.start_drag();
                } else if self.sidebar.is_open && mouse.column < self.sidebar.cell_width() {
                    // Rows below the two-line tab strip map onto list entries.
                    let index = mouse.row.saturating_sub(2) as usize;
                    if index < self.sidebar_list_len() {
                        self.sidebar.selected = index;
                    }
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.sidebar.drag_to_column(mouse.column);
            }
            MouseEventKind::Up(MouseButton::Left) => self.sidebar.stop_drag(),
            MouseEventKind::ScrollUp => self.chat_scroll.scroll_up(3),
            MouseEventKind::ScrollDown => self.chat_scroll.scroll_down(3),
            _ => {}
        }
    }

    fn sidebar_list_len(&self) -> usize {
        match self.sidebar.active_tab {
            SidebarTab::History => self.store.sessions().len(),
            SidebarTab::Knowledge => self.knowledge.len(),
            SidebarTab::Settings => 0,
        }
    }

    /// Ask for confirmation before deleting whatever the sidebar selects.
    fn request_delete_selected(&mut self) {
        match self.sidebar.active_tab {
            SidebarTab::History => {
                if let Some(session) = self.store.sessions().get(self.sidebar.selected) {
                    self.pending_confirm = Some(ConfirmAction::DeleteSession(SessionId::from(
                        session.session_id.clone(),
                    )));
                }
            }
            SidebarTab::Knowledge => {
                if let Some(doc) = self.knowledge.documents().get(self.sidebar.selected) {
                    self.pending_confirm = Some(ConfirmAction::DeleteDocument {
                        scope: DocScope::KnowledgeBase,
                        id: doc.id.clone(),
                    });
                }
            }
            SidebarTab::Settings => {}
        }
    }

    /// Dispatch the confirmed destructive action.
    fn confirm_pending(&mut self) {
        let Some(action) = self.pending_confirm.take() else {
            return;
        };
        match action {
            ConfirmAction::DeleteSession(id) => self.delete_session(id),
            ConfirmAction::DeleteDocument { scope, id } => self.delete_document(scope, id),
            ConfirmAction::ClearKnowledgeBase => self.clear_collection(DocScope::KnowledgeBase),
            ConfirmAction::ClearSessionDocuments => self.clear_collection(DocScope::Session),
        }
    }
}
