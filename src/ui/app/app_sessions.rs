//! Session catalog, selection, and deletion.

use crate::api::types::{SessionDetail, SessionSummary};
use crate::chat::SessionId;
use crate::ui::app::App;
use crate::ui::events::AppEvent;

impl App {
    /// Re-fetch the session catalog for the sidebar.
    pub(super) fn refresh_sessions(&self) {
        let api = self.api.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = api.list_sessions().await.map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::SessionsListed { result });
        });
    }

    pub(super) fn handle_sessions_listed(
        &mut self,
        result: Result<Vec<SessionSummary>, String>,
    ) {
        match result {
            Ok(sessions) => {
                self.store.set_sessions(sessions);
                let len = self.store.sessions().len();
                if len > 0 {
                    self.sidebar.selected = self.sidebar.selected.min(len - 1);
                } else {
                    self.sidebar.selected = 0;
                }
            }
            Err(error) => tracing::warn!("failed to list sessions: {error}"),
        }
    }

    /// Switch to another session. Selecting the active session is a no-op.
    pub(super) fn select_session(&mut self, id: SessionId) {
        if &id == self.store.active_id() {
            return;
        }

        self.store.begin_session_load();
        let api = self.api.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = api
                .session_detail(id.as_str())
                .await
                .map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::SessionLoaded { result });
        });
    }

    pub(super) fn handle_session_loaded(&mut self, result: Result<SessionDetail, String>) {
        self.store.finish_session_load();
        match result {
            Ok(detail) => {
                self.store.apply_loaded(detail);
                self.refresh_session_docs();
                self.schedule_scroll();
            }
            Err(error) => {
                // Prior transcript stays; the sidebar refresh below still runs.
                tracing::warn!("failed to load session: {error}");
            }
        }
        self.refresh_sessions();
    }

    /// Start a fresh conversation. Local only.
    pub(super) fn start_new_chat(&mut self) {
        self.store.start_new_session();
        self.session_docs.reset();
        self.refresh_session_docs();
        self.chat_scroll.scroll_to_bottom();
    }

    /// Issue the delete the user just confirmed. Nothing is removed locally
    /// until the backend confirms.
    pub(super) fn delete_session(&mut self, id: SessionId) {
        let api = self.api.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = api
                .delete_session(id.as_str())
                .await
                .map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::SessionDeleted {
                session_id: id,
                result,
            });
        });
    }

    pub(super) fn handle_session_deleted(
        &mut self,
        session_id: SessionId,
        result: Result<(), String>,
    ) {
        match result {
            Ok(()) => {
                if self.store.remove_session(&session_id) {
                    // The active conversation is gone; the store has already
                    // reset to a fresh session.
                    self.session_docs.reset();
                    self.refresh_session_docs();
                    self.chat_scroll.scroll_to_bottom();
                }
            }
            Err(error) => {
                tracing::error!("failed to delete session {session_id}: {error}");
                self.notice = Some("Failed to delete the conversation. Please try again.".into());
            }
        }
    }
}
