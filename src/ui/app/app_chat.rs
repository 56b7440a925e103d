//! Prompt submission and chat-completion handling.

use crate::api::types::ChatResponse;
use crate::chat::exchange;
use crate::chat::SessionId;
use crate::docs::DocScope;
use crate::ui::app::App;
use crate::ui::components::ConfirmAction;
use crate::ui::events::AppEvent;

impl App {
    /// Submit whatever is in the input box: a prompt, or a document command.
    pub(super) fn submit_input(&mut self) {
        if self.input.is_empty() {
            return;
        }

        let is_command = self.input.value().trim_start().starts_with('/');
        if !is_command && !self.store.can_send() {
            // The send affordance is disabled while this conversation has a
            // reply outstanding; keep the draft in the editor.
            return;
        }

        let text = self.input.submit();

        if let Some(path) = text.strip_prefix("/upload-kb ") {
            self.upload_to_knowledge(path.trim().into());
            return;
        }
        if let Some(path) = text.strip_prefix("/upload ") {
            self.upload_to_session(path.trim().into());
            return;
        }
        if let Some(name) = text.strip_prefix("/remove ") {
            self.request_remove_attachment(name.trim());
            return;
        }

        self.send_prompt(text);
    }

    /// Stage deletion of a session attachment named in a `/remove` command.
    fn request_remove_attachment(&mut self, name: &str) {
        match self
            .session_docs
            .documents()
            .iter()
            .find(|doc| doc.filename == name)
        {
            Some(doc) => {
                self.pending_confirm = Some(ConfirmAction::DeleteDocument {
                    scope: DocScope::Session,
                    id: doc.id.clone(),
                });
            }
            None => {
                self.notice = Some(format!("No attachment named \"{name}\""));
            }
        }
    }

    /// Phase one of a chat exchange: optimistic append, stamp, dispatch.
    pub(super) fn send_prompt(&mut self, prompt: String) {
        let Some(pending) = exchange::begin(&mut self.store, prompt) else {
            // A reply for this conversation is still outstanding.
            return;
        };

        let api = self.api.clone();
        let tx = self.event_tx.clone();
        let origin_id = pending.origin_id.clone();
        let prompt = pending.prompt.clone();
        let wire_id = pending.wire_session_id.clone();
        self.pending_chats.push(pending);
        self.schedule_scroll();

        tokio::spawn(async move {
            let result = api
                .send_chat(&prompt, wire_id.as_ref().map(|id| id.as_str()))
                .await
                .map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::ChatCompleted { origin_id, result });
        });
    }

    /// Phase two: validate the origin stamp and commit or discard.
    pub(super) fn handle_chat_completed(
        &mut self,
        origin_id: SessionId,
        result: Result<ChatResponse, String>,
    ) {
        let Some(index) = self
            .pending_chats
            .iter()
            .position(|pending| pending.origin_id == origin_id)
        else {
            tracing::warn!(origin = %origin_id, "completion without a pending chat");
            return;
        };
        let pending = self.pending_chats.remove(index);

        let resolution = exchange::resolve(&mut self.store, &pending, result);

        if resolution.refresh_sessions {
            self.refresh_sessions();
        }
        if resolution.refresh_session_docs {
            self.refresh_session_docs();
        }
        if !resolution.dropped {
            self.schedule_scroll();
        }
    }
}
