//! Owned container for all session state.
//!
//! The active id, the transcript, and the session catalog are the only state
//! with a race hazard (mutated by user navigation and by delayed network
//! completions), so every mutation goes through a named entry point here.

use crate::api::types::{SessionDetail, SessionSummary};
use crate::chat::message::ChatMessage;
use crate::chat::session::SessionId;

/// Greeting shown at the start of every fresh session.
pub const GREETING: &str =
    "Hi! I'm the e-talk assistant. Upload a document or just start chatting.";

/// All conversation state: the active session, its transcript, and the
/// catalog of known sessions.
#[derive(Debug)]
pub struct SessionStore {
    active_id: SessionId,
    /// Whether the active session exists on the backend. A never-persisted
    /// id is client-generated and must not be sent on the wire.
    persisted: bool,
    messages: Vec<ChatMessage>,
    sessions: Vec<SessionSummary>,
    /// Origin ids of chat requests currently in flight.
    in_flight: Vec<SessionId>,
    loading_session: bool,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            active_id: SessionId::generate(),
            persisted: false,
            messages: vec![ChatMessage::assistant(GREETING)],
            sessions: Vec::new(),
            in_flight: Vec::new(),
            loading_session: false,
        }
    }

    pub fn active_id(&self) -> &SessionId {
        &self.active_id
    }

    pub fn is_persisted(&self) -> bool {
        self.persisted
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn sessions(&self) -> &[SessionSummary] {
        &self.sessions
    }

    /// Replace the active session with a fresh one. Local only; the backend
    /// learns about the session on its first message.
    pub fn start_new_session(&mut self) {
        self.active_id = SessionId::generate();
        self.persisted = false;
        self.messages = vec![ChatMessage::assistant(GREETING)];
    }

    /// A send is allowed unless the active session already has an exchange
    /// outstanding. Requests for other sessions don't block.
    pub fn can_send(&self) -> bool {
        !self.in_flight.contains(&self.active_id)
    }

    /// Whether the UI should show a busy indicator for the active session.
    pub fn is_waiting(&self) -> bool {
        self.loading_session || self.in_flight.contains(&self.active_id)
    }

    pub fn is_loading_session(&self) -> bool {
        self.loading_session
    }

    pub fn push_user_message(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::user(content));
    }

    pub fn push_assistant_message(
        &mut self,
        content: impl Into<String>,
        knowledge: Option<String>,
    ) {
        self.messages
            .push(ChatMessage::assistant_with_knowledge(content, knowledge));
    }

    /// Apply a refreshed session catalog.
    pub fn set_sessions(&mut self, sessions: Vec<SessionSummary>) {
        self.sessions = sessions;
    }

    pub(crate) fn mark_in_flight(&mut self, origin: SessionId) {
        self.in_flight.push(origin);
    }

    pub(crate) fn clear_in_flight(&mut self, origin: &SessionId) {
        self.in_flight.retain(|id| id != origin);
    }

    pub fn begin_session_load(&mut self) {
        self.loading_session = true;
    }

    pub fn finish_session_load(&mut self) {
        self.loading_session = false;
    }

    /// Commit a fetched transcript: active id and messages replaced together,
    /// only ever called on a successful load.
    pub fn apply_loaded(&mut self, detail: SessionDetail) {
        self.active_id = SessionId::from(detail.session_id);
        self.persisted = true;
        self.messages = detail.messages;
    }

    /// Adopt the server-issued id for a conversation that just got its first
    /// reply.
    pub(crate) fn adopt_session_id(&mut self, id: SessionId) {
        self.active_id = id;
        self.persisted = true;
    }

    pub(crate) fn mark_persisted(&mut self) {
        self.persisted = true;
    }

    /// Drop a deleted session from the catalog. Returns true when the deleted
    /// session was active, in which case the store has already been reset to
    /// a fresh session.
    pub fn remove_session(&mut self, id: &SessionId) -> bool {
        self.sessions
            .retain(|session| session.session_id != id.as_str());
        if &self.active_id == id {
            self.start_new_session();
            true
        } else {
            false
        }
    }
}
