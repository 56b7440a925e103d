//! Application-level events.
//!
//! Network tasks never touch app state directly; they post one of these back
//! over the event channel, and the handlers validate origin stamps before
//! committing anything. Errors cross the channel as strings so events stay
//! `Clone`.

use crate::api::types::{ChatResponse, DocumentInfo, SessionDetail, SessionSummary};
use crate::chat::session::SessionId;
use crate::docs::DocScope;

/// Application-level events
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Chat request finished; carries the origin stamp it was sent under.
    ChatCompleted {
        origin_id: SessionId,
        result: Result<ChatResponse, String>,
    },

    /// Session catalog listing finished.
    SessionsListed {
        result: Result<Vec<SessionSummary>, String>,
    },

    /// Transcript fetch for a sidebar selection finished.
    SessionLoaded {
        result: Result<SessionDetail, String>,
    },

    /// Backend confirmed (or refused) a session delete.
    SessionDeleted {
        session_id: SessionId,
        result: Result<(), String>,
    },

    /// Knowledge-base listing finished.
    KnowledgeListed {
        result: Result<Vec<DocumentInfo>, String>,
    },

    /// Session-attachment listing finished; stamped with the session it was
    /// fetched for.
    SessionDocsListed {
        for_session: SessionId,
        result: Result<Vec<DocumentInfo>, String>,
    },

    /// Upload finished for the given collection.
    UploadCompleted {
        scope: DocScope,
        result: Result<DocumentInfo, String>,
    },

    /// Single-document delete finished for the given collection.
    DocumentDeleted {
        scope: DocScope,
        result: Result<(), String>,
    },

    /// Bulk clear finished for the given collection.
    CollectionCleared {
        scope: DocScope,
        result: Result<(), String>,
    },

    /// Deferred scroll after a transcript change (fire-and-forget; nothing
    /// awaits it).
    ScrollToBottom,
}
