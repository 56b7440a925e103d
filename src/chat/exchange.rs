//! Two-phase chat exchange with origin correlation.
//!
//! Sending a prompt races against session switching: the reply may arrive
//! after the user has navigated elsewhere. Each request is stamped with the
//! session id active at send time, and the stamp is re-checked before the
//! reply is committed. Requests for different sessions never wait on each
//! other; each resolves against its own stamp.

use crate::api::types::ChatResponse;
use crate::chat::session::SessionId;
use crate::chat::store::SessionStore;

/// Shown when the backend answers with an empty message.
pub const BUSY_FALLBACK: &str = "The system is busy right now. Please try again later.";

/// Shown when the request fails outright.
pub const ERROR_FALLBACK: &str = "Sorry, something went wrong. Please try again later.";

/// A chat request in flight, stamped with its origin.
#[derive(Debug, Clone)]
pub struct PendingChat {
    /// Active session id captured at send time.
    pub origin_id: SessionId,
    pub prompt: String,
    /// Id to put on the wire; `None` asks the backend for a new conversation.
    pub wire_session_id: Option<SessionId>,
}

/// Follow-up work the caller owes after a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendResolution {
    /// The exchange may have changed a title or timestamp in the sidebar.
    pub refresh_sessions: bool,
    /// The active session changed identity; its attachments need a re-fetch.
    pub refresh_session_docs: bool,
    /// The reply was discarded because the user navigated away.
    pub dropped: bool,
}

/// Phase one: append the user's message optimistically and stamp the request.
///
/// Returns `None` when the active session already has an exchange
/// outstanding; a second send on the same conversation is refused.
pub fn begin(store: &mut SessionStore, prompt: impl Into<String>) -> Option<PendingChat> {
    if !store.can_send() {
        return None;
    }

    let prompt = prompt.into();
    let origin_id = store.active_id().clone();
    let wire_session_id = store.is_persisted().then(|| origin_id.clone());

    store.push_user_message(prompt.clone());
    store.mark_in_flight(origin_id.clone());

    Some(PendingChat {
        origin_id,
        prompt,
        wire_session_id,
    })
}

/// Phase two: validate the stamp and commit or discard the outcome.
///
/// The in-flight mark is cleared on every path, including errors.
pub fn resolve(
    store: &mut SessionStore,
    pending: &PendingChat,
    outcome: Result<ChatResponse, String>,
) -> SendResolution {
    store.clear_in_flight(&pending.origin_id);

    if store.active_id() != &pending.origin_id {
        // The reply belongs to a conversation the user navigated away from.
        // It stays out of the visible transcript, but the exchange happened:
        // the sidebar catalog may show a new title or timestamp.
        tracing::debug!(
            origin = %pending.origin_id,
            active = %store.active_id(),
            "dropping reply for inactive session"
        );
        return SendResolution {
            refresh_sessions: true,
            refresh_session_docs: false,
            dropped: true,
        };
    }

    match outcome {
        Ok(response) => {
            let mut refresh_session_docs = false;
            if response.session_id != pending.origin_id.as_str() {
                // First turn of a new conversation: the backend issued the
                // authoritative id.
                store.adopt_session_id(SessionId::from(response.session_id));
                refresh_session_docs = true;
            } else {
                store.mark_persisted();
            }

            let content = if response.message.is_empty() {
                BUSY_FALLBACK.to_string()
            } else {
                response.message
            };
            store.push_assistant_message(content, response.retrieved_knowledge);

            SendResolution {
                refresh_sessions: true,
                refresh_session_docs,
                dropped: false,
            }
        }
        Err(error) => {
            tracing::warn!("chat request failed: {error}");
            store.push_assistant_message(ERROR_FALLBACK, None);
            SendResolution {
                refresh_sessions: false,
                refresh_session_docs: false,
                dropped: false,
            }
        }
    }
}
