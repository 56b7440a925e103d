//! Integration tests for session switching racing in-flight sends.
//!
//! These exercise the same sequences the UI produces: begin a send, navigate
//! while it is pending, then resolve the completion and check what reached
//! the transcript.

use etalk::api::types::{ChatResponse, SessionDetail, SessionSummary};
use etalk::chat::exchange::{self, ERROR_FALLBACK};
use etalk::chat::store::GREETING;
use etalk::chat::{ChatMessage, MessageRole, SessionId, SessionStore};

fn summary(id: &str, title: &str) -> SessionSummary {
    SessionSummary {
        session_id: id.to_string(),
        title: title.to_string(),
        last_message_time: "2025-06-01T10:00:00Z".to_string(),
    }
}

fn detail(id: &str, messages: Vec<ChatMessage>) -> SessionDetail {
    SessionDetail {
        session_id: id.to_string(),
        messages,
    }
}

fn reply(session_id: &str, message: &str) -> ChatResponse {
    ChatResponse {
        message: message.to_string(),
        session_id: session_id.to_string(),
        retrieved_knowledge: None,
    }
}

/// The §-critical property: a reply that lands after the user switched
/// sessions never appears in the now-active transcript, no matter how many
/// switches happened while it was pending.
#[test]
fn test_pending_reply_never_lands_in_a_different_session() {
    let mut store = SessionStore::new();
    store.apply_loaded(detail("session-a", vec![ChatMessage::assistant(GREETING)]));

    let pending = exchange::begin(&mut store, "question for a").unwrap();

    // The user flips through several sessions while the request is pending.
    for id in ["session-b", "session-c", "session-d"] {
        store.apply_loaded(detail(id, vec![ChatMessage::assistant("hello")]));
    }
    let visible_before = store.messages().to_vec();

    let resolution = exchange::resolve(
        &mut store,
        &pending,
        Ok(reply("session-a", "late reply for a")),
    );

    assert!(resolution.dropped);
    assert!(resolution.refresh_sessions);
    assert_eq!(store.messages(), visible_before.as_slice());
    assert_eq!(store.active_id().as_str(), "session-d");
}

/// Switching to a new session and sending there does not wait for the old
/// session's request; both resolve against their own origins.
#[test]
fn test_interleaved_sends_on_two_sessions() {
    let mut store = SessionStore::new();
    store.apply_loaded(detail("session-a", Vec::new()));
    let first = exchange::begin(&mut store, "slow question").unwrap();

    store.apply_loaded(detail("session-b", Vec::new()));
    let second = exchange::begin(&mut store, "fast question").unwrap();

    // The second request completes first.
    let r2 = exchange::resolve(&mut store, &second, Ok(reply("session-b", "fast answer")));
    assert!(!r2.dropped);

    // The first completes afterwards, while B is still active.
    let r1 = exchange::resolve(&mut store, &first, Ok(reply("session-a", "slow answer")));
    assert!(r1.dropped);

    let contents: Vec<&str> = store
        .messages()
        .iter()
        .map(|m| m.content.as_str())
        .collect();
    assert_eq!(contents, vec!["fast question", "fast answer"]);
}

/// Failure of an abandoned request is equally invisible.
#[test]
fn test_failed_request_for_abandoned_session_changes_nothing() {
    let mut store = SessionStore::new();
    let pending = exchange::begin(&mut store, "question").unwrap();

    store.apply_loaded(detail("session-b", vec![ChatMessage::assistant("prior")]));

    exchange::resolve(&mut store, &pending, Err("boom".to_string()));

    assert_eq!(store.messages().len(), 1);
    assert_eq!(store.messages()[0].content, "prior");
}

/// A full first-conversation round trip: greeting, optimistic user message,
/// server-issued id adoption, reply append.
#[test]
fn test_first_conversation_adopts_server_id() {
    let mut store = SessionStore::new();
    let client_id = store.active_id().clone();

    let pending = exchange::begin(&mut store, "hello there").unwrap();
    assert!(pending.wire_session_id.is_none());

    let resolution = exchange::resolve(&mut store, &pending, Ok(reply("server-1", "welcome")));

    assert!(!resolution.dropped);
    assert!(resolution.refresh_session_docs);
    assert_ne!(store.active_id(), &client_id);
    assert_eq!(store.active_id().as_str(), "server-1");

    let roles: Vec<MessageRole> = store.messages().iter().map(|m| m.role).collect();
    assert_eq!(
        roles,
        vec![
            MessageRole::Assistant, // greeting
            MessageRole::User,
            MessageRole::Assistant,
        ]
    );

    // The next send now carries the adopted id.
    let next = exchange::begin(&mut store, "follow-up").unwrap();
    assert_eq!(next.wire_session_id.unwrap().as_str(), "server-1");
}

/// Deleting the active session behaves exactly like starting a new chat.
#[test]
fn test_delete_active_session_equals_new_chat() {
    let mut store = SessionStore::new();
    store.apply_loaded(detail("session-a", vec![ChatMessage::assistant("old")]));
    store.set_sessions(vec![summary("session-a", "a"), summary("session-b", "b")]);

    assert!(store.remove_session(&SessionId::from("session-a")));

    assert_eq!(store.messages().len(), 1);
    assert_eq!(store.messages()[0].content, GREETING);
    assert!(!store.is_persisted());
    assert!(store
        .sessions()
        .iter()
        .all(|s| s.session_id != "session-a"));
}

/// A failed transcript load leaves the active session fully intact.
#[test]
fn test_load_failure_keeps_prior_state() {
    let mut store = SessionStore::new();
    store.apply_loaded(detail("session-a", vec![ChatMessage::assistant("kept")]));

    // The app layer only calls apply_loaded on success; a failure path just
    // clears the loading flag.
    store.begin_session_load();
    assert!(store.is_loading_session());
    store.finish_session_load();

    assert_eq!(store.active_id().as_str(), "session-a");
    assert_eq!(store.messages()[0].content, "kept");
    assert!(!store.is_loading_session());
}

/// The error fallback is a normal transcript append: later exchanges carry on.
#[test]
fn test_conversation_continues_after_error_fallback() {
    let mut store = SessionStore::new();
    store.apply_loaded(detail("session-a", Vec::new()));

    let pending = exchange::begin(&mut store, "first try").unwrap();
    exchange::resolve(&mut store, &pending, Err("timeout".to_string()));
    assert_eq!(store.messages().last().unwrap().content, ERROR_FALLBACK);

    let retry = exchange::begin(&mut store, "second try").unwrap();
    let resolution = exchange::resolve(&mut store, &retry, Ok(reply("session-a", "worked")));
    assert!(!resolution.dropped);
    assert_eq!(store.messages().last().unwrap().content, "worked");
}
