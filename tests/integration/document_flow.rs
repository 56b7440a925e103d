//! Integration tests for the two document collections.

use etalk::api::types::DocumentInfo;
use etalk::chat::SessionId;
use etalk::docs::{DocumentCatalog, SessionDocuments};

fn doc(id: &str, filename: &str, session_id: &str) -> DocumentInfo {
    DocumentInfo {
        id: id.to_string(),
        filename: filename.to_string(),
        session_id: session_id.to_string(),
        upload_time: "2025-06-01T10:00:00Z".to_string(),
        size: 4096,
        chunk_count: 4,
    }
}

/// Uploading to session A while session B becomes active must not leak A's
/// listing into B's catalog: the post-upload refresh was stamped for A and
/// arrives after the switch.
#[test]
fn test_upload_refresh_for_old_session_does_not_contaminate() {
    let mut session_docs = SessionDocuments::default();
    let session_a = SessionId::from("session-a");
    let session_b = SessionId::from("session-b");

    // B's catalog as loaded when B became active.
    session_docs.apply(&session_b, &session_b, vec![doc("b1", "notes.md", "session-b")]);

    // The refresh triggered by the upload to A finally completes.
    let applied = session_docs.apply(
        &session_a,
        &session_b,
        vec![
            doc("a1", "report.pdf", "session-a"),
            doc("a2", "data.xlsx", "session-a"),
        ],
    );

    assert!(!applied);
    let filenames: Vec<&str> = session_docs
        .documents()
        .iter()
        .map(|d| d.filename.as_str())
        .collect();
    assert_eq!(filenames, vec!["notes.md"]);
}

/// The knowledge base and the session catalog never share entries, and a
/// refresh of one leaves the other untouched.
#[test]
fn test_collections_are_independent() {
    let mut knowledge = DocumentCatalog::default();
    let mut session_docs = SessionDocuments::default();
    let session = SessionId::from("session-a");

    knowledge.apply(vec![doc("k1", "handbook.pdf", "")]);
    session_docs.apply(&session, &session, vec![doc("s1", "draft.docx", "session-a")]);

    // Refreshing the knowledge base with new contents.
    knowledge.apply(vec![doc("k2", "faq.md", ""), doc("k3", "policy.pdf", "")]);

    assert_eq!(knowledge.len(), 2);
    assert_eq!(session_docs.documents().len(), 1);
    assert_eq!(session_docs.documents()[0].id, "s1");
}

/// Clearing an empty collection succeeds and leaves it empty: applying the
/// post-clear listing of zero documents is a plain refresh.
#[test]
fn test_clear_empty_collection_is_a_noop() {
    let mut knowledge = DocumentCatalog::default();
    assert!(knowledge.is_empty());

    knowledge.begin_refresh();
    knowledge.apply(Vec::new());

    assert!(knowledge.is_empty());
    assert!(!knowledge.is_loading());
}

/// Switching sessions resets the attachment view immediately; the stamped
/// refresh then fills it for the new session only.
#[test]
fn test_session_switch_reset_then_refresh() {
    let mut session_docs = SessionDocuments::default();
    let session_a = SessionId::from("session-a");
    let session_b = SessionId::from("session-b");

    session_docs.apply(&session_a, &session_a, vec![doc("a1", "old.pdf", "session-a")]);

    // User switches to B: view resets, refresh for B goes out.
    session_docs.reset();
    session_docs.begin_refresh();
    assert!(session_docs.is_empty());

    let applied = session_docs.apply(&session_b, &session_b, vec![doc("b1", "new.pdf", "session-b")]);
    assert!(applied);
    assert_eq!(session_docs.documents()[0].filename, "new.pdf");
}

/// A failed listing keeps whatever was shown before.
#[test]
fn test_failed_refresh_preserves_catalog() {
    let mut session_docs = SessionDocuments::default();
    let session = SessionId::from("session-a");
    session_docs.apply(&session, &session, vec![doc("a1", "kept.pdf", "session-a")]);

    session_docs.begin_refresh();
    session_docs.fail();

    assert_eq!(session_docs.documents().len(), 1);
    assert!(!session_docs.is_loading());
}
