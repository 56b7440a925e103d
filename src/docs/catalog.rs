//! Refreshable document catalogs.
//!
//! Two collections exist: the global knowledge base and the attachments of
//! the active session. They never share entries, and refreshing one never
//! touches the other. The session-scoped catalog applies the same
//! stamp-and-validate rule as chat replies: a refresh that finishes after the
//! user switched sessions is discarded.

use crate::api::types::DocumentInfo;
use crate::chat::session::SessionId;

/// Which collection an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocScope {
    KnowledgeBase,
    Session,
}

/// One refreshable catalog of documents.
#[derive(Debug, Default)]
pub struct DocumentCatalog {
    documents: Vec<DocumentInfo>,
    is_loading: bool,
}

impl DocumentCatalog {
    pub fn documents(&self) -> &[DocumentInfo] {
        &self.documents
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn begin_refresh(&mut self) {
        self.is_loading = true;
    }

    /// Replace the catalog with a fetched listing.
    pub fn apply(&mut self, documents: Vec<DocumentInfo>) {
        self.documents = documents;
        self.is_loading = false;
    }

    /// A failed refresh leaves the previous listing in place.
    pub fn fail(&mut self) {
        self.is_loading = false;
    }
}

/// The session-scoped catalog. Every refresh is stamped with the session it
/// was issued for; completions whose stamp no longer matches the active
/// session are dropped so the catalog only ever shows the active session's
/// attachments.
#[derive(Debug, Default)]
pub struct SessionDocuments {
    catalog: DocumentCatalog,
}

impl SessionDocuments {
    pub fn documents(&self) -> &[DocumentInfo] {
        self.catalog.documents()
    }

    pub fn is_loading(&self) -> bool {
        self.catalog.is_loading()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    pub fn begin_refresh(&mut self) {
        self.catalog.begin_refresh();
    }

    /// Apply a listing fetched for `fetched_for`. Returns false (and leaves
    /// the catalog unchanged) when the user has switched to another session
    /// in the meantime.
    pub fn apply(
        &mut self,
        fetched_for: &SessionId,
        active_id: &SessionId,
        documents: Vec<DocumentInfo>,
    ) -> bool {
        if fetched_for != active_id {
            tracing::debug!(
                fetched_for = %fetched_for,
                active = %active_id,
                "dropping stale session document listing"
            );
            self.catalog.fail();
            return false;
        }
        self.catalog.apply(documents);
        true
    }

    pub fn fail(&mut self) {
        self.catalog.fail();
    }

    /// A fresh session starts with no attachments; clear immediately rather
    /// than waiting for the re-fetch.
    pub fn reset(&mut self) {
        self.catalog.documents.clear();
        self.catalog.is_loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: &str, session_id: &str) -> DocumentInfo {
        DocumentInfo {
            id: id.to_string(),
            filename: format!("{id}.pdf"),
            session_id: session_id.to_string(),
            upload_time: "2025-06-01T10:00:00Z".to_string(),
            size: 1024,
            chunk_count: 2,
        }
    }

    #[test]
    fn test_refresh_replaces_listing() {
        let mut catalog = DocumentCatalog::default();
        catalog.begin_refresh();
        catalog.apply(vec![doc("d1", ""), doc("d2", "")]);
        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_loading());
    }

    #[test]
    fn test_failed_refresh_keeps_previous_listing() {
        let mut catalog = DocumentCatalog::default();
        catalog.apply(vec![doc("d1", "")]);

        catalog.begin_refresh();
        catalog.fail();

        assert_eq!(catalog.len(), 1);
        assert!(!catalog.is_loading());
    }

    #[test]
    fn test_empty_listing_applies_cleanly() {
        let mut catalog = DocumentCatalog::default();
        catalog.apply(vec![doc("d1", "")]);
        catalog.apply(Vec::new());
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_stale_session_listing_is_dropped() {
        let mut docs = SessionDocuments::default();
        let session_a = SessionId::from("a");
        let session_b = SessionId::from("b");
        docs.apply(&session_b, &session_b, vec![doc("d-b", "b")]);

        // A listing fetched for session A arrives while B is active.
        let applied = docs.apply(&session_a, &session_b, vec![doc("d-a", "a")]);

        assert!(!applied);
        assert_eq!(docs.documents().len(), 1);
        assert_eq!(docs.documents()[0].id, "d-b");
    }

    #[test]
    fn test_matching_session_listing_applies() {
        let mut docs = SessionDocuments::default();
        let session = SessionId::from("a");
        let applied = docs.apply(&session, &session, vec![doc("d1", "a")]);
        assert!(applied);
        assert_eq!(docs.documents().len(), 1);
    }

    #[test]
    fn test_reset_clears_attachments() {
        let mut docs = SessionDocuments::default();
        let session = SessionId::from("a");
        docs.apply(&session, &session, vec![doc("d1", "a")]);
        docs.reset();
        assert!(docs.is_empty());
    }
}
