//! Document collection operations: refresh, upload, delete, clear.

use std::path::PathBuf;

use crate::api::types::DocumentInfo;
use crate::chat::SessionId;
use crate::docs::DocScope;
use crate::ui::app::App;
use crate::ui::events::AppEvent;

impl App {
    /// Re-fetch the knowledge-base catalog.
    pub(super) fn refresh_knowledge(&mut self) {
        self.knowledge.begin_refresh();
        let api = self.api.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = api.list_documents(None).await.map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::KnowledgeListed { result });
        });
    }

    pub(super) fn handle_knowledge_listed(&mut self, result: Result<Vec<DocumentInfo>, String>) {
        match result {
            Ok(documents) => self.knowledge.apply(documents),
            Err(error) => {
                self.knowledge.fail();
                tracing::warn!("failed to list knowledge base: {error}");
            }
        }
    }

    /// Re-fetch the active session's attachments, stamped with the session
    /// they are fetched for.
    pub(super) fn refresh_session_docs(&mut self) {
        let for_session = self.store.active_id().clone();
        self.session_docs.begin_refresh();
        let api = self.api.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = api
                .list_documents(Some(for_session.as_str()))
                .await
                .map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::SessionDocsListed {
                for_session,
                result,
            });
        });
    }

    pub(super) fn handle_session_docs_listed(
        &mut self,
        for_session: SessionId,
        result: Result<Vec<DocumentInfo>, String>,
    ) {
        match result {
            Ok(documents) => {
                // Stale listings (user already switched away) are dropped.
                self.session_docs
                    .apply(&for_session, self.store.active_id(), documents);
            }
            Err(error) => {
                self.session_docs.fail();
                tracing::warn!("failed to list session documents: {error}");
            }
        }
    }

    /// Upload a file as an attachment of the active session.
    pub(super) fn upload_to_session(&mut self, path: PathBuf) {
        let session_id = self.store.active_id().clone();
        self.spawn_upload(path, Some(session_id), DocScope::Session);
    }

    /// Upload a file into the global knowledge base.
    pub(super) fn upload_to_knowledge(&mut self, path: PathBuf) {
        self.spawn_upload(path, None, DocScope::KnowledgeBase);
    }

    fn spawn_upload(&self, path: PathBuf, session_id: Option<SessionId>, scope: DocScope) {
        let api = self.api.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = api
                .upload_document(&path, session_id.as_ref().map(|id| id.as_str()))
                .await
                .map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::UploadCompleted { scope, result });
        });
    }

    pub(super) fn handle_upload_completed(
        &mut self,
        scope: DocScope,
        result: Result<DocumentInfo, String>,
    ) {
        match result {
            Ok(_) => match scope {
                DocScope::KnowledgeBase => self.refresh_knowledge(),
                DocScope::Session => self.refresh_session_docs(),
            },
            Err(error) => {
                tracing::error!("upload failed: {error}");
                self.notice = Some("Upload failed. Please try again.".into());
            }
        }
    }

    /// Issue the document delete the user just confirmed.
    pub(super) fn delete_document(&mut self, scope: DocScope, id: String) {
        let api = self.api.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = api
                .delete_document(&id)
                .await
                .map(|_| ())
                .map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::DocumentDeleted { scope, result });
        });
    }

    pub(super) fn handle_document_deleted(&mut self, scope: DocScope, result: Result<(), String>) {
        match result {
            // Only the owning catalog is refreshed.
            Ok(()) => match scope {
                DocScope::KnowledgeBase => self.refresh_knowledge(),
                DocScope::Session => self.refresh_session_docs(),
            },
            Err(error) => {
                tracing::error!("failed to delete document: {error}");
                self.notice = Some("Failed to delete the document. Please try again.".into());
            }
        }
    }

    /// Issue the bulk clear the user just confirmed.
    pub(super) fn clear_collection(&mut self, scope: DocScope) {
        let api = self.api.clone();
        let tx = self.event_tx.clone();
        let session_id = self.store.active_id().clone();
        tokio::spawn(async move {
            let result = match scope {
                DocScope::KnowledgeBase => api.clear_all_documents().await,
                DocScope::Session => api.clear_session_documents(session_id.as_str()).await,
            }
            .map(|_| ())
            .map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::CollectionCleared { scope, result });
        });
    }

    pub(super) fn handle_collection_cleared(
        &mut self,
        scope: DocScope,
        result: Result<(), String>,
    ) {
        match result {
            Ok(()) => match scope {
                DocScope::KnowledgeBase => self.refresh_knowledge(),
                DocScope::Session => self.refresh_session_docs(),
            },
            Err(error) => {
                tracing::error!("failed to clear collection: {error}");
                self.notice = Some("Failed to clear documents. Please try again.".into());
            }
        }
    }
}
