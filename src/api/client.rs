//! Async client for the e-talk backend REST API.
//!
//! Thin wrapper over `reqwest`; every call is a single request/response
//! exchange. Callers decide what a failure means for UI state.

use std::path::Path;

use reqwest::multipart::{Form, Part};
use reqwest::Client;

use crate::api::error::ApiError;
use crate::api::types::{ChatRequest, ChatResponse, DocumentInfo, SessionDetail, SessionSummary};

/// Client for the e-talk backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List all known sessions for the sidebar catalog.
    pub async fn list_sessions(&self) -> Result<Vec<SessionSummary>, ApiError> {
        let url = format!("{}/ai/history/list", self.base_url);
        let body = Self::check(self.client.get(&url).send().await?).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch the full transcript of one session.
    pub async fn session_detail(&self, session_id: &str) -> Result<SessionDetail, ApiError> {
        let url = format!("{}/ai/history/detail", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("sessionId", session_id)])
            .send()
            .await?;
        let body = Self::check(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Delete one session and its history.
    pub async fn delete_session(&self, session_id: &str) -> Result<(), ApiError> {
        let url = format!("{}/ai/history/delete", self.base_url);
        let response = self
            .client
            .delete(&url)
            .query(&[("sessionId", session_id)])
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Send a user prompt. `session_id = None` starts a new conversation;
    /// the backend's response carries the authoritative session id.
    pub async fn send_chat(
        &self,
        prompt: &str,
        session_id: Option<&str>,
    ) -> Result<ChatResponse, ApiError> {
        let url = format!("{}/ai/chat/any", self.base_url);
        let request = ChatRequest {
            user_prompt: prompt.to_string(),
            session_id: session_id.map(str::to_string),
        };
        let body = Self::check(self.client.post(&url).json(&request).send().await?).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// List documents. `session_id = None` queries the global knowledge base
    /// (the backend treats an empty id as "no owning session").
    pub async fn list_documents(
        &self,
        session_id: Option<&str>,
    ) -> Result<Vec<DocumentInfo>, ApiError> {
        let url = format!("{}/ai/doc/list", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("sessionId", session_id.unwrap_or(""))])
            .send()
            .await?;
        let body = Self::check(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Upload a file as a session attachment, or into the knowledge base
    /// when no session id is given.
    pub async fn upload_document(
        &self,
        path: &Path,
        session_id: Option<&str>,
    ) -> Result<DocumentInfo, ApiError> {
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        let bytes = tokio::fs::read(path).await?;

        let part = Part::bytes(bytes)
            .file_name(filename)
            .mime_str(mime.essence_str())?;
        let mut form = Form::new().part("file", part);
        if let Some(session_id) = session_id {
            form = form.text("sessionId", session_id.to_string());
        }

        let url = format!("{}/ai/doc/upload", self.base_url);
        let body = Self::check(self.client.post(&url).multipart(form).send().await?).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Delete one document from whichever collection owns it.
    pub async fn delete_document(&self, document_id: &str) -> Result<String, ApiError> {
        let url = format!("{}/ai/doc/{}", self.base_url, document_id);
        Self::check(self.client.delete(&url).send().await?).await
    }

    /// Delete every document attached to one session.
    pub async fn clear_session_documents(&self, session_id: &str) -> Result<String, ApiError> {
        let url = format!("{}/ai/doc/session/{}", self.base_url, session_id);
        Self::check(self.client.delete(&url).send().await?).await
    }

    /// Delete every document in the knowledge base.
    pub async fn clear_all_documents(&self) -> Result<String, ApiError> {
        let url = format!("{}/ai/doc/all", self.base_url);
        Self::check(self.client.delete(&url).send().await?).await
    }

    /// Read the body and turn non-success statuses into errors.
    async fn check(response: reqwest::Response) -> Result<String, ApiError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Status { status, body });
        }
        Ok(body)
    }
}
