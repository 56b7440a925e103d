//! Wire types for the e-talk backend (camelCase JSON).

use serde::{Deserialize, Serialize};

use crate::chat::ChatMessage;

/// One entry in the session catalog (`GET /ai/history/list`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub session_id: String,
    pub title: String,
    /// Timestamp as the backend sends it; parsed only for display.
    pub last_message_time: String,
}

/// Full transcript of one session (`GET /ai/history/detail`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDetail {
    pub session_id: String,
    pub messages: Vec<ChatMessage>,
}

/// Request body for `POST /ai/chat/any`.
///
/// An omitted session id tells the backend to start a new conversation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub user_prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

/// Response body for `POST /ai/chat/any`.
///
/// `session_id` is authoritative: on the first turn of a new conversation it
/// differs from anything the client generated and must be adopted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    #[serde(default)]
    pub message: String,
    pub session_id: String,
    #[serde(default)]
    pub retrieved_knowledge: Option<String>,
}

/// One uploaded document (`GET /ai/doc/list`, `POST /ai/doc/upload`).
///
/// An empty `session_id` marks a knowledge-base document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentInfo {
    pub id: String,
    pub filename: String,
    #[serde(default)]
    pub session_id: String,
    pub upload_time: String,
    pub size: u64,
    pub chunk_count: u32,
}
