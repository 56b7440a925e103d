//! Chat message types.

use serde::{Deserialize, Serialize};

/// Role of a chat message (the backend calls the assistant "ai").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageRole {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "ai")]
    Assistant,
}

/// A single transcript entry. Append-only; never mutated after append.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
    /// Retrieval citations attached to an assistant reply, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retrieved_knowledge: Option<String>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
            retrieved_knowledge: None,
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
            retrieved_knowledge: None,
        }
    }

    pub fn assistant_with_knowledge(
        content: impl Into<String>,
        knowledge: Option<String>,
    ) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
            retrieved_knowledge: knowledge,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assistant_role_serializes_as_ai() {
        let msg = ChatMessage::assistant("hello");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains(r#""role":"ai""#));
    }

    #[test]
    fn test_history_message_parses() {
        let json = r#"{"role":"ai","content":"answer","retrievedKnowledge":"source text"}"#;
        let msg: ChatMessage = serde_json::from_str(json).unwrap();
        assert_eq!(msg.role, MessageRole::Assistant);
        assert_eq!(msg.retrieved_knowledge.as_deref(), Some("source text"));
    }

    #[test]
    fn test_knowledge_is_optional() {
        let json = r#"{"role":"user","content":"question"}"#;
        let msg: ChatMessage = serde_json::from_str(json).unwrap();
        assert!(msg.retrieved_knowledge.is_none());
    }
}
