//! HTTP gateway to the e-talk backend

pub mod client;
pub mod error;
pub mod types;

pub use client::ApiClient;
pub use error::ApiError;
pub use types::{ChatRequest, ChatResponse, DocumentInfo, SessionDetail, SessionSummary};
