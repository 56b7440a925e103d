pub mod api;
pub mod chat;
pub mod config;
pub mod docs;
pub mod ui;
pub mod util;

pub use api::{ApiClient, ApiError};
pub use chat::{ChatMessage, MessageRole, SessionId, SessionStore};
pub use config::Config;
pub use docs::{DocScope, DocumentCatalog, SessionDocuments};
pub use ui::App;
