//! Session state and the send/response correlation logic.

pub mod exchange;
pub mod message;
pub mod session;
pub mod store;

pub use exchange::{PendingChat, SendResolution};
pub use message::{ChatMessage, MessageRole};
pub use session::SessionId;
pub use store::SessionStore;
