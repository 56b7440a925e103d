mod chat_view;
mod confirm_dialog;
mod input_box;
mod sidebar_panel;

pub use chat_view::{ChatView, ChatViewState};
pub use confirm_dialog::{ConfirmAction, ConfirmDialog};
pub use input_box::InputBox;
pub use sidebar_panel::SidebarPanel;
