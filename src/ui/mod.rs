pub mod app;
pub mod components;
pub mod events;
pub mod sidebar;

pub use app::App;
pub use events::AppEvent;
pub use sidebar::{SidebarState, SidebarTab};
