pub mod chat;
pub mod sidebar;
pub mod toasts;

pub use sidebar::SidebarAction;
