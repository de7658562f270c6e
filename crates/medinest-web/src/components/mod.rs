//! Leptos UI components

mod empty_state;
mod icon;
mod mobile_toggle;
mod route_guard;
mod shell;
mod sidebar;
mod toast;

pub use empty_state::EmptyState;
pub use icon::{svg_markup, LucideIcon};
pub use mobile_toggle::MobileToggle;
pub use route_guard::RouteGuard;
pub use shell::Shell;
pub use sidebar::Sidebar;
pub use toast::{use_toast, Toast, ToastContainer, ToastContext, ToastProvider, ToastType};
