//! medinest-core - Core library for the MediNest shell
//!
//! Target-independent pieces of the login-gated shell: the session model and
//! its storage seam, the route table with its guard, the sidebar navigation
//! model, mobile menu state and the static home page content.

pub mod config;
pub mod credentials;
pub mod error;
pub mod home;
pub mod menu;
pub mod navigation;
pub mod routes;
pub mod session;
pub mod storage;

pub use config::{ShellConfig, ToastPosition, UnknownRoutePolicy};
pub use credentials::{LoginForm, SignupForm};
pub use error::{ConfigError, CredentialError, StorageError};
pub use menu::MobileMenu;
pub use navigation::{nav_descriptors, nav_entries, Accent, Icon, NavDescriptor, NavEntry};
pub use routes::{
    normalize_path, route_descriptors, Access, AppRoute, GuardDecision, Resolution,
    RouteDescriptor, RouteTable,
};
pub use session::{SessionManager, SessionQuery, SessionRecord, SessionState};
pub use storage::{MemoryStorage, SessionStorage};
