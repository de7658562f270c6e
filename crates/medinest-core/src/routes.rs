//! Route table and route guard
//!
//! Every path the shell knows is an [`AppRoute`] carrying its [`Access`] tag,
//! so the guard is a lookup rather than structure: public routes always
//! render, guarded routes render only for an authenticated session.
//!
//! Matching follows the browser router the shell replaces: case-insensitive,
//! trailing slashes ignored, query string and fragment dropped.

use crate::config::{ShellConfig, UnknownRoutePolicy};
use crate::session::SessionQuery;
use serde::Serialize;
use tracing::debug;

/// Access level of a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    /// Reachable without a session (login, signup)
    Public,
    /// Reachable only with an authenticated session
    Guarded,
}

/// Every view the shell can render at a literal path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Login,
    Signup,
    Home,
    Dashboard,
    UploadPrescription,
    Reminders,
    Symptoms,
    Consultations,
    Chatbot,
    Emergency,
    Language,
    Profile,
}

impl AppRoute {
    /// Route table in declaration order, public routes first
    pub const ALL: [AppRoute; 12] = [
        AppRoute::Login,
        AppRoute::Signup,
        AppRoute::Home,
        AppRoute::Dashboard,
        AppRoute::UploadPrescription,
        AppRoute::Reminders,
        AppRoute::Symptoms,
        AppRoute::Consultations,
        AppRoute::Chatbot,
        AppRoute::Emergency,
        AppRoute::Language,
        AppRoute::Profile,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            AppRoute::Login => "/login",
            AppRoute::Signup => "/signup",
            AppRoute::Home => "/",
            AppRoute::Dashboard => "/dashboard",
            AppRoute::UploadPrescription => "/upload",
            AppRoute::Reminders => "/reminders",
            AppRoute::Symptoms => "/symptoms",
            AppRoute::Consultations => "/consultations",
            AppRoute::Chatbot => "/chatbot",
            AppRoute::Emergency => "/emergency",
            AppRoute::Language => "/language",
            AppRoute::Profile => "/profile",
        }
    }

    /// Name of the view component bound to this route
    pub fn view_name(&self) -> &'static str {
        match self {
            AppRoute::Login => "Login",
            AppRoute::Signup => "Signup",
            AppRoute::Home => "Home",
            AppRoute::Dashboard => "Dashboard",
            AppRoute::UploadPrescription => "UploadPrescription",
            AppRoute::Reminders => "Reminders",
            AppRoute::Symptoms => "Symptoms",
            AppRoute::Consultations => "Consultations",
            AppRoute::Chatbot => "Chatbot",
            AppRoute::Emergency => "Emergency",
            AppRoute::Language => "Language",
            AppRoute::Profile => "Profile",
        }
    }

    /// Human-readable title, used for document titles
    pub fn title(&self) -> &'static str {
        match self {
            AppRoute::Login => "Log In",
            AppRoute::Signup => "Sign Up",
            AppRoute::Home => "Home",
            AppRoute::Dashboard => "Dashboard",
            AppRoute::UploadPrescription => "Upload Prescription",
            AppRoute::Reminders => "Reminders",
            AppRoute::Symptoms => "Symptoms",
            AppRoute::Consultations => "Consultations",
            AppRoute::Chatbot => "AI Chatbot",
            AppRoute::Emergency => "Emergency",
            AppRoute::Language => "Language",
            AppRoute::Profile => "Profile",
        }
    }

    pub fn access(&self) -> Access {
        match self {
            AppRoute::Login | AppRoute::Signup => Access::Public,
            _ => Access::Guarded,
        }
    }

    pub fn is_guarded(&self) -> bool {
        self.access() == Access::Guarded
    }

    /// Look up the route bound to `path`
    pub fn from_path(path: &str) -> Option<Self> {
        let path = normalize_path(path);
        Self::ALL
            .into_iter()
            .find(|route| route.path().eq_ignore_ascii_case(path))
    }

    /// Guarded routes, in table order
    pub fn guarded() -> impl Iterator<Item = AppRoute> {
        Self::ALL.into_iter().filter(AppRoute::is_guarded)
    }

    pub fn descriptor(&self) -> RouteDescriptor {
        RouteDescriptor {
            path: self.path(),
            view: self.view_name(),
            guarded: self.is_guarded(),
        }
    }
}

/// Serializable summary of one route, as listed by the CLI and `/api/routes`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub view: &'static str,
    pub guarded: bool,
}

/// Descriptors for the whole route table, in table order
pub fn route_descriptors() -> Vec<RouteDescriptor> {
    AppRoute::ALL.iter().map(AppRoute::descriptor).collect()
}

/// Strip query string, fragment and trailing slashes; empty becomes `/`
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Outcome of the guard for one navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect { to: String },
}

/// Outcome of resolving a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Render the view bound to this route
    Render(AppRoute),
    /// Navigate elsewhere instead of rendering anything
    Redirect { to: String },
    /// Authenticated visitor on a path outside the table
    NotFound,
}

impl Resolution {
    pub fn route(&self) -> Option<AppRoute> {
        match self {
            Resolution::Render(route) => Some(*route),
            _ => None,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Resolution::Redirect { .. })
    }
}

/// Resolves paths to views, applying the route guard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    login_path: String,
    unknown_route: UnknownRoutePolicy,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::from_config(&ShellConfig::default())
    }
}

impl RouteTable {
    pub fn from_config(config: &ShellConfig) -> Self {
        Self {
            login_path: config.login_path.clone(),
            unknown_route: config.unknown_route,
        }
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    /// Guard check for a given access level; the session is queried on
    /// every call
    pub fn check(&self, access: Access, session: &dyn SessionQuery) -> GuardDecision {
        match access {
            Access::Public => GuardDecision::Allow,
            Access::Guarded if session.is_authenticated() => GuardDecision::Allow,
            Access::Guarded => GuardDecision::Redirect {
                to: self.login_path.clone(),
            },
        }
    }

    /// Resolve `path` for the given session
    ///
    /// A known route spelled with different casing resolves to a redirect to
    /// its canonical path once the guard lets it through.
    ///
    /// Unknown paths sit behind the guard like every other non-public path:
    /// logged-out visitors are redirected, logged-in ones get the configured
    /// unknown-route view.
    pub fn resolve(&self, path: &str, session: &dyn SessionQuery) -> Resolution {
        let route = AppRoute::from_path(path);
        let access = route.map_or(Access::Guarded, |r| r.access());

        if let GuardDecision::Redirect { to } = self.check(access, session) {
            debug!(path, to = %to, "guard redirect");
            return Resolution::Redirect { to };
        }

        match (route, self.unknown_route) {
            // Same view, differently cased: send the browser to the real path
            (Some(route), _) if normalize_path(path) != route.path() => {
                debug!(path, to = route.path(), "canonical redirect");
                Resolution::Redirect {
                    to: route.path().to_string(),
                }
            }
            (Some(route), _) => Resolution::Render(route),
            (None, UnknownRoutePolicy::Home) => Resolution::Render(AppRoute::Home),
            (None, UnknownRoutePolicy::NotFound) => {
                debug!(path, "no route matched");
                Resolution::NotFound
            }
        }
    }
}
