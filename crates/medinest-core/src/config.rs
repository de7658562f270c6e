//! Shell configuration
//!
//! Every field has a default, so a partial JSON file (or none at all) is a
//! valid configuration.

use crate::error::ConfigError;
use crate::routes::{Access, AppRoute};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Longest accepted session lifetime (ten years)
pub const MAX_SESSION_TTL_HOURS: u32 = 10 * 365 * 24;

/// What an authenticated visitor sees on a path outside the route table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownRoutePolicy {
    /// Render the not-found view inside the shell
    #[default]
    NotFound,
    /// Render the home view inside the shell
    Home,
}

/// Corner the toast stack is anchored to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ToastPosition {
    /// CSS modifier class for the toast container
    pub fn class(&self) -> &'static str {
        match self {
            ToastPosition::TopLeft => "toast-top-left",
            ToastPosition::TopRight => "toast-top-right",
            ToastPosition::BottomLeft => "toast-bottom-left",
            ToastPosition::BottomRight => "toast-bottom-right",
        }
    }
}

/// Configuration of the routed shell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Brand shown in the sidebar header and document titles
    pub brand: String,
    /// Storage key of the "logged in" flag
    pub session_key: String,
    /// Storage key of the JSON session record (token + expiry)
    pub session_record_key: String,
    /// Where unauthenticated visitors are sent
    pub login_path: String,
    pub unknown_route: UnknownRoutePolicy,
    pub toast_position: ToastPosition,
    /// Lifetime of sessions created by sign-in; `None` never expires
    pub session_ttl_hours: Option<u32>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            brand: "MediNest".to_string(),
            session_key: "isLoggedIn".to_string(),
            session_record_key: "medinest_session".to_string(),
            login_path: "/login".to_string(),
            unknown_route: UnknownRoutePolicy::NotFound,
            toast_position: ToastPosition::TopRight,
            session_ttl_hours: None,
        }
    }
}

impl ShellConfig {
    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|source| ConfigError::JsonParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content, path)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session_key.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "session_key",
                message: "must not be empty".to_string(),
            });
        }
        if self.session_record_key.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "session_record_key",
                message: "must not be empty".to_string(),
            });
        }
        if self.session_key == self.session_record_key {
            return Err(ConfigError::Invalid {
                field: "session_record_key",
                message: "must differ from session_key".to_string(),
            });
        }
        if !self.login_path.starts_with('/') {
            return Err(ConfigError::Invalid {
                field: "login_path",
                message: format!("'{}' must start with '/'", self.login_path),
            });
        }
        // A guarded redirect target would loop
        if AppRoute::from_path(&self.login_path).map(|r| r.access()) != Some(Access::Public) {
            return Err(ConfigError::Invalid {
                field: "login_path",
                message: format!("'{}' is not a public route", self.login_path),
            });
        }
        match self.session_ttl_hours {
            Some(0) => {
                return Err(ConfigError::Invalid {
                    field: "session_ttl_hours",
                    message: "must be positive (omit it for sessions that never expire)"
                        .to_string(),
                });
            }
            Some(hours) if hours > MAX_SESSION_TTL_HOURS => {
                return Err(ConfigError::Invalid {
                    field: "session_ttl_hours",
                    message: format!("{} exceeds the maximum of {}", hours, MAX_SESSION_TTL_HOURS),
                });
            }
            _ => {}
        }
        Ok(())
    }

    /// "Dashboard · MediNest"
    pub fn page_title(&self, view: &str) -> String {
        format!("{} · {}", view, self.brand)
    }
}
