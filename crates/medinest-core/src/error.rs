//! Error types for medinest-core
//!
//! None of these reach the user as an error screen: the session layer turns
//! storage failures into "logged out" and the views report form problems via
//! toasts. They exist so failures stay visible in logs and tests.

use std::path::PathBuf;
use thiserror::Error;

/// Failures of the durable key-value store backing the session flag
#[derive(Error, Debug)]
pub enum StorageError {
    // ===================
    // Availability
    // ===================
    #[error("Storage unavailable: {reason}")]
    Unavailable { reason: String },

    // ===================
    // Access Errors
    // ===================
    #[error("Failed to read key '{key}': {message}")]
    Read { key: String, message: String },

    #[error("Failed to write key '{key}': {message}")]
    Write { key: String, message: String },

    #[error("Failed to remove key '{key}': {message}")]
    Remove { key: String, message: String },

    // ===================
    // Encoding Errors
    // ===================
    #[error("Failed to encode session record under '{key}'")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Session lifetime of {ttl_hours}h puts the expiry out of range")]
    ExpiryOutOfRange { ttl_hours: i64 },
}

/// Invalid shell configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config in {path}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {field} - {message}")]
    Invalid { field: &'static str, message: String },
}

/// Rejected login or signup input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("'{email}' is not a valid email address")]
    InvalidEmail { email: String },

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },
}
