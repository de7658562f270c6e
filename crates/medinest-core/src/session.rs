//! Session model and its manager
//!
//! The persisted "logged in" flag stays the source of truth for gating:
//! `isLoggedIn = "true"` on its own is a valid session. Sign-in additionally
//! writes a [`SessionRecord`] carrying a token and an optional expiry, and an
//! expired record downgrades the flag to logged out.
//!
//! Reads never fail: any storage error or malformed value resolves to
//! [`SessionState::Unauthenticated`].

use crate::config::ShellConfig;
use crate::error::StorageError;
use crate::storage::SessionStorage;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Literal stored under the flag key for a logged-in visitor
pub const FLAG_TRUE: &str = "true";
/// Literal stored under the flag key after sign-out
pub const FLAG_FALSE: &str = "false";

/// Typed session state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Unauthenticated,
    Authenticated {
        /// Absent when only the bare flag was persisted
        token: Option<String>,
        /// Absent for sessions that never expire
        expires_at: Option<DateTime<Utc>>,
    },
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated { .. })
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            SessionState::Authenticated { token, .. } => token.as_deref(),
            SessionState::Unauthenticated => None,
        }
    }
}

/// Explicit authentication query used by the route guard
pub trait SessionQuery {
    fn is_authenticated(&self) -> bool;
}

impl SessionQuery for SessionState {
    fn is_authenticated(&self) -> bool {
        SessionState::is_authenticated(self)
    }
}

impl SessionQuery for bool {
    fn is_authenticated(&self) -> bool {
        *self
    }
}

/// JSON record persisted next to the flag on sign-in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub token: String,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl SessionRecord {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }
}

/// Token for sessions created without a backend
pub fn issue_local_token(now: DateTime<Utc>) -> String {
    format!("local-{}", now.timestamp_millis())
}

/// Owns the session flag and record in a [`SessionStorage`]
#[derive(Debug, Clone)]
pub struct SessionManager<S> {
    storage: S,
    flag_key: String,
    record_key: String,
    ttl: Option<Duration>,
}

impl<S: SessionStorage> SessionManager<S> {
    /// Manager using the default keys (`isLoggedIn`, `medinest_session`)
    pub fn new(storage: S) -> Self {
        Self::from_config(storage, &ShellConfig::default())
    }

    pub fn from_config(storage: S, config: &ShellConfig) -> Self {
        Self {
            storage,
            flag_key: config.session_key.clone(),
            record_key: config.session_record_key.clone(),
            ttl: config
                .session_ttl_hours
                .map(|hours| Duration::hours(i64::from(hours))),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn flag_key(&self) -> &str {
        &self.flag_key
    }

    /// Current state, read fresh from storage
    pub fn state(&self) -> SessionState {
        self.state_at(Utc::now())
    }

    /// State as of `now`, read fresh from storage
    pub fn state_at(&self, now: DateTime<Utc>) -> SessionState {
        let flag = match self.storage.get(&self.flag_key) {
            Ok(flag) => flag,
            Err(e) => {
                warn!(key = %self.flag_key, error = %e, "session flag unreadable, treating as logged out");
                return SessionState::Unauthenticated;
            }
        };

        if flag.as_deref() != Some(FLAG_TRUE) {
            return SessionState::Unauthenticated;
        }

        match self.read_record() {
            Some(record) if record.is_expired(now) => {
                debug!(expires_at = ?record.expires_at, "session record expired");
                SessionState::Unauthenticated
            }
            Some(record) => SessionState::Authenticated {
                token: Some(record.token),
                expires_at: record.expires_at,
            },
            None => SessionState::Authenticated {
                token: None,
                expires_at: None,
            },
        }
    }

    fn read_record(&self) -> Option<SessionRecord> {
        let raw = match self.storage.get(&self.record_key) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!(key = %self.record_key, error = %e, "session record unreadable");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                debug!(key = %self.record_key, error = %e, "ignoring malformed session record");
                None
            }
        }
    }

    /// Mark the visitor as logged in
    pub fn sign_in(&self, token: impl Into<String>) -> Result<SessionState, StorageError> {
        self.sign_in_at(token, Utc::now())
    }

    /// Sign in with a locally issued token (no account backend)
    pub fn sign_in_local(&self) -> Result<SessionState, StorageError> {
        let now = Utc::now();
        self.sign_in_at(issue_local_token(now), now)
    }

    pub fn sign_in_at(
        &self,
        token: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<SessionState, StorageError> {
        let expires_at = match self.ttl {
            Some(ttl) => Some(now.checked_add_signed(ttl).ok_or(
                StorageError::ExpiryOutOfRange {
                    ttl_hours: ttl.num_hours(),
                },
            )?),
            None => None,
        };
        let record = SessionRecord {
            token: token.into(),
            expires_at,
        };
        let json = serde_json::to_string(&record).map_err(|source| StorageError::Encode {
            key: self.record_key.clone(),
            source,
        })?;

        self.storage.set(&self.record_key, &json)?;
        self.storage.set(&self.flag_key, FLAG_TRUE)?;

        info!(expires_at = ?record.expires_at, "session started");
        Ok(SessionState::Authenticated {
            token: Some(record.token),
            expires_at: record.expires_at,
        })
    }

    /// Mark the visitor as logged out and drop the session record
    pub fn sign_out(&self) -> Result<(), StorageError> {
        self.storage.set(&self.flag_key, FLAG_FALSE)?;
        self.storage.remove(&self.record_key)?;
        info!("session ended");
        Ok(())
    }
}

impl<S: SessionStorage> SessionQuery for SessionManager<S> {
    fn is_authenticated(&self) -> bool {
        self.state().is_authenticated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use chrono::TimeZone;

    /// Storage whose every access fails
    struct BrokenStorage;

    impl SessionStorage for BrokenStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Read {
                key: key.to_string(),
                message: "SecurityError".to_string(),
            })
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_string(),
                message: "QuotaExceededError".to_string(),
            })
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            Err(StorageError::Remove {
                key: key.to_string(),
                message: "SecurityError".to_string(),
            })
        }
    }

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_absent_flag_is_unauthenticated() {
        let manager = SessionManager::new(MemoryStorage::new());
        assert_eq!(manager.state(), SessionState::Unauthenticated);
    }

    #[test]
    fn test_only_exact_true_string_authenticates() {
        for value in ["false", "TRUE", "True", "1", "", "yes", " true"] {
            let storage = MemoryStorage::with_entries([("isLoggedIn", value)]);
            let manager = SessionManager::new(storage);
            assert!(!manager.is_authenticated(), "value {:?} must not authenticate", value);
        }
    }

    #[test]
    fn test_bare_legacy_flag_authenticates_without_token() {
        let storage = MemoryStorage::with_entries([("isLoggedIn", "true")]);
        let manager = SessionManager::new(storage);

        let state = manager.state();
        assert!(state.is_authenticated());
        assert_eq!(state.token(), None);
    }

    #[test]
    fn test_sign_in_then_sign_out() {
        let storage = MemoryStorage::new();
        let manager = SessionManager::new(storage.clone());

        let state = manager.sign_in_at("local-1", at(9)).unwrap();
        assert_eq!(state.token(), Some("local-1"));
        assert_eq!(storage.get("isLoggedIn").unwrap().as_deref(), Some("true"));
        assert_eq!(manager.state_at(at(10)), state);

        manager.sign_out().unwrap();
        assert_eq!(storage.get("isLoggedIn").unwrap().as_deref(), Some("false"));
        assert_eq!(storage.get("medinest_session").unwrap(), None);
        assert!(!manager.is_authenticated());
    }

    #[test]
    fn test_session_with_ttl_expires() {
        let config = ShellConfig {
            session_ttl_hours: Some(2),
            ..Default::default()
        };
        let manager = SessionManager::from_config(MemoryStorage::new(), &config);

        manager.sign_in_at("local-2", at(9)).unwrap();
        assert!(manager.state_at(at(10)).is_authenticated());
        // Expiry instant itself is already expired
        assert_eq!(manager.state_at(at(11)), SessionState::Unauthenticated);
    }

    #[test]
    fn test_out_of_range_ttl_is_an_error() {
        let storage = MemoryStorage::new();
        let config = ShellConfig {
            session_ttl_hours: Some(u32::MAX),
            ..Default::default()
        };
        let manager = SessionManager::from_config(&storage, &config);

        let err = manager.sign_in_at("local-3", at(9)).unwrap_err();
        assert!(matches!(err, StorageError::ExpiryOutOfRange { .. }));
        assert_eq!(storage.get("isLoggedIn").unwrap(), None);
        assert_eq!(manager.state_at(at(9)), SessionState::Unauthenticated);
    }

    #[test]
    fn test_malformed_record_falls_back_to_flag() {
        let storage = MemoryStorage::with_entries([
            ("isLoggedIn", "true"),
            ("medinest_session", "{not json"),
        ]);
        let manager = SessionManager::new(storage);

        assert_eq!(
            manager.state(),
            SessionState::Authenticated {
                token: None,
                expires_at: None
            }
        );
    }

    #[test]
    fn test_record_without_flag_is_unauthenticated() {
        let storage = MemoryStorage::with_entries([(
            "medinest_session",
            r#"{"token":"local-3","expires_at":null}"#,
        )]);
        assert!(!SessionManager::new(storage).is_authenticated());
    }

    #[test]
    fn test_broken_storage_fails_closed() {
        let manager = SessionManager::new(BrokenStorage);
        assert_eq!(manager.state(), SessionState::Unauthenticated);
        assert!(matches!(
            manager.sign_in("local-4"),
            Err(StorageError::Write { .. })
        ));
        assert!(manager.sign_out().is_err());
    }

    #[test]
    fn test_custom_keys_from_config() {
        let config = ShellConfig {
            session_key: "mn.loggedIn".to_string(),
            ..Default::default()
        };
        let storage = MemoryStorage::with_entries([("isLoggedIn", "true")]);
        let manager = SessionManager::from_config(storage.clone(), &config);
        assert!(!manager.is_authenticated());

        storage.set("mn.loggedIn", "true").unwrap();
        assert!(manager.is_authenticated());
        assert_eq!(manager.flag_key(), "mn.loggedIn");
    }

    #[test]
    fn test_local_token_is_timestamped() {
        assert_eq!(issue_local_token(at(0)), format!("local-{}", at(0).timestamp_millis()));
    }
}
