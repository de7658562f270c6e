//! Session context shared by the guard, the auth pages and the profile page

use leptos::prelude::*;
use medinest_core::{SessionManager, SessionQuery, SessionState, ShellConfig, StorageError};

use crate::storage::BrowserStorage;

/// Reactive handle on the persisted session
///
/// State is never cached: every query reads `localStorage` again. The
/// revision counter only exists so reactive readers re-run after this tab
/// signs in or out.
#[derive(Clone, Copy)]
pub struct SessionContext {
    revision: RwSignal<u64>,
    config: StoredValue<ShellConfig>,
}

impl SessionContext {
    pub fn new(config: ShellConfig) -> Self {
        Self {
            revision: RwSignal::new(0),
            config: StoredValue::new(config),
        }
    }

    fn manager(&self) -> SessionManager<BrowserStorage> {
        self.config
            .with_value(|config| SessionManager::from_config(BrowserStorage, config))
    }

    fn bump(&self) {
        self.revision.update(|r| *r += 1);
    }

    /// Current session, tracked
    pub fn state(&self) -> SessionState {
        self.revision.track();
        self.manager().state()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state().is_authenticated()
    }

    /// Start a local session
    pub fn sign_in(&self) -> Result<SessionState, StorageError> {
        let state = self.manager().sign_in_local()?;
        self.bump();
        Ok(state)
    }

    /// End the session
    pub fn sign_out(&self) -> Result<(), StorageError> {
        let result = self.manager().sign_out();
        // Re-evaluate the guard even when only part of the clear succeeded
        self.bump();
        result
    }
}

impl SessionQuery for SessionContext {
    fn is_authenticated(&self) -> bool {
        SessionContext::is_authenticated(self)
    }
}

/// Create the session context and provide it to descendants
pub fn provide_session(config: ShellConfig) -> SessionContext {
    let session = SessionContext::new(config);
    provide_context(session);
    session
}

/// Hook to access the session context
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
