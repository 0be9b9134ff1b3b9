use tracing::{debug, info, warn};

use super::credentials::CredentialDirectory;
use crate::error::AuthError;
use crate::models::{Principal, Role};
use crate::store::KeyValueStore;

/// Key of the persisted session slot.
pub const SESSION_KEY: &str = "attendance_user";

/// Who is signed in, if anyone.
///
/// The context owns the durable store. `login` and `logout` update the
/// in-memory slot and the persisted copy together; `restore` rebuilds the
/// context from whatever the store holds. Callers pass the context around
/// explicitly instead of reaching for a global.
#[derive(Debug)]
pub struct SessionContext<S: KeyValueStore> {
    store: S,
    current: Option<Principal>,
}

impl<S: KeyValueStore> SessionContext<S> {
    /// A signed-out context. Does not touch the store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            current: None,
        }
    }

    /// Rebuild the context from the persisted slot.
    ///
    /// A missing, unreadable or malformed entry leaves the context signed out.
    pub fn restore(store: S) -> Self {
        let current = match store.load_json::<Principal>(SESSION_KEY) {
            Ok(Some(principal)) => {
                info!(role = %principal.role(), "Restored session");
                Some(principal)
            }
            Ok(None) => {
                debug!("No saved session");
                None
            }
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable saved session");
                None
            }
        };
        Self { store, current }
    }

    /// Authenticate and, on success, make the principal current and persist it.
    ///
    /// A failed write is logged; the in-memory session still starts.
    pub fn login(
        &mut self,
        directory: &CredentialDirectory,
        identifier: &str,
        secret: &str,
    ) -> Result<Principal, AuthError> {
        let principal = directory.authenticate(identifier, secret)?;
        if let Err(e) = self.store.save_json(SESSION_KEY, &principal) {
            warn!(error = %e, "Failed to persist session");
        }
        self.current = Some(principal.clone());
        Ok(principal)
    }

    /// Clear the current principal and the persisted slot.
    pub fn logout(&mut self) {
        if let Some(ref principal) = self.current {
            info!(role = %principal.role(), "Logged out");
        }
        self.current = None;
        if let Err(e) = self.store.remove(SESSION_KEY) {
            warn!(error = %e, "Failed to clear saved session");
        }
    }

    pub fn current(&self) -> Option<&Principal> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.current.as_ref().map(|p| p.role())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
