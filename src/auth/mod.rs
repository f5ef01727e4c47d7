//! Bearer token persistence and authentication state.
//!
//! The service issues an opaque bearer token at login. The token is the only
//! piece of state that outlives a session: it is saved on login and removed
//! on logout or as soon as the service rejects it.

mod file;
mod memory;

pub use file::FileTokenStore;
pub use memory::MemoryTokenStore;

use crate::error::Result;

/// Backend that persists the bearer token.
pub trait TokenStore: Send + Sync {
    /// Read the stored token, if any.
    fn load(&self) -> Result<Option<String>>;

    /// Persist a token, replacing any previous one.
    fn save(&self, token: &str) -> Result<()>;

    /// Remove the stored token. Removing an absent token is not an error.
    fn clear(&self) -> Result<()>;

    /// Name of this backend, for diagnostics.
    fn name(&self) -> &str;
}

/// Whether the wizard currently holds usable credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthState {
    /// No token; the user has to log in before any request.
    #[default]
    Unauthenticated,
    /// A token is stored and was not rejected yet.
    Authenticated,
    /// The service rejected the token mid-session; the user has to log in
    /// again, and the session is kept so work can resume afterwards.
    ReauthRequired,
}

impl AuthState {
    /// Derive the initial state from a token store.
    pub fn from_store(store: &dyn TokenStore) -> Self {
        match store.load() {
            Ok(Some(_)) => AuthState::Authenticated,
            Ok(None) => AuthState::Unauthenticated,
            Err(e) => {
                log::warn!("Could not read token from {}: {}", store.name(), e);
                AuthState::Unauthenticated
            }
        }
    }

    /// Whether requests can be made.
    pub fn is_authenticated(self) -> bool {
        matches!(self, AuthState::Authenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_state_from_store() {
        let store = MemoryTokenStore::new();
        assert_eq!(AuthState::from_store(&store), AuthState::Unauthenticated);

        store.save("abc").unwrap();
        assert_eq!(AuthState::from_store(&store), AuthState::Authenticated);
        assert!(AuthState::from_store(&store).is_authenticated());
    }

    #[test]
    fn test_reauth_is_not_authenticated() {
        assert!(!AuthState::ReauthRequired.is_authenticated());
        assert!(!AuthState::default().is_authenticated());
    }
}
