//! Session registry: opaque token to user id.
//!
//! Tokens are derived from the user id and the login instant, which keeps
//! them unique per call in practice but makes them guessable; the registry
//! has no expiry and does not survive a restart. All of that matches the
//! backend this mock stands in for and must not be hardened here.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use gestmat_core::UserId;

/// Opaque session token handed out at login.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for SessionToken {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Session storage abstraction injected into request handlers.
///
/// `resolve` returning `None` means "unauthenticated".
pub trait SessionStore: Send + Sync {
    fn create(&self, user_id: UserId) -> SessionToken;
    fn resolve(&self, token: &SessionToken) -> Option<UserId>;
    /// Drop a session. Returns whether the token was known.
    fn revoke(&self, token: &SessionToken) -> bool;
}

/// In-memory session registry.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    inner: RwLock<HashMap<String, UserId>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live sessions. The registry only shrinks via `revoke`.
    pub fn len(&self) -> usize {
        self.inner.read().map(|map| map.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStore for InMemorySessionStore {
    fn create(&self, user_id: UserId) -> SessionToken {
        let token = SessionToken::new(format!(
            "session_{}_{}",
            user_id,
            Utc::now().timestamp_micros()
        ));

        if let Ok(mut map) = self.inner.write() {
            map.insert(token.as_str().to_string(), user_id);
        }

        token
    }

    fn resolve(&self, token: &SessionToken) -> Option<UserId> {
        let map = self.inner.read().ok()?;
        map.get(token.as_str()).copied()
    }

    fn revoke(&self, token: &SessionToken) -> bool {
        match self.inner.write() {
            Ok(mut map) => map.remove(token.as_str()).is_some(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_sessions_resolve_to_their_user() {
        let store = InMemorySessionStore::new();
        let token = store.create(UserId::new(2));
        assert_eq!(store.resolve(&token), Some(UserId::new(2)));
    }

    #[test]
    fn unknown_tokens_do_not_resolve() {
        let store = InMemorySessionStore::new();
        assert_eq!(store.resolve(&SessionToken::new("session_9_0")), None);
    }

    #[test]
    fn tokens_embed_the_user_id() {
        let store = InMemorySessionStore::new();
        let token = store.create(UserId::new(4));
        assert!(token.as_str().starts_with("session_4_"));
    }

    #[test]
    fn tokens_differ_across_users() {
        let store = InMemorySessionStore::new();
        let a = store.create(UserId::new(1));
        let b = store.create(UserId::new(2));
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn revoke_drops_the_session() {
        let store = InMemorySessionStore::new();
        let token = store.create(UserId::new(3));

        assert!(store.revoke(&token));
        assert_eq!(store.resolve(&token), None);
        assert!(store.is_empty());

        // A second revoke finds nothing.
        assert!(!store.revoke(&token));
    }
}
