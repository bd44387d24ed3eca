//! Login/logout lifecycle over a session store

use super::store::{Session, SessionStore};
use crate::access::Principal;
use crate::identity::IdentityProvider;
use anyhow::Result;
use chrono::Duration;
use uuid::Uuid;

/// Creates principals at login and destroys them at logout
///
/// The manager owns the lifecycle invariant: between `login` and
/// `logout` (or expiry) a token resolves to the principal the identity
/// provider issued; outside that window it resolves to nothing.
pub struct SessionManager<S: SessionStore> {
    store: S,
    session_duration_secs: u64,
}

impl<S: SessionStore> SessionManager<S> {
    /// Create a manager with an 8-hour session duration
    pub fn new(store: S) -> Self {
        Self { store, session_duration_secs: 28800 }
    }

    /// Set the session duration in seconds
    pub fn with_session_duration(mut self, secs: u64) -> Self {
        self.session_duration_secs = secs;
        self
    }

    /// Authenticate and create a session
    ///
    /// Returns the session token. Authentication failures from the
    /// provider are passed through unchanged.
    pub async fn login(
        &self,
        provider: &dyn IdentityProvider,
        username: &str,
        password: &str,
    ) -> Result<String> {
        let principal = provider.authenticate(username, password)?;

        let token = Uuid::new_v4().to_string();
        let expires_at =
            chrono::Utc::now() + Duration::seconds(self.session_duration_secs as i64);

        let session = Session::new(token.clone(), principal, expires_at);
        self.store.set(session).await?;

        log::info!("✅ User logged in: {} via {}", username, provider.name());
        Ok(token)
    }

    /// Resolve a token to its live principal
    ///
    /// An unknown or expired token resolves to None; an expired session
    /// is deleted on the way out.
    pub async fn principal(&self, token: &str) -> Result<Option<Principal>> {
        let mut session = match self.store.get(token).await? {
            Some(session) => session,
            None => return Ok(None),
        };

        if session.is_expired() {
            self.store.delete(token).await?;
            return Ok(None);
        }

        session.touch();
        let principal = session.principal.clone();
        self.store.set(session).await?;

        Ok(Some(principal))
    }

    /// Destroy a session
    ///
    /// Logging out an unknown token is a no-op.
    pub async fn logout(&self, token: &str) -> Result<()> {
        if let Some(session) = self.store.get(token).await? {
            log::info!("👋 User logged out: {}", session.principal.username);
        }
        self.store.delete(token).await?;
        Ok(())
    }

    /// Access the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }
}
