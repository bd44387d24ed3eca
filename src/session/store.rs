//! Session storage trait and types

use crate::access::Principal;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A logged-in principal and its lifetime
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Opaque session token
    pub id: String,

    /// The principal created at login
    pub principal: Principal,

    /// Session creation time
    pub created_at: DateTime<Utc>,

    /// Session expiration time
    pub expires_at: DateTime<Utc>,

    /// Last access time (for sliding expiration)
    pub last_accessed_at: DateTime<Utc>,
}

impl Session {
    /// Create a new session for a principal
    pub fn new(id: String, principal: Principal, expires_at: DateTime<Utc>) -> Self {
        let now = Utc::now();
        Self { id, principal, created_at: now, expires_at, last_accessed_at: now }
    }

    /// Check if the session is expired
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// Update last accessed time
    pub fn touch(&mut self) {
        self.last_accessed_at = Utc::now();
    }
}

/// Session storage trait
///
/// Implement this trait to provide custom session storage backends
/// (Memory, Redis, PostgreSQL, etc.)
#[async_trait::async_trait]
pub trait SessionStore: Send + Sync {
    /// Get a session by token
    async fn get(&self, id: &str) -> Result<Option<Session>>;

    /// Store a session
    async fn set(&self, session: Session) -> Result<()>;

    /// Delete a session by token
    async fn delete(&self, id: &str) -> Result<()>;

    /// Check if a session exists
    async fn exists(&self, id: &str) -> Result<bool> {
        Ok(self.get(id).await?.is_some())
    }

    /// Clean up expired sessions
    /// Returns the number of sessions deleted
    async fn cleanup_expired(&self) -> Result<usize>;

    /// Get the total number of sessions
    async fn count(&self) -> Result<usize>;
}

// Implement SessionStore for Arc<S> to allow using Arc directly
#[async_trait::async_trait]
impl<S: SessionStore> SessionStore for std::sync::Arc<S> {
    async fn get(&self, id: &str) -> Result<Option<Session>> {
        (**self).get(id).await
    }

    async fn set(&self, session: Session) -> Result<()> {
        (**self).set(session).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        (**self).delete(id).await
    }

    async fn exists(&self, id: &str) -> Result<bool> {
        (**self).exists(id).await
    }

    async fn cleanup_expired(&self) -> Result<usize> {
        (**self).cleanup_expired().await
    }

    async fn count(&self) -> Result<usize> {
        (**self).count().await
    }
}
