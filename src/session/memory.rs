//! In-memory session storage
//!
//! Thread-safe HashMap behind an RwLock. Suitable for development and
//! single-server deployments; sessions are lost on restart.

use super::store::{Session, SessionStore};
use anyhow::Result;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// In-memory session store
#[derive(Clone, Default)]
pub struct MemorySessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl MemorySessionStore {
    /// Create a new in-memory session store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, id: &str) -> Result<Option<Session>> {
        let sessions = self.sessions.read().unwrap();
        Ok(sessions.get(id).cloned())
    }

    async fn set(&self, session: Session) -> Result<()> {
        let mut sessions = self.sessions.write().unwrap();
        sessions.insert(session.id.clone(), session);
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut sessions = self.sessions.write().unwrap();
        sessions.remove(id);
        Ok(())
    }

    async fn exists(&self, id: &str) -> Result<bool> {
        let sessions = self.sessions.read().unwrap();
        Ok(sessions.contains_key(id))
    }

    async fn cleanup_expired(&self) -> Result<usize> {
        let mut sessions = self.sessions.write().unwrap();
        let initial_count = sessions.len();

        sessions.retain(|_, session| !session.is_expired());

        Ok(initial_count - sessions.len())
    }

    async fn count(&self) -> Result<usize> {
        let sessions = self.sessions.read().unwrap();
        Ok(sessions.len())
    }
}
