//! Authenticated user identity

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// An authenticated user and the roles they hold
///
/// A Principal exists only while its owner is logged in: the identity
/// provider creates one at login and the session layer destroys it at
/// logout. The anonymous caller is modelled as the absence of a
/// Principal, not as a Principal with no roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Username as known to the identity provider
    pub username: String,

    /// Role names held by this user (e.g. "user", "admin")
    pub roles: HashSet<String>,
}

impl Principal {
    /// Create a principal with no roles
    pub fn new(username: impl Into<String>) -> Self {
        Self { username: username.into(), roles: HashSet::new() }
    }

    /// Add a role
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.roles.insert(role.into());
        self
    }

    /// Add multiple roles
    pub fn with_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles.extend(roles.into_iter().map(Into::into));
        self
    }

    /// Check if this principal holds a role
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }
}
