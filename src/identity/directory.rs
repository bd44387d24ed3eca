//! In-memory user directory

use super::password::{hash_password, verify_password, PasswordError};

/// A user account known to the directory
///
/// Passwords are stored as Argon2id PHC hashes, never as plaintext.
#[derive(Debug, Clone)]
pub struct UserAccount {
    pub username: String,
    pub password_hash: String,
    pub roles: Vec<String>,
    pub active: bool,
}

impl UserAccount {
    /// Create an account, hashing the password
    pub fn new<I, S>(
        username: impl Into<String>,
        password: &str,
        roles: I,
    ) -> Result<Self, PasswordError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            username: username.into(),
            password_hash: hash_password(password)?,
            roles: roles.into_iter().map(Into::into).collect(),
            active: true,
        })
    }

    /// Create an account from a pre-computed hash
    pub fn with_hash<I, S>(username: impl Into<String>, password_hash: String, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            username: username.into(),
            password_hash,
            roles: roles.into_iter().map(Into::into).collect(),
            active: true,
        }
    }

    /// Mark the account as deactivated
    pub fn deactivated(mut self) -> Self {
        self.active = false;
        self
    }

    /// Verify a password against the stored hash
    pub fn verify_password(&self, password: &str) -> Result<bool, PasswordError> {
        verify_password(password, &self.password_hash)
    }
}

/// In-memory account list backing [`DirectoryProvider`](super::DirectoryProvider)
///
/// Suitable for development and tests. A production deployment replaces
/// the whole provider with one backed by the real identity service.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    accounts: Vec<UserAccount>,
}

impl UserDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an account
    pub fn with_account(mut self, account: UserAccount) -> Self {
        self.accounts.push(account);
        self
    }

    /// Find an account by username
    pub fn find(&self, username: &str) -> Option<&UserAccount> {
        self.accounts.iter().find(|a| a.username == username)
    }

    /// Number of registered accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Check if the directory is empty
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
