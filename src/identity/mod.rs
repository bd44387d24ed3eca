//! Identity-provider seam
//!
//! Authentication itself is an external collaborator: a real deployment
//! fronts an identity service that issues the authenticated identity.
//! This module owns only the seam - the [`IdentityProvider`] trait that
//! turns credentials into a [`Principal`] - plus [`DirectoryProvider`],
//! a development-grade implementation backed by an in-memory
//! [`UserDirectory`] with Argon2id password hashes.

mod directory;
mod password;

pub use directory::{UserAccount, UserDirectory};
pub use password::{hash_password, verify_password, PasswordError};

use crate::access::Principal;

/// Authentication provider trait
///
/// Implement this trait to plug in a real identity service.
pub trait IdentityProvider: Send + Sync {
    /// Authenticate credentials and return the resulting principal
    fn authenticate(&self, username: &str, password: &str) -> Result<Principal, IdentityError>;

    /// Provider name for logging and identification
    fn name(&self) -> &str;
}

/// Authentication failures
///
/// Unknown usernames and wrong passwords both map to
/// `InvalidCredentials`; callers cannot probe for account existence.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Account is deactivated")]
    AccountInactive,
    #[error("Password verification failed: {0}")]
    Password(#[from] PasswordError),
}

/// Identity provider backed by an in-memory user directory
pub struct DirectoryProvider {
    directory: UserDirectory,
}

impl DirectoryProvider {
    /// Create a provider over a directory
    pub fn new(directory: UserDirectory) -> Self {
        Self { directory }
    }
}

impl IdentityProvider for DirectoryProvider {
    fn authenticate(&self, username: &str, password: &str) -> Result<Principal, IdentityError> {
        let account = match self.directory.find(username) {
            Some(account) => account,
            None => return Err(IdentityError::InvalidCredentials),
        };

        if !account.verify_password(password)? {
            return Err(IdentityError::InvalidCredentials);
        }
        if !account.active {
            return Err(IdentityError::AccountInactive);
        }

        Ok(Principal::new(&account.username).with_roles(account.roles.iter().cloned()))
    }

    fn name(&self) -> &str {
        "directory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> DirectoryProvider {
        let directory = UserDirectory::new()
            .with_account(UserAccount::new("user", "user", ["user"]).unwrap())
            .with_account(UserAccount::new("admin", "admin", ["user", "admin"]).unwrap())
            .with_account(UserAccount::new("mallory", "mallory", ["user"]).unwrap().deactivated());
        DirectoryProvider::new(directory)
    }

    #[test]
    fn test_authenticate_returns_principal_with_roles() {
        let principal = provider().authenticate("admin", "admin").unwrap();

        assert_eq!(principal.username, "admin");
        assert!(principal.has_role("admin"));
        assert!(principal.has_role("user"));
    }

    #[test]
    fn test_wrong_password_and_unknown_user_are_indistinguishable() {
        let provider = provider();

        let wrong = provider.authenticate("user", "nope").unwrap_err();
        let unknown = provider.authenticate("nobody", "nope").unwrap_err();

        assert!(matches!(wrong, IdentityError::InvalidCredentials));
        assert!(matches!(unknown, IdentityError::InvalidCredentials));
    }

    #[test]
    fn test_inactive_account_rejected() {
        let err = provider().authenticate("mallory", "mallory").unwrap_err();
        assert!(matches!(err, IdentityError::AccountInactive));
    }
}
