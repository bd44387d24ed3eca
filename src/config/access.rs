//! Access rule and message configuration

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessConfig {
    /// Role required for the secured page
    pub secured_role: String,

    /// Role required for the admin page
    pub admin_role: String,

    /// Success text for the public page
    pub public_message: String,

    /// Success text for the secured page
    pub secured_message: String,

    /// Success text for the admin page
    pub admin_message: String,

    /// Denial text for unauthenticated or under-privileged requests
    pub unauthorized_message: String,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            secured_role: "user".to_string(),
            admin_role: "admin".to_string(),
            public_message: "Message: public".to_string(),
            secured_message: "Message: secured".to_string(),
            admin_message: "Message: admin".to_string(),
            unauthorized_message: "403 Forbidden".to_string(),
        }
    }
}

impl AccessConfig {
    pub fn apply_env_vars(&mut self) {
        if let Ok(role) = env::var("PORTCULLIS_SECURED_ROLE") {
            self.secured_role = role;
        }
        if let Ok(role) = env::var("PORTCULLIS_ADMIN_ROLE") {
            self.admin_role = role;
        }
        if let Ok(message) = env::var("PORTCULLIS_UNAUTHORIZED_MESSAGE") {
            self.unauthorized_message = message;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.secured_role.is_empty() {
            bail!("access.secured_role must not be empty");
        }
        if self.admin_role.is_empty() {
            bail!("access.admin_role must not be empty");
        }
        Ok(())
    }
}
