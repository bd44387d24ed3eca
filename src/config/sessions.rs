//! Session lifetime configuration

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionsConfig {
    /// Session duration in seconds (default: 8 hours)
    pub duration_secs: u64,
}

impl Default for SessionsConfig {
    fn default() -> Self {
        Self { duration_secs: 28800 }
    }
}

impl SessionsConfig {
    pub fn apply_env_vars(&mut self) {
        if let Ok(duration) = env::var("PORTCULLIS_SESSION_DURATION_SECS") {
            if let Ok(secs) = duration.parse() {
                self.duration_secs = secs;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.duration_secs == 0 {
            bail!("sessions.duration_secs must be greater than zero");
        }
        Ok(())
    }
}
