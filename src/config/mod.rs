//! Configuration system for Portcullis
//!
//! Values are resolved in the following order (highest priority wins):
//!
//! 1. **Environment Variables** - Override file config
//! 2. **Config File** (portcullis.toml) - Override defaults
//! 3. **Defaults** - The sample application's roles and messages
//!
//! # Example
//!
//! ```rust,ignore
//! use portcullis::config::PortcullisConfig;
//!
//! // Load with full supersedence
//! let config = PortcullisConfig::load()?;
//!
//! // Or load from a specific file
//! let config = PortcullisConfig::from_file("portcullis.toml")?;
//!
//! // Or use defaults
//! let config = PortcullisConfig::default();
//! ```

pub mod access;
pub mod sessions;

pub use access::AccessConfig;
pub use sessions::SessionsConfig;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration file name
const CONFIG_FILE: &str = "portcullis.toml";

/// Complete Portcullis configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PortcullisConfig {
    /// Access rules and message texts
    pub access: AccessConfig,

    /// Session lifetime settings
    pub sessions: SessionsConfig,
}

impl PortcullisConfig {
    /// Load configuration with full supersedence
    ///
    /// Reads `portcullis.toml` from the working directory when present,
    /// then applies environment variable overrides.
    pub fn load() -> Result<Self> {
        let mut config = if Path::new(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)?
        } else {
            Self::default()
        };
        config.apply_env_vars();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Apply environment variable overrides
    pub fn apply_env_vars(&mut self) {
        self.access.apply_env_vars();
        self.sessions.apply_env_vars();
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.access.validate()?;
        self.sessions.validate()?;
        Ok(())
    }
}
