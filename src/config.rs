//! Application configuration
//!
//! YAML configuration for the store, browsing sessions and the HTTP server.
//! Every field has a default, so an empty document is a valid config.
//!
//! ```yaml
//! store:
//!   root: ./data
//!   seed_on_start: true
//!   seed:
//!     stems: [cat, dog]
//!     repeat: 10
//!     extension: jpeg
//! session:
//!   page_size: 10
//!   policy: next_unseen
//!   fetch_timeout_ms: 5000
//! server:
//!   port: 8080
//! ```

use crate::error::{Error, Result};
use crate::session::SessionConfig;
use crate::store::SeedConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Backing store settings
    #[serde(default)]
    pub store: StoreConfig,

    /// Browsing session settings
    #[serde(default)]
    pub session: SessionConfig,

    /// HTTP server settings
    #[serde(default)]
    pub server: ServerSettings,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::config(format!("Config file '{}' not found", path.display()))
            } else {
                Error::config(format!(
                    "Failed to read config file '{}': {}",
                    path.display(),
                    e
                ))
            }
        })?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: AppConfig = serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("Failed to parse config YAML: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate cross-field constraints
    pub fn validate(&self) -> Result<()> {
        if self.session.page_size == 0 {
            return Err(Error::config("session.page_size must be greater than 0"));
        }

        if self.store.root.as_os_str().is_empty() {
            return Err(Error::config("store.root cannot be empty"));
        }

        if self.store.seed.stems.iter().any(String::is_empty) {
            return Err(Error::config("store.seed.stems cannot contain empty names"));
        }

        Ok(())
    }
}

// ============================================================================
// Store Config
// ============================================================================

/// Backing store settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory to page over
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Seed sample files into an empty root before serving or browsing
    #[serde(default)]
    pub seed_on_start: bool,

    /// Sample files to seed
    #[serde(default)]
    pub seed: SeedConfig,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            seed_on_start: false,
            seed: SeedConfig::default(),
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from("data")
}

// ============================================================================
// Server Config
// ============================================================================

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

fn default_port() -> u16 {
    8080
}
