//! Application configuration file support.
//!
//! This module provides utilities for reading server and unit-table
//! configuration from TOML configuration files, with environment variable
//! overrides applied on top.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::registry::Profile;

/// Error type for configuration loading.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(String),

    #[error("Failed to parse config file: {0}")]
    Parse(String),

    #[error("Unknown unit profile: {0}")]
    UnknownProfile(String),

    #[error("No converter.toml found in standard locations")]
    NotFound,
}

/// Application configuration from file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub units: UnitSettings,
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Unit table settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitSettings {
    #[serde(default = "default_profile")]
    pub profile: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_profile() -> String {
    Profile::Compat.as_str().to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for UnitSettings {
    fn default() -> Self {
        Self {
            profile: default_profile(),
        }
    }
}

impl AppConfig {
    /// Load application configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(AppConfig)` if successful
    /// * `Err(ConfigError)` if file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Read(e.to_string()))?;

        let config: AppConfig =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        Ok(config)
    }

    /// Load application configuration from the default location.
    ///
    /// Searches for `converter.toml` in:
    /// 1. Current directory
    /// 2. `config/` directory
    /// 3. Parent directory
    ///
    /// # Returns
    /// * `Ok(AppConfig)` if found and parsed successfully
    /// * `Err(ConfigError)` if no config file found or parse error
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = vec![
            PathBuf::from("converter.toml"),
            PathBuf::from("config/converter.toml"),
            PathBuf::from("../converter.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(ConfigError::NotFound)
    }

    /// Apply `HOST`, `PORT` and `UNIT_PROFILE` environment overrides.
    ///
    /// Environment variables win over file settings; unparseable values are
    /// ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(host) = env::var("HOST") {
            if !host.is_empty() {
                self.server.host = host;
            }
        }
        if let Some(port) = env::var("PORT").ok().and_then(|s| s.parse().ok()) {
            self.server.port = port;
        }
        if let Ok(profile) = env::var("UNIT_PROFILE") {
            if !profile.is_empty() {
                self.units.profile = profile;
            }
        }
    }

    /// Get the unit table profile from configuration.
    pub fn unit_profile(&self) -> Result<Profile, ConfigError> {
        Profile::from_str(&self.units.profile)
            .map_err(|_| ConfigError::UnknownProfile(self.units.profile.clone()))
    }

    /// The `host:port` pair the server should bind to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
