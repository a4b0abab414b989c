//! Configuration management for folder authorization
//!
//! This module handles loading, validation, and merging of configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{FolderAuthError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Folder authorization configuration
    pub folder_auth: FolderAuthConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| FolderAuthError::Config(format!("Failed to read config file: {}", e)))?;

        let folder_auth: FolderAuthConfig = serde_yaml::from_str(&content)
            .map_err(|e| FolderAuthError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { folder_auth };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let folder_auth = FolderAuthConfig::from_env()?;
        let config = Self { folder_auth };

        config.validate()?;
        Ok(config)
    }

    /// Get folder authorization configuration
    pub fn folder_auth(&self) -> &FolderAuthConfig {
        &self.folder_auth
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.folder_auth
            .validate()
            .map_err(|e| FolderAuthError::Config(format!("Folder auth config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.folder_auth = self.folder_auth.merge(other.folder_auth);
        self
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.folder_auth).map_err(|e| {
            FolderAuthError::Config(format!("Failed to serialize config to YAML: {}", e))
        })
    }
}
