//! Catalog loading and lookup

use super::builtin::default_groups;
use super::types::{Permission, PermissionGroup};
use crate::utils::error::{FolderAuthError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Read-only set of permission groups known to the platform
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionCatalog {
    groups: Vec<PermissionGroup>,
}

impl PermissionCatalog {
    pub fn new(groups: Vec<PermissionGroup>) -> Self {
        Self { groups }
    }

    /// Catalog used when no catalog file is configured
    pub fn builtin() -> Self {
        Self::new(default_groups())
    }

    /// Load a catalog from a JSON or YAML file, chosen by extension
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading permission catalog from: {:?}", path);

        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            FolderAuthError::config(format!("Failed to read catalog file: {}", e))
        })?;

        let catalog = Self::parse(path, &content)?;
        debug!(
            "Loaded {} permission groups from catalog",
            catalog.groups.len()
        );
        Ok(catalog)
    }

    fn parse(path: &Path, content: &str) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(serde_json::from_str(content)?),
            Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(content)?),
            other => Err(FolderAuthError::config(format!(
                "Unsupported catalog format: {:?}",
                other
            ))),
        }
    }

    pub fn groups(&self) -> &[PermissionGroup] {
        &self.groups
    }

    /// Look up a permission by identifier
    pub fn find(&self, id: &str) -> Option<Permission> {
        self.groups
            .iter()
            .find(|group| group.permissions.iter().any(|p| p == id))
            .map(|group| Permission::new(id, group.id.clone()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }
}
