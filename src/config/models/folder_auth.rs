//! Folder authorization configuration

use crate::auth::catalog::{COMPUTER_GROUP, OVERALL_GROUP, PERMISSION_GROUP};
use crate::auth::rbac::{DEFAULT_DANGEROUS_PERMISSIONS, DEFAULT_DELEGATE_PERMISSION};
use crate::utils::error::{FolderAuthError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Folder authorization configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderAuthConfig {
    /// Permission granting folder role administration
    #[serde(default = "default_delegate_permission")]
    pub delegate_permission: String,
    /// Permissions never delegable at folder scope
    #[serde(default = "default_dangerous_permissions")]
    pub dangerous_permissions: Vec<String>,
    /// Permission groups excluded from delegation
    #[serde(default = "default_excluded_groups")]
    pub excluded_groups: Vec<String>,
    /// Shortest role name a delegate may create
    #[serde(default = "default_min_role_name_len")]
    pub min_role_name_len: usize,
    /// Reject delegated roles without permissions
    #[serde(default = "default_true")]
    pub require_permissions: bool,
    /// Permission catalog file; the built-in catalog is used when unset
    #[serde(default)]
    pub catalog_file: Option<PathBuf>,
    /// File the roles are loaded from at startup and flushed to at shutdown
    #[serde(default)]
    pub roles_file: Option<PathBuf>,
    /// Sids holding every permission at root scope
    #[serde(default)]
    pub admin_sids: Vec<String>,
    /// Group name to member sids
    #[serde(default)]
    pub group_memberships: HashMap<String, Vec<String>>,
}

impl Default for FolderAuthConfig {
    fn default() -> Self {
        Self {
            delegate_permission: default_delegate_permission(),
            dangerous_permissions: default_dangerous_permissions(),
            excluded_groups: default_excluded_groups(),
            min_role_name_len: default_min_role_name_len(),
            require_permissions: true,
            catalog_file: None,
            roles_file: None,
            admin_sids: Vec::new(),
            group_memberships: HashMap::new(),
        }
    }
}

impl FolderAuthConfig {
    /// Defaults overridden by `FOLDERAUTH_*` environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(value) = std::env::var("FOLDERAUTH_DELEGATE_PERMISSION") {
            config.delegate_permission = value;
        }
        if let Ok(value) = std::env::var("FOLDERAUTH_DANGEROUS_PERMISSIONS") {
            config.dangerous_permissions = split_list(&value);
        }
        if let Ok(value) = std::env::var("FOLDERAUTH_EXCLUDED_GROUPS") {
            config.excluded_groups = split_list(&value);
        }
        if let Ok(value) = std::env::var("FOLDERAUTH_MIN_ROLE_NAME_LEN") {
            config.min_role_name_len = value.parse().map_err(|e| {
                FolderAuthError::Config(format!("Invalid FOLDERAUTH_MIN_ROLE_NAME_LEN: {}", e))
            })?;
        }
        if let Ok(value) = std::env::var("FOLDERAUTH_REQUIRE_PERMISSIONS") {
            config.require_permissions = value.parse().map_err(|e| {
                FolderAuthError::Config(format!("Invalid FOLDERAUTH_REQUIRE_PERMISSIONS: {}", e))
            })?;
        }
        if let Ok(value) = std::env::var("FOLDERAUTH_CATALOG_FILE") {
            config.catalog_file = Some(PathBuf::from(value));
        }
        if let Ok(value) = std::env::var("FOLDERAUTH_ROLES_FILE") {
            config.roles_file = Some(PathBuf::from(value));
        }
        if let Ok(value) = std::env::var("FOLDERAUTH_ADMIN_SIDS") {
            config.admin_sids = split_list(&value);
        }

        Ok(config)
    }

    /// Merge configurations, with other taking precedence where it differs from defaults
    pub fn merge(mut self, other: Self) -> Self {
        if other.delegate_permission != default_delegate_permission() {
            self.delegate_permission = other.delegate_permission;
        }
        if other.dangerous_permissions != default_dangerous_permissions() {
            self.dangerous_permissions = other.dangerous_permissions;
        }
        if other.excluded_groups != default_excluded_groups() {
            self.excluded_groups = other.excluded_groups;
        }
        if other.min_role_name_len != default_min_role_name_len() {
            self.min_role_name_len = other.min_role_name_len;
        }
        if !other.require_permissions {
            self.require_permissions = other.require_permissions;
        }
        if other.catalog_file.is_some() {
            self.catalog_file = other.catalog_file;
        }
        if other.roles_file.is_some() {
            self.roles_file = other.roles_file;
        }
        if !other.admin_sids.is_empty() {
            self.admin_sids = other.admin_sids;
        }
        self.group_memberships.extend(other.group_memberships);
        self
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn default_delegate_permission() -> String {
    DEFAULT_DELEGATE_PERMISSION.to_string()
}

fn default_dangerous_permissions() -> Vec<String> {
    DEFAULT_DANGEROUS_PERMISSIONS
        .iter()
        .map(|p| p.to_string())
        .collect()
}

fn default_excluded_groups() -> Vec<String> {
    vec![
        OVERALL_GROUP.to_string(),
        COMPUTER_GROUP.to_string(),
        PERMISSION_GROUP.to_string(),
    ]
}

fn default_min_role_name_len() -> usize {
    3
}

fn default_true() -> bool {
    true
}
