//! RBAC type definitions

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Folder role definition
///
/// Field order matters: the derived ordering compares `name` first, so roles
/// sort by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderRole {
    /// Role name, unique across the store
    pub name: String,
    /// Folders this role applies to, never empty
    pub folder_names: BTreeSet<String>,
    /// Permission identifiers granted by this role
    #[serde(default)]
    pub permissions: BTreeSet<String>,
    /// Users and groups assigned this role
    #[serde(default)]
    pub sids: BTreeSet<String>,
}

impl FolderRole {
    pub fn new<F, P>(name: impl Into<String>, folder_names: F, permissions: P) -> Self
    where
        F: IntoIterator,
        F::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            name: name.into(),
            folder_names: folder_names.into_iter().map(Into::into).collect(),
            permissions: permissions.into_iter().map(Into::into).collect(),
            sids: BTreeSet::new(),
        }
    }

    pub fn with_sids<S>(mut self, sids: S) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
    {
        self.sids = sids.into_iter().map(Into::into).collect();
        self
    }

    pub fn applies_to(&self, folder: &str) -> bool {
        self.folder_names.contains(folder)
    }

    pub fn grants(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }

    pub fn is_assigned(&self, sid: &str) -> bool {
        self.sids.contains(sid)
    }
}

/// Request to create a folder role, as received from the administration surface
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderRoleCreationRequest {
    /// Name of the new role
    pub name: String,
    /// Folders the role applies to
    #[serde(default)]
    pub folder_names: BTreeSet<String>,
    /// Permissions granted by the role
    #[serde(default)]
    pub permissions: BTreeSet<String>,
}

impl FolderRoleCreationRequest {
    pub fn new<F, P>(name: impl Into<String>, folder_names: F, permissions: P) -> Self
    where
        F: IntoIterator,
        F::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            name: name.into(),
            folder_names: folder_names.into_iter().map(Into::into).collect(),
            permissions: permissions.into_iter().map(Into::into).collect(),
        }
    }

    /// Build the role described by this request, with no sids assigned
    pub fn into_role(self) -> FolderRole {
        FolderRole {
            name: self.name,
            folder_names: self.folder_names,
            permissions: self.permissions,
            sids: BTreeSet::new(),
        }
    }
}

/// Persisted form of the whole role store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSnapshot {
    /// Roles ordered by name
    #[serde(default)]
    pub roles: Vec<FolderRole>,
}
