//! Folder role store
//!
//! Authoritative mapping of role name to role. A single readers-writer lock
//! guards the map: reads proceed together, a write excludes everything else.
//! Only clones leave the lock.

use super::guard;
use super::types::{FolderRole, RoleSnapshot};
use crate::auth::membership::{GroupMembership, NoGroups};
use crate::utils::error::{FolderAuthError, Result};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Shared handle to the folder roles
#[derive(Debug, Clone)]
pub struct FolderRoleStore {
    /// Roles keyed by name
    pub(super) roles: Arc<RwLock<BTreeMap<String, FolderRole>>>,
    /// Oracle answering group membership for effective permission checks
    pub(super) membership: Arc<dyn GroupMembership>,
}

impl Default for FolderRoleStore {
    fn default() -> Self {
        Self::new(Arc::new(NoGroups))
    }
}

impl FolderRoleStore {
    /// Create an empty store
    pub fn new(membership: Arc<dyn GroupMembership>) -> Self {
        Self {
            roles: Arc::new(RwLock::new(BTreeMap::new())),
            membership,
        }
    }

    /// Create a store holding the roles of `snapshot`
    pub fn from_snapshot(
        snapshot: RoleSnapshot,
        membership: Arc<dyn GroupMembership>,
    ) -> Result<Self> {
        let store = Self::new(membership);
        store.restore(snapshot)?;
        Ok(store)
    }

    /// Replace every role with the roles of `snapshot`
    ///
    /// The snapshot is validated in full before the swap; on error the store
    /// is left untouched.
    pub fn restore(&self, snapshot: RoleSnapshot) -> Result<()> {
        let mut restored = BTreeMap::new();
        for role in snapshot.roles {
            Self::validate_role(&role)?;
            if restored.contains_key(&role.name) {
                return Err(FolderAuthError::duplicate_name(role.name));
            }
            restored.insert(role.name.clone(), role);
        }

        debug!("Restored {} folder roles", restored.len());
        *self.roles.write() = restored;
        Ok(())
    }

    /// Copy of every role, ordered by name
    pub fn snapshot(&self) -> RoleSnapshot {
        RoleSnapshot {
            roles: self.list_roles(),
        }
    }

    /// List all roles, ordered by name
    pub fn list_roles(&self) -> Vec<FolderRole> {
        self.roles.read().values().cloned().collect()
    }

    /// Get role by name
    pub fn get(&self, name: &str) -> Option<FolderRole> {
        self.roles.read().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.roles.read().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.roles.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.read().is_empty()
    }

    /// Roles a delegate of `folder` may see and manage
    pub fn visible_roles_for(&self, folder: &str, delegate_permission: &str) -> Vec<FolderRole> {
        let roles = self.roles.read();
        guard::visible_roles_for(folder, roles.values(), delegate_permission)
    }

    /// Whether `sid` holds `permission` on `folder` through any role
    ///
    /// A role matches when it covers the folder, grants the permission, and
    /// lists either `sid` itself or a group `sid` belongs to. Group sids are
    /// collected under the lock; the membership oracle runs after release.
    pub fn effective_permission(&self, sid: &str, permission: &str, folder: &str) -> bool {
        let groups: Vec<String> = {
            let roles = self.roles.read();
            let mut groups = Vec::new();
            for role in roles
                .values()
                .filter(|role| role.applies_to(folder) && role.grants(permission))
            {
                if role.is_assigned(sid) {
                    return true;
                }
                groups.extend(role.sids.iter().cloned());
            }
            groups
        };

        groups
            .iter()
            .any(|group| self.membership.is_member(sid, group))
    }

    pub(super) fn validate_role(role: &FolderRole) -> Result<()> {
        if role.name.trim().is_empty() {
            return Err(FolderAuthError::invalid_argument(
                "Role name cannot be empty",
            ));
        }

        if role.folder_names.is_empty() {
            return Err(FolderAuthError::invalid_argument(format!(
                "Role '{}' must apply to at least one folder",
                role.name
            )));
        }

        if role.folder_names.iter().any(|folder| folder.trim().is_empty()) {
            return Err(FolderAuthError::invalid_argument(format!(
                "Role '{}' references an empty folder name",
                role.name
            )));
        }

        Ok(())
    }
}
