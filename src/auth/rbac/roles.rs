//! Role management methods

use super::store::FolderRoleStore;
use super::types::FolderRole;
use crate::utils::error::{FolderAuthError, Result};
use std::collections::BTreeSet;
use tracing::{debug, info};

impl FolderRoleStore {
    /// Create a role with no sids assigned
    pub fn create<F, P>(&self, name: &str, folder_names: F, permissions: P) -> Result<()>
    where
        F: IntoIterator,
        F::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        self.insert_role(FolderRole::new(name, folder_names, permissions))
    }

    /// Insert a fully formed role
    pub fn insert_role(&self, role: FolderRole) -> Result<()> {
        Self::validate_role(&role)?;

        let mut roles = self.roles.write();
        if roles.contains_key(&role.name) {
            return Err(FolderAuthError::duplicate_name(role.name));
        }

        info!(
            "Created folder role '{}' on {:?}",
            role.name, role.folder_names
        );
        roles.insert(role.name.clone(), role);
        Ok(())
    }

    /// Delete role by name
    pub fn delete(&self, name: &str) -> Result<()> {
        self.delete_if(name, |_| true)
    }

    /// Assign `sid` to a role; assigning twice is a no-op
    pub fn assign_sid(&self, name: &str, sid: &str) -> Result<()> {
        self.assign_sid_if(name, sid, |_| true)
    }

    /// Remove `sid` from a role; removing an absent sid is a no-op
    pub fn remove_sid(&self, name: &str, sid: &str) -> Result<()> {
        self.update_if(name, |_| true, |role| {
            if role.sids.remove(sid) {
                debug!("Removed sid '{}' from folder role '{}'", sid, role.name);
            }
        })
    }

    /// Replace the permissions granted by a role
    pub fn set_permissions<P>(&self, name: &str, permissions: P) -> Result<()>
    where
        P: IntoIterator,
        P::Item: Into<String>,
    {
        let permissions: BTreeSet<String> = permissions.into_iter().map(Into::into).collect();
        self.update_if(name, |_| true, move |role| {
            debug!(
                "Replacing permissions of folder role '{}': {:?}",
                role.name, permissions
            );
            role.permissions = permissions;
        })
    }

    pub(crate) fn assign_sid_if<C>(&self, name: &str, sid: &str, condition: C) -> Result<()>
    where
        C: FnOnce(&FolderRole) -> bool,
    {
        if sid.trim().is_empty() {
            return Err(FolderAuthError::invalid_argument("Sid cannot be empty"));
        }

        self.update_if(name, condition, |role| {
            if role.sids.insert(sid.to_string()) {
                debug!("Assigned sid '{}' to folder role '{}'", sid, role.name);
            }
        })
    }

    /// Delete a role when `condition` holds for it
    ///
    /// A role failing the condition is reported exactly like a missing role.
    pub(crate) fn delete_if<C>(&self, name: &str, condition: C) -> Result<()>
    where
        C: FnOnce(&FolderRole) -> bool,
    {
        let mut roles = self.roles.write();
        if !roles.get(name).is_some_and(condition) {
            return Err(FolderAuthError::no_such_role(name));
        }

        roles.remove(name);
        info!("Deleted folder role '{}'", name);
        Ok(())
    }

    /// Apply `update` to a role when `condition` holds for it, under one write lock
    pub(crate) fn update_if<C, U>(&self, name: &str, condition: C, update: U) -> Result<()>
    where
        C: FnOnce(&FolderRole) -> bool,
        U: FnOnce(&mut FolderRole),
    {
        let mut roles = self.roles.write();
        let Some(role) = roles.get_mut(name).filter(|role| condition(role)) else {
            return Err(FolderAuthError::no_such_role(name));
        };

        update(role);
        Ok(())
    }
}
