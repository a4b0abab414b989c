//! Folder-scoped role administration

use crate::auth::catalog::{Permission, PermissionCatalog};
use crate::auth::folder::FolderIdentity;
use crate::auth::rbac::{DelegationPolicy, FolderRole, FolderRoleCreationRequest, is_visible_to};
use crate::auth::strategy::{AccessControl, AuthorizationStrategy, FolderBasedStrategy, Scope};
use crate::utils::error::{FolderAuthError, Result};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Role administration confined to one folder
#[derive(Debug, Clone)]
pub struct DelegatedFolderAdmin {
    folder: String,
    strategy: FolderBasedStrategy,
    policy: Arc<DelegationPolicy>,
    safe_permissions: BTreeSet<Permission>,
}

impl DelegatedFolderAdmin {
    /// Create the administration surface for `folder`
    ///
    /// Fails with `InvalidState` when folder roles are not the active strategy.
    pub fn new<F>(
        folder: &F,
        strategy: &AuthorizationStrategy,
        policy: Arc<DelegationPolicy>,
        catalog: &PermissionCatalog,
    ) -> Result<Self>
    where
        F: FolderIdentity + ?Sized,
    {
        let strategy = strategy.folder_based()?.clone();
        let safe_permissions = policy.safe_permissions(catalog.groups());

        Ok(Self {
            folder: folder.full_name(),
            strategy,
            policy,
            safe_permissions,
        })
    }

    pub fn folder_name(&self) -> &str {
        &self.folder
    }

    /// Permissions a delegated role may grant
    pub fn folder_permissions(&self) -> &BTreeSet<Permission> {
        &self.safe_permissions
    }

    /// Whether `actor` may administer roles on this folder
    ///
    /// Holders of the delegate permission on the folder qualify, and so does
    /// anyone the baseline grants it at root scope.
    pub fn can_delegate(&self, actor: &str) -> bool {
        let delegate = self.policy.delegate_permission.as_str();
        self.strategy
            .has_permission(actor, delegate, Scope::Folder(&self.folder))
            || self.strategy.has_permission(actor, delegate, Scope::Root)
    }

    fn check_delegate(&self, actor: &str) -> Result<()> {
        if self.can_delegate(actor) {
            return Ok(());
        }

        warn!(
            "Denied folder role administration on '{}' to '{}'",
            self.folder, actor
        );
        Err(FolderAuthError::permission_denied(format!(
            "'{}' lacks {} on folder '{}'",
            actor, self.policy.delegate_permission, self.folder
        )))
    }

    /// Roles of this folder the delegate may see, sorted by name
    pub fn folder_roles(&self, actor: &str) -> Result<Vec<FolderRole>> {
        self.check_delegate(actor)?;
        Ok(self
            .strategy
            .store()
            .visible_roles_for(&self.folder, &self.policy.delegate_permission))
    }

    /// Create a role bound to this folder only
    ///
    /// Whatever folders the request names, the role is bound to this folder.
    pub fn add_folder_role(&self, actor: &str, request: FolderRoleCreationRequest) -> Result<()> {
        self.check_delegate(actor)?;

        let mut request = request;
        request.name = request.name.trim().to_string();
        request.folder_names = BTreeSet::from([self.folder.clone()]);
        self.validate_request(&request)?;

        info!(
            "'{}' creating folder role '{}' on '{}'",
            actor, request.name, self.folder
        );
        self.strategy.store().insert_role(request.into_role())
    }

    /// Assign `sid` to a role visible for this folder
    pub fn assign_sid(&self, actor: &str, role_name: &str, sid: &str) -> Result<()> {
        self.check_delegate(actor)?;
        debug!("'{}' assigning '{}' to '{}'", actor, sid, role_name);
        self.strategy
            .store()
            .assign_sid_if(role_name, sid, |role| self.is_manageable(role))
    }

    /// Remove `sid` from a role visible for this folder
    pub fn remove_sid(&self, actor: &str, role_name: &str, sid: &str) -> Result<()> {
        self.check_delegate(actor)?;
        debug!("'{}' removing '{}' from '{}'", actor, sid, role_name);
        self.strategy.store().update_if(
            role_name,
            |role| self.is_manageable(role),
            |role| {
                role.sids.remove(sid);
            },
        )
    }

    /// Delete a role visible for this folder
    pub fn delete_folder_role(&self, actor: &str, role_name: &str) -> Result<()> {
        self.check_delegate(actor)?;
        info!(
            "'{}' deleting folder role '{}' on '{}'",
            actor, role_name, self.folder
        );
        self.strategy
            .store()
            .delete_if(role_name, |role| self.is_manageable(role))
    }

    /// Replace the permissions of a role visible for this folder
    pub fn edit_role_permissions<P>(&self, actor: &str, role_name: &str, permissions: P) -> Result<()>
    where
        P: IntoIterator,
        P::Item: Into<String>,
    {
        self.check_delegate(actor)?;

        let permissions: BTreeSet<String> = permissions.into_iter().map(Into::into).collect();
        self.validate_permissions(&permissions)?;

        self.strategy.store().update_if(
            role_name,
            |role| self.is_manageable(role),
            move |role| role.permissions = permissions,
        )
    }

    fn is_manageable(&self, role: &FolderRole) -> bool {
        is_visible_to(role, &self.folder, &self.policy.delegate_permission)
    }

    fn validate_request(&self, request: &FolderRoleCreationRequest) -> Result<()> {
        if request.name.chars().count() < self.policy.min_role_name_len {
            return Err(FolderAuthError::invalid_argument(format!(
                "Role name must be at least {} characters",
                self.policy.min_role_name_len
            )));
        }

        self.validate_permissions(&request.permissions)
    }

    fn validate_permissions(&self, permissions: &BTreeSet<String>) -> Result<()> {
        if self.policy.require_permissions && permissions.is_empty() {
            return Err(FolderAuthError::invalid_argument(
                "At least one permission must be selected",
            ));
        }

        let unsafe_permissions: Vec<&str> = permissions
            .iter()
            .filter(|id| !self.safe_permissions.iter().any(|safe| &safe.id == *id))
            .map(String::as_str)
            .collect();

        if !unsafe_permissions.is_empty() {
            return Err(FolderAuthError::invalid_argument(format!(
                "Permissions cannot be delegated at folder scope: {}",
                unsafe_permissions.join(", ")
            )));
        }

        Ok(())
    }
}
