//! Safe-permission filter
//!
//! Derives, from the permission catalog, the permissions that may be granted
//! by a role created at folder scope.

use crate::auth::catalog::{Permission, PermissionGroup};
use crate::config::FolderAuthConfig;
use std::collections::BTreeSet;

/// Permission granting the right to administer folder roles on a folder
pub const DEFAULT_DELEGATE_PERMISSION: &str = "folder.delegate";

/// Permissions never delegable, whatever their group
pub const DEFAULT_DANGEROUS_PERMISSIONS: &[&str] = &[
    "overall.run_scripts",
    "overall.upload_plugins",
    "overall.configure_update_center",
];

/// Rules applied when a folder delegate edits roles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelegationPolicy {
    /// The delegate permission identifier
    pub delegate_permission: String,
    /// Permission identifiers excluded from delegation
    pub dangerous_permissions: BTreeSet<String>,
    /// Group identifiers excluded from delegation
    pub excluded_groups: BTreeSet<String>,
    /// Shortest role name accepted from a delegate
    pub min_role_name_len: usize,
    /// Reject delegated roles that grant nothing
    pub require_permissions: bool,
}

impl Default for DelegationPolicy {
    fn default() -> Self {
        Self::from_config(&FolderAuthConfig::default())
    }
}

impl DelegationPolicy {
    pub fn from_config(config: &FolderAuthConfig) -> Self {
        Self {
            delegate_permission: config.delegate_permission.clone(),
            dangerous_permissions: config.dangerous_permissions.iter().cloned().collect(),
            excluded_groups: config.excluded_groups.iter().cloned().collect(),
            min_role_name_len: config.min_role_name_len,
            require_permissions: config.require_permissions,
        }
    }

    /// Compute the delegable permissions of `groups` under this policy
    pub fn safe_permissions(&self, groups: &[PermissionGroup]) -> BTreeSet<Permission> {
        compute_safe_permissions(groups, self)
    }

    /// Whether a permission identifier is blocked regardless of its group
    pub fn is_blocked(&self, permission: &str) -> bool {
        permission == self.delegate_permission || self.dangerous_permissions.contains(permission)
    }
}

/// Delegable permissions of `groups`, ordered by identifier
///
/// Pure: the result depends only on the contents of `groups` and `policy`,
/// not on the order of `groups`.
pub fn compute_safe_permissions(
    groups: &[PermissionGroup],
    policy: &DelegationPolicy,
) -> BTreeSet<Permission> {
    let (excluded, allowed): (Vec<&PermissionGroup>, Vec<&PermissionGroup>) = groups
        .iter()
        .partition(|group| policy.excluded_groups.contains(&group.id));

    // An id listed under an excluded group stays excluded wherever else it appears
    let excluded_ids: BTreeSet<&str> = excluded
        .iter()
        .flat_map(|group| group.permissions.iter().map(String::as_str))
        .collect();

    let candidates: BTreeSet<Permission> = allowed
        .into_iter()
        .flat_map(PermissionGroup::iter_permissions)
        .collect();

    let blocked: BTreeSet<Permission> = candidates
        .iter()
        .filter(|permission| {
            policy.is_blocked(&permission.id) || excluded_ids.contains(permission.id.as_str())
        })
        .cloned()
        .collect();

    candidates.difference(&blocked).cloned().collect()
}
