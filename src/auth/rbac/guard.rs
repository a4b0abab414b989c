//! Delegation-safety guard
//!
//! A folder delegate may only see roles bound to exactly their folder, and
//! never a role that itself grants the delegate permission. Anything else is
//! dropped silently: the delegate cannot even learn that it exists.

use super::types::FolderRole;

/// Whether `role` is manageable by a delegate of `folder`
pub fn is_visible_to(role: &FolderRole, folder: &str, delegate_permission: &str) -> bool {
    role.folder_names.len() == 1
        && role.applies_to(folder)
        && !role.grants(delegate_permission)
}

/// Roles manageable by a delegate of `folder`, sorted by name
pub fn visible_roles_for<'a, I>(folder: &str, roles: I, delegate_permission: &str) -> Vec<FolderRole>
where
    I: IntoIterator<Item = &'a FolderRole>,
{
    let mut visible: Vec<FolderRole> = roles
        .into_iter()
        .filter(|role| is_visible_to(role, folder, delegate_permission))
        .cloned()
        .collect();
    visible.sort();
    visible
}
