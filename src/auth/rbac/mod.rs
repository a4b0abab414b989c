//! Folder-scoped Role-Based Access Control
//!
//! Roles bind a flat set of folder names to a set of permissions and a set of
//! principals. The store is the only mutable state; the safe-permission filter
//! and the delegation guard are pure functions over its snapshots.

mod guard;
mod permissions;
mod roles;
mod store;
mod types;

// Re-export public types and structs
pub use guard::{is_visible_to, visible_roles_for};
pub use permissions::{
    DEFAULT_DANGEROUS_PERMISSIONS, DEFAULT_DELEGATE_PERMISSION, DelegationPolicy,
    compute_safe_permissions,
};
pub use store::FolderRoleStore;
pub use types::{FolderRole, FolderRoleCreationRequest, RoleSnapshot};
