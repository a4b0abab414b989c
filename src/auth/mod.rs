//! Folder-scoped delegated authorization
//!
//! This module provides the permission catalog, the folder role store, the
//! delegation-safety guard, the authorization strategy adapter, and the
//! per-folder administration surface built on them.

pub mod catalog;
pub mod delegate;
pub mod folder;
pub mod membership;
pub mod rbac;
pub mod strategy;
pub mod system;

pub use catalog::{Permission, PermissionCatalog, PermissionGroup};
pub use delegate::DelegatedFolderAdmin;
pub use folder::{FolderIdentity, FolderPath};
pub use membership::{GroupMembership, NoGroups, StaticGroups};
pub use rbac::{
    DelegationPolicy, FolderRole, FolderRoleCreationRequest, FolderRoleStore, RoleSnapshot,
};
pub use strategy::{AccessControl, AuthorizationStrategy, FolderBasedStrategy, Scope};
pub use system::FolderAuthService;
