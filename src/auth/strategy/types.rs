//! Strategy type definitions

use crate::auth::rbac::FolderRoleStore;
use crate::utils::error::{FolderAuthError, Result};
use std::fmt::Debug;
use std::sync::Arc;

/// Object a permission is checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope<'a> {
    /// The platform root, outside any folder
    Root,
    /// A folder, by canonical name
    Folder(&'a str),
}

/// Permission-check entry point
pub trait AccessControl: Send + Sync + Debug {
    fn has_permission(&self, sid: &str, permission: &str, scope: Scope<'_>) -> bool;
}

/// Strategy answering folder checks from the role store
#[derive(Debug, Clone)]
pub struct FolderBasedStrategy {
    store: FolderRoleStore,
    baseline: Arc<dyn AccessControl>,
}

impl FolderBasedStrategy {
    pub fn new(store: FolderRoleStore, baseline: Arc<dyn AccessControl>) -> Self {
        Self { store, baseline }
    }

    pub fn store(&self) -> &FolderRoleStore {
        &self.store
    }
}

impl AccessControl for FolderBasedStrategy {
    fn has_permission(&self, sid: &str, permission: &str, scope: Scope<'_>) -> bool {
        match scope {
            Scope::Folder(folder) => self.store.effective_permission(sid, permission, folder),
            Scope::Root => self.baseline.has_permission(sid, permission, scope),
        }
    }
}

/// The configured authorization strategy
#[derive(Debug, Clone)]
pub enum AuthorizationStrategy {
    /// Folder roles are active
    FolderBased(FolderBasedStrategy),
    /// Some other strategy is active; folder roles are not consulted
    Baseline(Arc<dyn AccessControl>),
}

impl AuthorizationStrategy {
    /// The folder-based strategy, or `InvalidState` if another one is active
    pub fn folder_based(&self) -> Result<&FolderBasedStrategy> {
        match self {
            Self::FolderBased(strategy) => Ok(strategy),
            Self::Baseline(_) => Err(FolderAuthError::invalid_state(
                "Folder-based authorization strategy is not the current authorization strategy",
            )),
        }
    }

    pub fn is_folder_based(&self) -> bool {
        matches!(self, Self::FolderBased(_))
    }
}

impl AccessControl for AuthorizationStrategy {
    fn has_permission(&self, sid: &str, permission: &str, scope: Scope<'_>) -> bool {
        match self {
            Self::FolderBased(strategy) => strategy.has_permission(sid, permission, scope),
            Self::Baseline(baseline) => baseline.has_permission(sid, permission, scope),
        }
    }
}
