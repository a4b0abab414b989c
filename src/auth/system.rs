//! Folder authorization service
//!
//! Owns the role store and everything wired around it. Built once at startup
//! from configuration and persisted state, passed explicitly to whoever needs
//! it, and flushed back to storage at shutdown.

use super::catalog::{Permission, PermissionCatalog};
use super::delegate::DelegatedFolderAdmin;
use super::folder::FolderIdentity;
use super::membership::StaticGroups;
use super::rbac::{DelegationPolicy, FolderRole, FolderRoleStore};
use super::strategy::{
    AccessControl, AuthorizationStrategy, FolderBasedStrategy, Scope, StaticAdmins,
};
use crate::config::FolderAuthConfig;
use crate::storage::RoleFileStorage;
use crate::utils::error::Result;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, info};

/// Main folder authorization service
#[derive(Debug, Clone)]
pub struct FolderAuthService {
    /// Delegation rules derived from configuration
    policy: Arc<DelegationPolicy>,
    /// Permission catalog
    catalog: Arc<PermissionCatalog>,
    /// Folder role store
    store: FolderRoleStore,
    /// Active authorization strategy
    strategy: AuthorizationStrategy,
    /// Where roles are persisted, if anywhere
    storage: Option<RoleFileStorage>,
}

impl FolderAuthService {
    /// Build the service from configuration and persisted state
    pub async fn start(config: &FolderAuthConfig) -> Result<Self> {
        info!("Initializing folder authorization service");

        let catalog = match &config.catalog_file {
            Some(path) => PermissionCatalog::from_file(path).await?,
            None => PermissionCatalog::builtin(),
        };

        let storage = config
            .roles_file
            .as_ref()
            .map(RoleFileStorage::new)
            .transpose()?;

        let snapshot = match &storage {
            Some(storage) => storage.load().await?,
            None => Default::default(),
        };

        let membership = StaticGroups::from(config.group_memberships.clone());
        let store = FolderRoleStore::from_snapshot(snapshot, Arc::new(membership))?;
        let baseline = StaticAdmins::new(config.admin_sids.iter().cloned());

        let service = Self::from_parts(
            DelegationPolicy::from_config(config),
            catalog,
            store,
            Arc::new(baseline),
            storage,
        );

        info!(
            "Folder authorization service initialized with {} roles",
            service.store.len()
        );
        Ok(service)
    }

    /// Assemble a service from already constructed parts
    pub fn from_parts(
        policy: DelegationPolicy,
        catalog: PermissionCatalog,
        store: FolderRoleStore,
        baseline: Arc<dyn AccessControl>,
        storage: Option<RoleFileStorage>,
    ) -> Self {
        let strategy =
            AuthorizationStrategy::FolderBased(FolderBasedStrategy::new(store.clone(), baseline));

        Self {
            policy: Arc::new(policy),
            catalog: Arc::new(catalog),
            store,
            strategy,
            storage,
        }
    }

    pub fn store(&self) -> &FolderRoleStore {
        &self.store
    }

    pub fn strategy(&self) -> &AuthorizationStrategy {
        &self.strategy
    }

    pub fn policy(&self) -> &DelegationPolicy {
        &self.policy
    }

    pub fn catalog(&self) -> &PermissionCatalog {
        &self.catalog
    }

    /// Permissions delegable at folder scope
    pub fn safe_permissions(&self) -> BTreeSet<Permission> {
        self.policy.safe_permissions(self.catalog.groups())
    }

    /// Create a role through the administrative surface
    pub fn create_role<F, P>(&self, name: &str, folder_names: F, permissions: P) -> Result<()>
    where
        F: IntoIterator,
        F::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        self.store.create(name, folder_names, permissions)
    }

    pub fn delete_role(&self, name: &str) -> Result<()> {
        self.store.delete(name)
    }

    pub fn assign_sid(&self, role_name: &str, sid: &str) -> Result<()> {
        self.store.assign_sid(role_name, sid)
    }

    pub fn remove_sid(&self, role_name: &str, sid: &str) -> Result<()> {
        self.store.remove_sid(role_name, sid)
    }

    /// Roles a delegate of `folder` may see, sorted by name
    pub fn list_visible_roles(&self, folder: &str) -> Vec<FolderRole> {
        self.store
            .visible_roles_for(folder, &self.policy.delegate_permission)
    }

    /// Whether `principal` holds `permission` on `folder`
    pub fn has_permission(&self, principal: &str, permission: &str, folder: &str) -> bool {
        self.strategy
            .has_permission(principal, permission, Scope::Folder(folder))
    }

    /// Administration surface for a single folder
    pub fn delegate_for<F>(&self, folder: &F) -> Result<DelegatedFolderAdmin>
    where
        F: FolderIdentity + ?Sized,
    {
        DelegatedFolderAdmin::new(folder, &self.strategy, self.policy.clone(), &self.catalog)
    }

    /// Write the current roles to storage
    ///
    /// The snapshot is taken under the read lock; the write happens after it
    /// is released.
    pub async fn flush(&self) -> Result<()> {
        if let Some(storage) = &self.storage {
            let snapshot = self.store.snapshot();
            storage.save(&snapshot).await?;
            debug!(
                "Flushed {} folder roles to {:?}",
                snapshot.roles.len(),
                storage.path()
            );
        }
        Ok(())
    }

    /// Flush and drop the service
    pub async fn shutdown(self) -> Result<()> {
        info!("Shutting down folder authorization service");
        self.flush().await
    }
}
