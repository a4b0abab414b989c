//! # folderauth
//!
//! Folder-scoped, delegated role-based access control.
//!
//! Roles bind a set of folder names to a set of permissions and a set of
//! principals. A folder administrator may manage the roles scoped to exactly
//! their folder, granting only permissions that cannot escalate beyond it.
//!
//! ## Features
//!
//! - **Safe-Permission Filter**: derives the delegable permissions from the catalog
//! - **Folder Role Store**: concurrent CRUD over folder roles and their sids
//! - **Delegation Guard**: hides roles a folder delegate must not touch
//! - **Strategy Adapter**: answers permission checks for the platform
//! - **File Storage**: JSON or YAML snapshots of the role store
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use folderauth::{Config, FolderAuthService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/folderauth.yaml").await?;
//!     let service = FolderAuthService::start(config.folder_auth()).await?;
//!
//!     service.create_role("build-team", ["app-x"], ["job.build", "job.read"])?;
//!     service.assign_sid("build-team", "alice")?;
//!     assert!(service.has_permission("alice", "job.build", "app-x"));
//!
//!     service.shutdown().await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod storage;
pub mod utils;

// Re-export main types
pub use auth::{
    AccessControl, AuthorizationStrategy, DelegatedFolderAdmin, DelegationPolicy,
    FolderAuthService, FolderIdentity, FolderPath, FolderRole, FolderRoleCreationRequest,
    FolderRoleStore, Permission, PermissionCatalog, PermissionGroup, RoleSnapshot, Scope,
};
pub use config::{Config, FolderAuthConfig};
pub use storage::RoleFileStorage;
pub use utils::error::{FolderAuthError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
