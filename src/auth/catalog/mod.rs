//! Permission catalog
//!
//! The universe of permissions known to the platform, grouped by category.
//! The core never creates permissions; it only filters and references them.

mod builtin;
mod catalog;
mod types;

pub use catalog::PermissionCatalog;
pub use types::{Permission, PermissionGroup};

/// Group owning global/root administration permissions
pub const OVERALL_GROUP: &str = "overall";
/// Group owning agent/computer management permissions
pub const COMPUTER_GROUP: &str = "computer";
/// Meta-group describing permission objects themselves
pub const PERMISSION_GROUP: &str = "permission";
