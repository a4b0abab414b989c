//! Authorization strategy adapter
//!
//! The platform calls `has_permission` on every protected operation. Which
//! strategy answers is decided once, by matching on [`AuthorizationStrategy`];
//! folder-scoped checks then go to the folder role store.

mod baseline;
mod types;

pub use baseline::{DenyAll, StaticAdmins};
pub use types::{AccessControl, AuthorizationStrategy, FolderBasedStrategy, Scope};
