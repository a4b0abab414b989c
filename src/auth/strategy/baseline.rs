//! Baseline strategies for checks outside folder scope

use super::types::{AccessControl, Scope};
use std::collections::BTreeSet;

/// Grants nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct DenyAll;

impl AccessControl for DenyAll {
    fn has_permission(&self, _sid: &str, _permission: &str, _scope: Scope<'_>) -> bool {
        false
    }
}

/// Platform administrators: a fixed set of sids holding every permission
#[derive(Debug, Clone, Default)]
pub struct StaticAdmins {
    admins: BTreeSet<String>,
}

impl StaticAdmins {
    pub fn new<I>(admins: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            admins: admins.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_admin(&self, sid: &str) -> bool {
        self.admins.contains(sid)
    }
}

impl AccessControl for StaticAdmins {
    fn has_permission(&self, sid: &str, _permission: &str, _scope: Scope<'_>) -> bool {
        self.is_admin(sid)
    }
}
