//! Catalog type definitions

use serde::{Deserialize, Serialize};

/// Permission definition
///
/// Ordered by identifier first so sorted collections list permissions the
/// same way on every run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Permission {
    /// Opaque identifier, e.g. `job.build`
    pub id: String,
    /// Identifier of the owning group
    pub group: String,
}

impl Permission {
    pub fn new(id: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            group: group.into(),
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.id)
    }
}

/// Permission group definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionGroup {
    /// Group identifier, e.g. `job`
    pub id: String,
    /// Display title
    #[serde(default)]
    pub title: String,
    /// Permission identifiers owned by this group
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl PermissionGroup {
    pub fn new<I, S>(id: impl Into<String>, title: impl Into<String>, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            title: title.into(),
            permissions: permissions.into_iter().map(Into::into).collect(),
        }
    }

    /// Permissions of this group, tagged with the group id
    pub fn iter_permissions(&self) -> impl Iterator<Item = Permission> + '_ {
        self.permissions
            .iter()
            .map(move |id| Permission::new(id.clone(), self.id.clone()))
    }
}
