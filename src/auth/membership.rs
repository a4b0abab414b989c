//! Principal group membership
//!
//! Group membership is computed by the platform; the core only asks whether a
//! sid belongs to a group.

use std::collections::{BTreeSet, HashMap};
use std::fmt::Debug;

/// Oracle answering "is `sid` a member of `group`"
pub trait GroupMembership: Send + Sync + Debug {
    fn is_member(&self, sid: &str, group: &str) -> bool;
}

/// Membership oracle with no groups at all
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGroups;

impl GroupMembership for NoGroups {
    fn is_member(&self, _sid: &str, _group: &str) -> bool {
        false
    }
}

/// Membership oracle backed by a fixed group -> members table
#[derive(Debug, Clone, Default)]
pub struct StaticGroups {
    groups: HashMap<String, BTreeSet<String>>,
}

impl StaticGroups {
    pub fn new(groups: HashMap<String, BTreeSet<String>>) -> Self {
        Self { groups }
    }

    pub fn with_member(mut self, group: impl Into<String>, sid: impl Into<String>) -> Self {
        self.groups.entry(group.into()).or_default().insert(sid.into());
        self
    }
}

impl<I, S> From<HashMap<String, I>> for StaticGroups
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from(groups: HashMap<String, I>) -> Self {
        Self::new(
            groups
                .into_iter()
                .map(|(group, members)| (group, members.into_iter().map(Into::into).collect()))
                .collect(),
        )
    }
}

impl GroupMembership for StaticGroups {
    fn is_member(&self, sid: &str, group: &str) -> bool {
        self.groups
            .get(group)
            .is_some_and(|members| members.contains(sid))
    }
}
