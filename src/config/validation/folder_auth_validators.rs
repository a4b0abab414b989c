//! Folder authorization configuration validators

use super::trait_def::Validate;
use crate::config::models::FolderAuthConfig;
use std::collections::HashSet;
use tracing::debug;

impl Validate for FolderAuthConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating folder auth configuration");

        if self.delegate_permission.trim().is_empty() {
            return Err("Delegate permission cannot be empty".to_string());
        }

        if self.dangerous_permissions.iter().any(|p| p.trim().is_empty()) {
            return Err("Dangerous permissions cannot contain empty entries".to_string());
        }

        if self.excluded_groups.iter().any(|g| g.trim().is_empty()) {
            return Err("Excluded groups cannot contain empty entries".to_string());
        }

        if self.min_role_name_len == 0 {
            return Err("Minimum role name length must be greater than 0".to_string());
        }

        let mut seen = HashSet::new();
        for sid in &self.admin_sids {
            if sid.trim().is_empty() {
                return Err("Admin sids cannot contain empty entries".to_string());
            }
            if !seen.insert(sid) {
                return Err(format!("Duplicate admin sid: {}", sid));
            }
        }

        for (group, members) in &self.group_memberships {
            if group.trim().is_empty() {
                return Err("Group names cannot be empty".to_string());
            }
            if members.iter().any(|m| m.trim().is_empty()) {
                return Err(format!("Group '{}' has an empty member sid", group));
            }
        }

        if let Some(path) = &self.roles_file {
            match path.extension().and_then(|ext| ext.to_str()) {
                Some("json") | Some("yaml") | Some("yml") => {}
                _ => {
                    return Err(format!(
                        "Roles file must be .json, .yaml or .yml: {}",
                        path.display()
                    ));
                }
            }
        }

        Ok(())
    }
}
