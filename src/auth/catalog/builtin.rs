//! Default permission catalog

use super::types::PermissionGroup;
use super::{COMPUTER_GROUP, OVERALL_GROUP, PERMISSION_GROUP};

/// Groups shipped with the platform when no catalog file is configured
pub(super) fn default_groups() -> Vec<PermissionGroup> {
    vec![
        PermissionGroup::new(
            OVERALL_GROUP,
            "Overall",
            [
                "overall.administer",
                "overall.read",
                "overall.system_read",
                "overall.run_scripts",
                "overall.upload_plugins",
                "overall.configure_update_center",
            ],
        ),
        PermissionGroup::new(
            COMPUTER_GROUP,
            "Agent",
            [
                "computer.build",
                "computer.configure",
                "computer.connect",
                "computer.create",
                "computer.delete",
                "computer.disconnect",
            ],
        ),
        PermissionGroup::new(
            PERMISSION_GROUP,
            "Permission",
            [
                "permission.generic_read",
                "permission.generic_write",
                "permission.generic_create",
                "permission.generic_update",
                "permission.generic_delete",
                "permission.generic_configure",
            ],
        ),
        PermissionGroup::new(
            "job",
            "Job",
            [
                "job.build",
                "job.cancel",
                "job.configure",
                "job.create",
                "job.delete",
                "job.discover",
                "job.move",
                "job.read",
                "job.workspace",
            ],
        ),
        PermissionGroup::new("run", "Run", ["run.delete", "run.replay", "run.update"]),
        PermissionGroup::new(
            "view",
            "View",
            ["view.configure", "view.create", "view.delete", "view.read"],
        ),
        PermissionGroup::new("scm", "SCM", ["scm.tag"]),
        PermissionGroup::new(
            "credentials",
            "Credentials",
            [
                "credentials.create",
                "credentials.delete",
                "credentials.manage_domains",
                "credentials.update",
                "credentials.view",
            ],
        ),
        PermissionGroup::new("folder", "Folder", ["folder.delegate"]),
    ]
}
