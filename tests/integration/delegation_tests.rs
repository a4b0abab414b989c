//! Delegated folder administration integration tests
//!
//! A folder delegate works through `FolderAuthService::delegate_for`. These
//! tests check that delegation stays confined to one folder and never leaks
//! the delegate permission or anything outside the safe set.

#[cfg(test)]
mod tests {
    use crate::common::{CatalogFactory, ServiceFactory, fixtures::ROOT_ADMIN};
    use folderauth::auth::strategy::DenyAll;
    use folderauth::{
        AuthorizationStrategy, DelegatedFolderAdmin, DelegationPolicy, FolderAuthError,
        FolderAuthService, FolderPath, FolderRoleCreationRequest,
    };
    use std::sync::Arc;

    /// Service where `dana` delegates `app-x` through a folder role
    fn service_with_delegate() -> FolderAuthService {
        let service = ServiceFactory::create();
        service
            .create_role("app-x-admins", ["app-x"], ["folder.delegate"])
            .unwrap();
        service.assign_sid("app-x-admins", "dana").unwrap();
        service
    }

    // ==================== Access ====================

    #[test]
    fn test_folder_delegate_may_administer_own_folder_only() {
        let service = service_with_delegate();

        assert!(service.delegate_for("app-x").unwrap().can_delegate("dana"));
        assert!(!service.delegate_for("app-y").unwrap().can_delegate("dana"));
        assert!(service.delegate_for("app-y").unwrap().can_delegate(ROOT_ADMIN));
    }

    #[test]
    fn test_non_delegate_is_denied_everywhere() {
        let service = service_with_delegate();
        let admin = service.delegate_for("app-x").unwrap();

        assert!(matches!(
            admin.folder_roles("mallory"),
            Err(FolderAuthError::PermissionDenied(_))
        ));
        assert!(matches!(
            admin.add_folder_role(
                "mallory",
                FolderRoleCreationRequest::new("sneaky", Vec::<String>::new(), ["job.read"]),
            ),
            Err(FolderAuthError::PermissionDenied(_))
        ));
        assert!(matches!(
            admin.assign_sid("mallory", "app-x-admins", "mallory"),
            Err(FolderAuthError::PermissionDenied(_))
        ));
        assert!(!service.store().contains("sneaky"));
    }

    #[test]
    fn test_baseline_strategy_has_no_delegated_surface() {
        let strategy = AuthorizationStrategy::Baseline(Arc::new(DenyAll));
        let result = DelegatedFolderAdmin::new(
            "app-x",
            &strategy,
            Arc::new(DelegationPolicy::default()),
            &CatalogFactory::minimal(),
        );

        assert!(matches!(result, Err(FolderAuthError::InvalidState(_))));
    }

    // ==================== Role Creation ====================

    #[test]
    fn test_created_role_is_bound_to_the_folder() {
        let service = service_with_delegate();
        let admin = service.delegate_for("app-x").unwrap();

        admin
            .add_folder_role(
                "dana",
                FolderRoleCreationRequest::new("builders", ["app-y", "app-z"], ["job.build"]),
            )
            .unwrap();
        admin.assign_sid("dana", "builders", "erin").unwrap();

        let role = service.store().get("builders").unwrap();
        assert_eq!(role.folder_names.len(), 1);
        assert!(role.applies_to("app-x"));
        assert!(service.has_permission("erin", "job.build", "app-x"));
        assert!(!service.has_permission("erin", "job.build", "app-y"));
    }

    #[test]
    fn test_nested_folder_uses_full_name() {
        let service = ServiceFactory::create();
        let folder = FolderPath::parse("/team-a/app-x/");
        let admin = service.delegate_for(&folder).unwrap();

        admin
            .add_folder_role(
                ROOT_ADMIN,
                FolderRoleCreationRequest::new("readers", Vec::<String>::new(), ["job.read"]),
            )
            .unwrap();

        assert_eq!(admin.folder_name(), "team-a/app-x");
        assert_eq!(service.list_visible_roles("team-a/app-x").len(), 1);
        assert!(service.list_visible_roles("app-x").is_empty());
    }

    #[test]
    fn test_escalating_permissions_are_rejected() {
        let service = service_with_delegate();
        let admin = service.delegate_for("app-x").unwrap();

        for permission in [
            "folder.delegate",
            "overall.administer",
            "overall.run_scripts",
            "computer.configure",
            "no.such.permission",
        ] {
            let result = admin.add_folder_role(
                "dana",
                FolderRoleCreationRequest::new("escalate", Vec::<String>::new(), [permission]),
            );
            assert!(
                matches!(result, Err(FolderAuthError::InvalidArgument(_))),
                "{} should not be delegable",
                permission
            );
        }
        assert!(!service.store().contains("escalate"));
    }

    #[test]
    fn test_short_name_and_empty_permissions_are_rejected() {
        let service = service_with_delegate();
        let admin = service.delegate_for("app-x").unwrap();

        assert!(matches!(
            admin.add_folder_role(
                "dana",
                FolderRoleCreationRequest::new("ab", Vec::<String>::new(), ["job.read"]),
            ),
            Err(FolderAuthError::InvalidArgument(_))
        ));
        assert!(matches!(
            admin.add_folder_role(
                "dana",
                FolderRoleCreationRequest::new("empty", Vec::<String>::new(), Vec::<String>::new()),
            ),
            Err(FolderAuthError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_delegated_create_of_existing_name_is_duplicate() {
        let service = service_with_delegate();
        service.create_role("taken", ["app-y"], ["job.read"]).unwrap();
        let admin = service.delegate_for("app-x").unwrap();

        let result = admin.add_folder_role(
            "dana",
            FolderRoleCreationRequest::new("taken", Vec::<String>::new(), ["job.read"]),
        );
        assert!(matches!(result, Err(FolderAuthError::DuplicateName(_))));
        assert!(service.store().get("taken").unwrap().applies_to("app-y"));
    }

    // ==================== Hidden Roles ====================

    #[test]
    fn test_hidden_roles_look_missing_to_the_delegate() {
        let service = service_with_delegate();
        service
            .create_role("multi", ["app-x", "app-y"], ["job.read"])
            .unwrap();
        let admin = service.delegate_for("app-x").unwrap();

        let visible: Vec<String> = admin
            .folder_roles("dana")
            .unwrap()
            .into_iter()
            .map(|role| role.name)
            .collect();
        assert!(visible.is_empty());

        // The delegate's own role grants folder.delegate and is hidden too
        for role in ["multi", "app-x-admins", "missing"] {
            assert!(matches!(
                admin.assign_sid("dana", role, "mallory"),
                Err(FolderAuthError::NotFound(_))
            ));
            assert!(matches!(
                admin.delete_folder_role("dana", role),
                Err(FolderAuthError::NotFound(_))
            ));
        }

        assert!(!service.has_permission("mallory", "job.read", "app-x"));
        assert!(!service.has_permission("mallory", "folder.delegate", "app-x"));
        assert!(service.store().contains("multi"));
        assert!(service.store().contains("app-x-admins"));
    }

    #[test]
    fn test_edit_permissions_stays_within_safe_set() {
        let service = service_with_delegate();
        let admin = service.delegate_for("app-x").unwrap();
        admin
            .add_folder_role(
                "dana",
                FolderRoleCreationRequest::new("readers", Vec::<String>::new(), ["job.read"]),
            )
            .unwrap();

        admin
            .edit_role_permissions("dana", "readers", ["job.read", "job.build"])
            .unwrap();
        assert!(service.store().get("readers").unwrap().grants("job.build"));

        let result = admin.edit_role_permissions("dana", "readers", ["folder.delegate"]);
        assert!(matches!(result, Err(FolderAuthError::InvalidArgument(_))));
        assert_eq!(service.list_visible_roles("app-x").len(), 1);
    }

    #[test]
    fn test_remove_sid_through_delegate() {
        let service = service_with_delegate();
        let admin = service.delegate_for("app-x").unwrap();
        admin
            .add_folder_role(
                "dana",
                FolderRoleCreationRequest::new("readers", Vec::<String>::new(), ["job.read"]),
            )
            .unwrap();
        admin.assign_sid("dana", "readers", "erin").unwrap();

        admin.remove_sid("dana", "readers", "erin").unwrap();
        admin.remove_sid("dana", "readers", "erin").unwrap();

        assert!(!service.has_permission("erin", "job.read", "app-x"));
    }
}
