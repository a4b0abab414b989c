//! Role scenario integration tests
//!
//! Drives the administrative surface of `FolderAuthService` and checks what
//! the platform sees through `has_permission`.

#[cfg(test)]
mod tests {
    use crate::common::ServiceFactory;
    use folderauth::FolderAuthError;

    // ==================== Role Lifecycle ====================

    #[test]
    fn test_build_team_grants_only_on_its_folder() {
        let service = ServiceFactory::create();
        service
            .create_role("build-team", ["app-x"], ["job.build", "job.read"])
            .unwrap();
        service.assign_sid("build-team", "alice").unwrap();

        assert!(service.has_permission("alice", "job.build", "app-x"));
        assert!(service.has_permission("alice", "job.read", "app-x"));
        assert!(!service.has_permission("alice", "job.configure", "app-x"));
        assert!(!service.has_permission("alice", "job.build", "app-y"));

        let visible = service.list_visible_roles("app-x");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "build-team");
        assert!(visible[0].sids.contains("alice"));
    }

    #[test]
    fn test_multi_folder_role_grants_but_stays_hidden() {
        let service = ServiceFactory::create();
        service
            .create_role("multi", ["app-x", "app-y"], ["job.read"])
            .unwrap();
        service.assign_sid("multi", "bob").unwrap();

        assert!(service.list_visible_roles("app-x").is_empty());
        assert!(service.list_visible_roles("app-y").is_empty());
        assert!(service.has_permission("bob", "job.read", "app-x"));
        assert!(service.has_permission("bob", "job.read", "app-y"));
    }

    #[test]
    fn test_duplicate_create_leaves_store_unchanged() {
        let service = ServiceFactory::create();
        service
            .create_role("dup", ["f"], Vec::<String>::new())
            .unwrap();
        let before = service.store().list_roles();

        let result = service.create_role("dup", ["g"], ["job.read"]);
        assert!(matches!(result, Err(FolderAuthError::DuplicateName(_))));
        assert_eq!(service.store().list_roles(), before);
    }

    #[test]
    fn test_delete_missing_role_is_not_found() {
        let service = ServiceFactory::create();
        service.create_role("keep", ["f"], ["job.read"]).unwrap();

        let result = service.delete_role("missing");
        assert!(matches!(result, Err(FolderAuthError::NotFound(_))));
        assert!(service.store().contains("keep"));
    }

    #[test]
    fn test_assign_and_remove_on_missing_role() {
        let service = ServiceFactory::create();

        assert!(matches!(
            service.assign_sid("ghost", "alice"),
            Err(FolderAuthError::NotFound(_))
        ));
        assert!(matches!(
            service.remove_sid("ghost", "alice"),
            Err(FolderAuthError::NotFound(_))
        ));
    }

    #[test]
    fn test_delete_revokes_access() {
        let service = ServiceFactory::create();
        service.create_role("readers", ["app-x"], ["job.read"]).unwrap();
        service.assign_sid("readers", "alice").unwrap();
        assert!(service.has_permission("alice", "job.read", "app-x"));

        service.delete_role("readers").unwrap();
        assert!(!service.has_permission("alice", "job.read", "app-x"));
        assert!(service.list_visible_roles("app-x").is_empty());
    }

    #[test]
    fn test_remove_sid_revokes_access_and_is_idempotent() {
        let service = ServiceFactory::create();
        service.create_role("readers", ["app-x"], ["job.read"]).unwrap();
        service.assign_sid("readers", "alice").unwrap();

        service.remove_sid("readers", "alice").unwrap();
        service.remove_sid("readers", "alice").unwrap();

        assert!(!service.has_permission("alice", "job.read", "app-x"));
        assert!(service.store().get("readers").unwrap().sids.is_empty());
    }

    // ==================== Validation ====================

    #[test]
    fn test_create_rejects_blank_name_and_empty_folders() {
        let service = ServiceFactory::create();

        assert!(matches!(
            service.create_role("  ", ["f"], ["job.read"]),
            Err(FolderAuthError::InvalidArgument(_))
        ));
        assert!(matches!(
            service.create_role("nowhere", Vec::<String>::new(), ["job.read"]),
            Err(FolderAuthError::InvalidArgument(_))
        ));
        assert!(service.store().is_empty());
    }

    #[test]
    fn test_assign_rejects_blank_sid() {
        let service = ServiceFactory::create();
        service.create_role("readers", ["f"], ["job.read"]).unwrap();

        assert!(matches!(
            service.assign_sid("readers", ""),
            Err(FolderAuthError::InvalidArgument(_))
        ));
    }

    // ==================== Effective Permissions ====================

    #[test]
    fn test_permissions_union_across_roles() {
        let service = ServiceFactory::create();
        service.create_role("readers", ["app-x"], ["job.read"]).unwrap();
        service.create_role("builders", ["app-x"], ["job.build"]).unwrap();
        service.assign_sid("readers", "alice").unwrap();
        service.assign_sid("builders", "alice").unwrap();

        assert!(service.has_permission("alice", "job.read", "app-x"));
        assert!(service.has_permission("alice", "job.build", "app-x"));
    }

    #[test]
    fn test_group_sid_grants_to_members() {
        let service = ServiceFactory::with_group("devs", &["carol", "dave"]);
        service.create_role("dev-team", ["app-x"], ["job.build"]).unwrap();
        service.assign_sid("dev-team", "devs").unwrap();

        assert!(service.has_permission("carol", "job.build", "app-x"));
        assert!(service.has_permission("dave", "job.build", "app-x"));
        assert!(!service.has_permission("erin", "job.build", "app-x"));
    }

    #[test]
    fn test_platform_admin_is_not_implied_at_folder_scope() {
        let service = ServiceFactory::create();

        assert!(!service.has_permission("root", "job.read", "app-x"));
    }
}
