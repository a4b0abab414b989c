//! Property tests for the safe-permission filter and the delegation guard

#[cfg(test)]
mod tests {
    use folderauth::auth::rbac::{compute_safe_permissions, is_visible_to};
    use folderauth::{DelegationPolicy, FolderRole, FolderRoleStore, PermissionGroup};
    use proptest::prelude::*;

    const GROUP_IDS: &[&str] = &["overall", "computer", "permission", "job", "run", "folder"];

    fn arb_group() -> impl Strategy<Value = PermissionGroup> {
        (
            prop::sample::select(GROUP_IDS),
            prop::collection::vec((prop::sample::select(GROUP_IDS), "[a-z_]{1,3}"), 0..6),
            any::<bool>(),
            any::<bool>(),
        )
            .prop_map(|(group, entries, with_delegate, with_dangerous)| {
                // Ids may carry any group's prefix, so one id can appear under several groups
                let mut permissions: Vec<String> = entries
                    .into_iter()
                    .map(|(prefix, name)| format!("{}.{}", prefix, name))
                    .collect();
                if with_delegate {
                    permissions.push("folder.delegate".to_string());
                }
                if with_dangerous {
                    permissions.push("overall.run_scripts".to_string());
                }
                PermissionGroup::new(group, group, permissions)
            })
    }

    fn arb_catalog() -> impl Strategy<Value = Vec<PermissionGroup>> {
        prop::collection::vec(arb_group(), 0..8)
    }

    proptest! {
        #[test]
        fn test_safe_set_never_leaks(groups in arb_catalog()) {
            let policy = DelegationPolicy::default();
            let safe = compute_safe_permissions(&groups, &policy);

            let excluded_ids: Vec<&String> = groups
                .iter()
                .filter(|group| policy.excluded_groups.contains(&group.id))
                .flat_map(|group| group.permissions.iter())
                .collect();

            for permission in &safe {
                prop_assert_ne!(permission.id.as_str(), "folder.delegate");
                prop_assert!(!policy.dangerous_permissions.contains(&permission.id));
                prop_assert!(!policy.excluded_groups.contains(&permission.group));
                prop_assert!(!excluded_ids.contains(&&permission.id));
            }
        }

        #[test]
        fn test_safe_set_ignores_group_order(groups in arb_catalog()) {
            let policy = DelegationPolicy::default();
            let mut reversed = groups.clone();
            reversed.reverse();

            prop_assert_eq!(
                compute_safe_permissions(&groups, &policy),
                compute_safe_permissions(&reversed, &policy)
            );
        }

        #[test]
        fn test_multi_folder_roles_are_never_visible(
            folders in prop::collection::btree_set("[a-z]{1,6}", 2..5),
            permissions in prop::collection::vec("job\\.[a-z]{1,6}", 0..4),
        ) {
            let role = FolderRole::new("multi", folders.clone(), permissions);

            for folder in &folders {
                prop_assert!(!is_visible_to(&role, folder, "folder.delegate"));
            }
        }

        #[test]
        fn test_delegate_granting_roles_are_never_visible(
            folder in "[a-z]{1,6}",
            permissions in prop::collection::vec("job\\.[a-z]{1,6}", 0..4),
        ) {
            let mut permissions = permissions;
            permissions.push("folder.delegate".to_string());
            let role = FolderRole::new("admins", [folder.clone()], permissions);

            prop_assert!(!is_visible_to(&role, &folder, "folder.delegate"));
        }

        #[test]
        fn test_remove_sid_is_idempotent(
            sids in prop::collection::btree_set("[a-z]{1,6}", 1..6),
            target in "[a-z]{1,6}",
        ) {
            let store = FolderRoleStore::default();
            store.create("team", ["f"], ["job.read"]).unwrap();
            for sid in &sids {
                store.assign_sid("team", sid).unwrap();
            }

            store.remove_sid("team", &target).unwrap();
            let once = store.get("team").unwrap();
            store.remove_sid("team", &target).unwrap();
            let twice = store.get("team").unwrap();

            prop_assert_eq!(&once, &twice);
            prop_assert!(!twice.is_assigned(&target));
            prop_assert_eq!(twice.sids.len(), sids.len() - usize::from(sids.contains(&target)));
        }
    }
}
