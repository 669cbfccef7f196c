//! End-to-end checks of the admin service against the in-memory stores.

use std::sync::Arc;

use roledesk_application::{
    ListingTarget, NextAction, RoleAdminService, RoleRepository, UserRoleAssignments,
    after_create_role, after_delete_role,
};
use roledesk_core::AppError;
use roledesk_domain::RoleId;

use crate::{InMemoryRoleRepository, InMemoryUserRepository};

fn stack() -> (
    RoleAdminService,
    Arc<InMemoryRoleRepository>,
    Arc<InMemoryUserRepository>,
) {
    let role_repository = Arc::new(InMemoryRoleRepository::new());
    let user_repository = Arc::new(InMemoryUserRepository::new());
    let service = RoleAdminService::new(role_repository.clone(), user_repository.clone());
    (service, role_repository, user_repository)
}

async fn view(service: &RoleAdminService, user_id: roledesk_domain::UserId) -> UserRoleAssignments {
    match service.user_role_assignments(user_id).await {
        Ok(view) => view,
        Err(error) => panic!("assignment view failed: {error}"),
    }
}

#[tokio::test]
async fn assignment_view_reflects_directly_assigned_roles() {
    let (service, _, users) = stack();

    assert!(service.create_role("Admin").await.is_ok());
    assert!(service.create_role("User").await.is_ok());

    let alice = users.insert_user("alice", "Alice Doe").await;
    users.assign_role_name(alice, "Admin").await;

    let assignments = view(&service, alice).await;

    assert_eq!(assignments.username, "alice");
    let flags: Vec<(&str, bool)> = assignments
        .roles
        .iter()
        .map(|role| (role.role_name.as_str(), role.assigned))
        .collect();
    assert_eq!(flags, vec![("Admin", true), ("User", false)]);
}

#[tokio::test]
async fn deleted_role_reads_back_as_unassigned() {
    let (service, _, users) = stack();

    let Ok(admin) = service.create_role("Admin").await else {
        panic!("create failed");
    };
    assert!(service.create_role("User").await.is_ok());

    let alice = users.insert_user("alice", "Alice Doe").await;
    users.assign_role_name(alice, "Admin").await;

    assert!(service.delete_role(admin.id).await.is_ok());

    let assignments = view(&service, alice).await;
    let flags: Vec<(&str, bool)> = assignments
        .roles
        .iter()
        .map(|role| (role.role_name.as_str(), role.assigned))
        .collect();
    assert_eq!(flags, vec![("User", false)]);
}

#[tokio::test]
async fn create_and_delete_flows_end_in_the_role_listing() {
    let (service, _, _) = stack();

    let created = after_create_role(service.create_role("Operators").await);
    assert_eq!(created, NextAction::redirect(ListingTarget::Roles));

    let rejected = after_create_role(service.create_role(" ").await);
    assert!(matches!(rejected, NextAction::ShowForm { errors } if errors.len() == 1));

    let missing = after_delete_role(service.delete_role(RoleId::new()).await);
    assert!(matches!(
        missing,
        Ok(NextAction::Redirect {
            target: ListingTarget::Roles,
            notice: Some(_),
        })
    ));
}

#[tokio::test]
async fn submission_stub_leaves_the_stores_untouched() {
    let (service, roles, users) = stack();

    assert!(service.create_role("Admin").await.is_ok());
    let alice = users.insert_user("alice", "Alice Doe").await;
    users.assign_role_name(alice, "Admin").await;

    let action =
        service.submit_user_role_assignments(alice, r#"[{"roleName":"Admin","assigned":false}]"#);
    assert_eq!(action, NextAction::redirect(ListingTarget::Users));

    let assignments = view(&service, alice).await;
    assert!(assignments.roles[0].assigned);
    assert!(matches!(
        roles.role_exists("ADMIN").await,
        Ok(true)
    ));
}

#[tokio::test]
async fn duplicate_create_conflicts_even_when_pre_check_is_skipped() {
    let (service, roles, _) = stack();

    assert!(service.create_role("Admin").await.is_ok());

    // Drive the store directly, as a raced second writer would.
    let raced = roles.create_role("ADMIN", "ADMIN").await;
    assert!(matches!(raced, Err(AppError::Conflict(_))));
}
