//! Application services and ports.

#![forbid(unsafe_code)]

mod flow;
mod role_admin_service;

pub use flow::{ListingTarget, NextAction, after_create_role, after_delete_role};
pub use role_admin_service::{
    RoleAdminService, RoleAssignmentView, RoleRecord, RoleRepository, UserRecord, UserRepository,
    UserRoleAssignments,
};
