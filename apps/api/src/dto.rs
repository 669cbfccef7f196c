use roledesk_application::{RoleAssignmentView, RoleRecord, UserRecord, UserRoleAssignments};
use serde::{Deserialize, Serialize};

/// Liveness payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Incoming payload for role creation.
#[derive(Debug, Deserialize)]
pub struct CreateRoleRequest {
    pub name: String,
}

/// Incoming payload for the role assignment form. The `roles` field carries
/// the serialized desired-assignment changes.
#[derive(Debug, Deserialize)]
pub struct SubmitRoleAssignmentsRequest {
    #[serde(default)]
    pub roles: String,
}

/// API representation of a role.
#[derive(Debug, Serialize)]
pub struct RoleResponse {
    pub role_id: String,
    pub name: String,
    pub normalized_name: String,
}

/// API representation of a user.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user_id: String,
    pub username: String,
    pub full_name: String,
}

/// API representation of one per-role assignment flag.
#[derive(Debug, Serialize)]
pub struct RoleAssignmentResponse {
    pub role_id: String,
    pub role_name: String,
    pub assigned: bool,
}

/// API representation of a user's assignment view.
#[derive(Debug, Serialize)]
pub struct UserRoleAssignmentsResponse {
    pub user_id: String,
    pub username: String,
    pub full_name: String,
    pub roles: Vec<RoleAssignmentResponse>,
}

impl From<RoleRecord> for RoleResponse {
    fn from(value: RoleRecord) -> Self {
        Self {
            role_id: value.id.to_string(),
            name: value.name,
            normalized_name: value.normalized_name,
        }
    }
}

impl From<UserRecord> for UserResponse {
    fn from(value: UserRecord) -> Self {
        Self {
            user_id: value.id.to_string(),
            username: value.username,
            full_name: value.full_name,
        }
    }
}

impl From<RoleAssignmentView> for RoleAssignmentResponse {
    fn from(value: RoleAssignmentView) -> Self {
        Self {
            role_id: value.role_id.to_string(),
            role_name: value.role_name,
            assigned: value.assigned,
        }
    }
}

impl From<UserRoleAssignments> for UserRoleAssignmentsResponse {
    fn from(value: UserRoleAssignments) -> Self {
        Self {
            user_id: value.user_id.to_string(),
            username: value.username,
            full_name: value.full_name,
            roles: value
                .roles
                .into_iter()
                .map(RoleAssignmentResponse::from)
                .collect(),
        }
    }
}
