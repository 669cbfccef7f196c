//! Role administration ports and application service.
//!
//! Owns role listing, role creation and deletion, user listing, and the
//! per-user role assignment view. Persistence is reached only through the
//! injected repository ports; this service keeps no state of its own.

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;

use roledesk_core::{AppError, AppResult};
use roledesk_domain::{DEFAULT_ROLE_NAMES, RoleId, RoleName, UserId};

use crate::flow::{ListingTarget, NextAction};

/// Role record returned by repository queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleRecord {
    /// Store-assigned role identifier.
    pub id: RoleId,
    /// Role name as entered at creation.
    pub name: String,
    /// Uppercase form used for uniqueness comparison.
    pub normalized_name: String,
}

/// User record returned by repository queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// Store-assigned user identifier.
    pub id: UserId,
    /// Login name.
    pub username: String,
    /// Display name.
    pub full_name: String,
}

/// Per-role assignment flag for one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleAssignmentView {
    /// Role identifier.
    pub role_id: RoleId,
    /// Role name.
    pub role_name: String,
    /// Whether the role is currently assigned to the user.
    pub assigned: bool,
}

/// Assignment view context for one user: one entry per role in the system,
/// in store listing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRoleAssignments {
    /// User identifier.
    pub user_id: UserId,
    /// Login name, for display context.
    pub username: String,
    /// Display name, for display context.
    pub full_name: String,
    /// Per-role flags.
    pub roles: Vec<RoleAssignmentView>,
}

/// Repository port for role persistence.
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Lists all roles in store order.
    async fn list_roles(&self) -> AppResult<Vec<RoleRecord>>;

    /// Checks whether a role with this normalized name exists.
    async fn role_exists(&self, normalized_name: &str) -> AppResult<bool>;

    /// Creates a role. Fails with `Conflict` when the normalized name is
    /// already taken, and never leaves a partial record behind.
    async fn create_role(&self, name: &str, normalized_name: &str) -> AppResult<RoleRecord>;

    /// Finds a role by its identifier.
    async fn find_role_by_id(&self, role_id: RoleId) -> AppResult<Option<RoleRecord>>;

    /// Deletes a role unconditionally, assignments included.
    async fn delete_role(&self, role: &RoleRecord) -> AppResult<()>;
}

/// Repository port for user reads.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Lists all users in store order.
    async fn list_users(&self) -> AppResult<Vec<UserRecord>>;

    /// Finds a user by their identifier.
    async fn find_user_by_id(&self, user_id: UserId) -> AppResult<Option<UserRecord>>;

    /// Returns the names of the roles currently assigned to the user.
    async fn assigned_role_names(&self, user: &UserRecord) -> AppResult<BTreeSet<String>>;
}

/// Application service for role and assignment administration.
#[derive(Clone)]
pub struct RoleAdminService {
    role_repository: Arc<dyn RoleRepository>,
    user_repository: Arc<dyn UserRepository>,
}

impl RoleAdminService {
    /// Creates a new service from required dependencies.
    #[must_use]
    pub fn new(
        role_repository: Arc<dyn RoleRepository>,
        user_repository: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            role_repository,
            user_repository,
        }
    }

    /// Returns all roles in store order.
    pub async fn list_roles(&self) -> AppResult<Vec<RoleRecord>> {
        self.role_repository.list_roles().await
    }

    /// Returns all users in store order.
    pub async fn list_users(&self) -> AppResult<Vec<UserRecord>> {
        self.user_repository.list_users().await
    }

    /// Creates a role named `name`, storing the uppercase normalized form
    /// alongside it.
    ///
    /// The existence pre-check and the store create are not atomic; a raced
    /// duplicate is still rejected by the store's unique constraint and
    /// surfaces as `Conflict` from the create call.
    pub async fn create_role(&self, name: &str) -> AppResult<RoleRecord> {
        let role_name = RoleName::new(name)?;
        let normalized = role_name.normalized();

        if self.role_repository.role_exists(normalized.as_str()).await? {
            return Err(AppError::Conflict(format!(
                "role '{}' already exists",
                role_name.as_str()
            )));
        }

        let role = self
            .role_repository
            .create_role(role_name.as_str(), normalized.as_str())
            .await?;

        tracing::info!(role_id = %role.id, name = %role.name, "role created");
        Ok(role)
    }

    /// Deletes the role with this identifier.
    ///
    /// Deletion is unconditional: existing assignments are not checked, and
    /// the store treats assignments to the deleted role as unassigned on
    /// the next read.
    pub async fn delete_role(&self, role_id: RoleId) -> AppResult<()> {
        let role = self
            .role_repository
            .find_role_by_id(role_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("role '{role_id}' was not found")))?;

        self.role_repository.delete_role(&role).await?;
        tracing::info!(%role_id, name = %role.name, "role deleted");
        Ok(())
    }

    /// Builds the per-role assignment view for one user.
    ///
    /// When the store holds no roles at all, the default roles are created
    /// first and the listing is re-read, so the form always has something
    /// to offer.
    pub async fn user_role_assignments(&self, user_id: UserId) -> AppResult<UserRoleAssignments> {
        let user = self
            .user_repository
            .find_user_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user '{user_id}' was not found")))?;

        let assigned = self.user_repository.assigned_role_names(&user).await?;

        let mut roles = self.role_repository.list_roles().await?;
        if roles.is_empty() {
            self.create_default_roles().await?;
            roles = self.role_repository.list_roles().await?;
        }

        let views = roles
            .into_iter()
            .map(|role| RoleAssignmentView {
                assigned: assigned.contains(role.name.as_str()),
                role_id: role.id,
                role_name: role.name,
            })
            .collect();

        Ok(UserRoleAssignments {
            user_id: user.id,
            username: user.username,
            full_name: user.full_name,
            roles: views,
        })
    }

    /// Routes a submitted assignment payload to its follow-up listing.
    ///
    /// The submitted changes are acknowledged and dropped: a blank payload
    /// returns to the role listing, anything else moves on to the user
    /// listing.
    // TODO: apply the submitted assignment changes once the desired diff
    // semantics are agreed with product.
    pub fn submit_user_role_assignments(&self, user_id: UserId, roles_payload: &str) -> NextAction {
        if roles_payload.trim().is_empty() {
            return NextAction::redirect(ListingTarget::Roles);
        }

        tracing::warn!(%user_id, "discarding submitted role assignment changes");
        NextAction::redirect(ListingTarget::Users)
    }

    /// Creates the default roles, tolerating a concurrent bootstrap that
    /// already created one of them.
    async fn create_default_roles(&self) -> AppResult<()> {
        for name in DEFAULT_ROLE_NAMES {
            let role_name = RoleName::new(name)?;
            let normalized = role_name.normalized();

            match self
                .role_repository
                .create_role(role_name.as_str(), normalized.as_str())
                .await
            {
                Ok(_) | Err(AppError::Conflict(_)) => {}
                Err(error) => return Err(error),
            }
        }

        Ok(())
    }
}
