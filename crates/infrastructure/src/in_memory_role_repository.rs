use async_trait::async_trait;
use tokio::sync::RwLock;

use roledesk_application::{RoleRecord, RoleRepository};
use roledesk_core::{AppError, AppResult};
use roledesk_domain::RoleId;

/// In-memory role repository implementation.
///
/// Listing order is creation order. Used by tests and database-free runs.
#[derive(Debug, Default)]
pub struct InMemoryRoleRepository {
    roles: RwLock<Vec<RoleRecord>>,
}

impl InMemoryRoleRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            roles: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl RoleRepository for InMemoryRoleRepository {
    async fn list_roles(&self) -> AppResult<Vec<RoleRecord>> {
        Ok(self.roles.read().await.clone())
    }

    async fn role_exists(&self, normalized_name: &str) -> AppResult<bool> {
        Ok(self
            .roles
            .read()
            .await
            .iter()
            .any(|role| role.normalized_name == normalized_name))
    }

    async fn create_role(&self, name: &str, normalized_name: &str) -> AppResult<RoleRecord> {
        let mut roles = self.roles.write().await;

        if roles
            .iter()
            .any(|role| role.normalized_name == normalized_name)
        {
            return Err(AppError::Conflict(format!("role '{name}' already exists")));
        }

        let role = RoleRecord {
            id: RoleId::new(),
            name: name.to_owned(),
            normalized_name: normalized_name.to_owned(),
        };
        roles.push(role.clone());
        Ok(role)
    }

    async fn find_role_by_id(&self, role_id: RoleId) -> AppResult<Option<RoleRecord>> {
        Ok(self
            .roles
            .read()
            .await
            .iter()
            .find(|role| role.id == role_id)
            .cloned())
    }

    async fn delete_role(&self, role: &RoleRecord) -> AppResult<()> {
        self.roles
            .write()
            .await
            .retain(|stored| stored.id != role.id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use roledesk_application::RoleRepository;
    use roledesk_core::AppError;

    use super::InMemoryRoleRepository;

    #[tokio::test]
    async fn create_rejects_taken_normalized_name() {
        let repository = InMemoryRoleRepository::new();

        assert!(repository.create_role("Admin", "ADMIN").await.is_ok());
        let result = repository.create_role("admin", "ADMIN").await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn listing_preserves_creation_order() {
        let repository = InMemoryRoleRepository::new();

        assert!(repository.create_role("Admin", "ADMIN").await.is_ok());
        assert!(repository.create_role("User", "USER").await.is_ok());

        let Ok(roles) = repository.list_roles().await else {
            panic!("listing failed");
        };
        let names: Vec<&str> = roles.iter().map(|role| role.name.as_str()).collect();
        assert_eq!(names, vec!["Admin", "User"]);
    }

    #[tokio::test]
    async fn delete_removes_only_the_given_role() {
        let repository = InMemoryRoleRepository::new();

        let Ok(admin) = repository.create_role("Admin", "ADMIN").await else {
            panic!("create failed");
        };
        assert!(repository.create_role("User", "USER").await.is_ok());

        assert!(repository.delete_role(&admin).await.is_ok());

        let Ok(found) = repository.find_role_by_id(admin.id).await else {
            panic!("lookup failed");
        };
        assert!(found.is_none());
        assert!(matches!(repository.role_exists("USER").await, Ok(true)));
    }
}
