use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;

use roledesk_application::{UserRecord, UserRepository};
use roledesk_core::AppResult;
use roledesk_domain::UserId;

/// In-memory user repository implementation.
///
/// Assigned role names are kept as plain strings; names that no longer
/// match an existing role simply read back as unassigned.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<UserRecord>>,
    assignments: RwLock<HashMap<UserId, BTreeSet<String>>>,
}

impl InMemoryUserRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            assignments: RwLock::new(HashMap::new()),
        }
    }

    /// Inserts a user record and returns its identifier.
    pub async fn insert_user(&self, username: &str, full_name: &str) -> UserId {
        let user = UserRecord {
            id: UserId::new(),
            username: username.to_owned(),
            full_name: full_name.to_owned(),
        };
        let user_id = user.id;
        self.users.write().await.push(user);
        user_id
    }

    /// Assigns a role name to a user directly, bypassing any service flow.
    pub async fn assign_role_name(&self, user_id: UserId, role_name: &str) {
        self.assignments
            .write()
            .await
            .entry(user_id)
            .or_default()
            .insert(role_name.to_owned());
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list_users(&self) -> AppResult<Vec<UserRecord>> {
        Ok(self.users.read().await.clone())
    }

    async fn find_user_by_id(&self, user_id: UserId) -> AppResult<Option<UserRecord>> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|user| user.id == user_id)
            .cloned())
    }

    async fn assigned_role_names(&self, user: &UserRecord) -> AppResult<BTreeSet<String>> {
        Ok(self
            .assignments
            .read()
            .await
            .get(&user.id)
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use roledesk_application::UserRepository;
    use roledesk_domain::UserId;

    use super::InMemoryUserRepository;

    #[tokio::test]
    async fn assigned_names_default_to_empty() {
        let repository = InMemoryUserRepository::new();
        let user_id = repository.insert_user("alice", "Alice Doe").await;

        let Ok(Some(user)) = repository.find_user_by_id(user_id).await else {
            panic!("inserted user was not found");
        };
        let Ok(assigned) = repository.assigned_role_names(&user).await else {
            panic!("assignment read failed");
        };
        assert!(assigned.is_empty());
    }

    #[tokio::test]
    async fn direct_assignment_is_visible_on_read() {
        let repository = InMemoryUserRepository::new();
        let user_id = repository.insert_user("alice", "Alice Doe").await;
        repository.assign_role_name(user_id, "Admin").await;

        let Ok(Some(user)) = repository.find_user_by_id(user_id).await else {
            panic!("inserted user was not found");
        };
        let Ok(assigned) = repository.assigned_role_names(&user).await else {
            panic!("assignment read failed");
        };
        assert!(assigned.contains("Admin"));
    }

    #[tokio::test]
    async fn unknown_user_lookup_returns_none() {
        let repository = InMemoryUserRepository::new();
        let Ok(found) = repository.find_user_by_id(UserId::new()).await else {
            panic!("lookup failed");
        };
        assert!(found.is_none());
    }
}
