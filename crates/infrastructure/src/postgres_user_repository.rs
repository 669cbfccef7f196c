use std::collections::BTreeSet;

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use roledesk_application::{UserRecord, UserRepository};
use roledesk_core::{AppError, AppResult};
use roledesk_domain::UserId;

/// PostgreSQL-backed user repository.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: uuid::Uuid,
    username: String,
    full_name: String,
}

impl From<UserRow> for UserRecord {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId::from_uuid(row.id),
            username: row.username,
            full_name: row.full_name,
        }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn list_users(&self) -> AppResult<Vec<UserRecord>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, full_name
            FROM users
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::store(format!("failed to list users: {error}")))?;

        Ok(rows.into_iter().map(UserRecord::from).collect())
    }

    async fn find_user_by_id(&self, user_id: UserId) -> AppResult<Option<UserRecord>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, full_name
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::store(format!("failed to find user: {error}")))?;

        Ok(row.map(UserRecord::from))
    }

    async fn assigned_role_names(&self, user: &UserRecord) -> AppResult<BTreeSet<String>> {
        let names = sqlx::query_scalar::<_, String>(
            r#"
            SELECT roles.name
            FROM user_roles
            INNER JOIN roles
                ON roles.id = user_roles.role_id
            WHERE user_roles.user_id = $1
            "#,
        )
        .bind(user.id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|error| {
            AppError::store(format!("failed to read assigned role names: {error}"))
        })?;

        Ok(names.into_iter().collect())
    }
}
