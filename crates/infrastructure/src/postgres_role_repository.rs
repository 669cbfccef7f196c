use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use roledesk_application::{RoleRecord, RoleRepository};
use roledesk_core::{AppError, AppResult};
use roledesk_domain::RoleId;

/// PostgreSQL-backed role repository.
///
/// The `roles.normalized_name` unique constraint is the authoritative
/// duplicate check; a create that races past the service pre-check is
/// rejected here and reported as a conflict.
#[derive(Clone)]
pub struct PostgresRoleRepository {
    pool: PgPool,
}

impl PostgresRoleRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RoleRow {
    id: uuid::Uuid,
    name: String,
    normalized_name: String,
}

impl From<RoleRow> for RoleRecord {
    fn from(row: RoleRow) -> Self {
        Self {
            id: RoleId::from_uuid(row.id),
            name: row.name,
            normalized_name: row.normalized_name,
        }
    }
}

#[async_trait]
impl RoleRepository for PostgresRoleRepository {
    async fn list_roles(&self) -> AppResult<Vec<RoleRecord>> {
        let rows = sqlx::query_as::<_, RoleRow>(
            r#"
            SELECT id, name, normalized_name
            FROM roles
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::store(format!("failed to list roles: {error}")))?;

        Ok(rows.into_iter().map(RoleRecord::from).collect())
    }

    async fn role_exists(&self, normalized_name: &str) -> AppResult<bool> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM roles
            WHERE normalized_name = $1
            "#,
        )
        .bind(normalized_name)
        .fetch_one(&self.pool)
        .await
        .map_err(|error| AppError::store(format!("failed to check role existence: {error}")))?;

        Ok(count > 0)
    }

    async fn create_role(&self, name: &str, normalized_name: &str) -> AppResult<RoleRecord> {
        let role_id = sqlx::query_scalar::<_, uuid::Uuid>(
            r#"
            INSERT INTO roles (name, normalized_name)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(name)
        .bind(normalized_name)
        .fetch_one(&self.pool)
        .await
        .map_err(|error| map_role_conflict(error, name))?;

        Ok(RoleRecord {
            id: RoleId::from_uuid(role_id),
            name: name.to_owned(),
            normalized_name: normalized_name.to_owned(),
        })
    }

    async fn find_role_by_id(&self, role_id: RoleId) -> AppResult<Option<RoleRecord>> {
        let row = sqlx::query_as::<_, RoleRow>(
            r#"
            SELECT id, name, normalized_name
            FROM roles
            WHERE id = $1
            "#,
        )
        .bind(role_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::store(format!("failed to find role: {error}")))?;

        Ok(row.map(RoleRecord::from))
    }

    async fn delete_role(&self, role: &RoleRecord) -> AppResult<()> {
        // Assignments go with the role (ON DELETE CASCADE); a role already
        // deleted by a concurrent caller is not an error.
        sqlx::query(
            r#"
            DELETE FROM roles
            WHERE id = $1
            "#,
        )
        .bind(role.id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|error| AppError::store(format!("failed to delete role: {error}")))?;

        Ok(())
    }
}

fn map_role_conflict(error: sqlx::Error, role_name: &str) -> AppError {
    if let sqlx::Error::Database(database_error) = &error
        && database_error.code().as_deref() == Some("23505")
    {
        return AppError::Conflict(format!("role '{role_name}' already exists"));
    }

    AppError::store(format!("failed to create role: {error}"))
}
