use crate::domain::errors::{StoreError, StoreResult};
use crate::domain::models::role::Role;
use crate::domain::ports::role_repository::RoleRepository;
use crate::infrastructure::persistence::Database;
use async_trait::async_trait;
use sqlx::any::AnyRow;
use sqlx::Row;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

const ROLE_COLUMNS: &str = "id, name, description, version, created_at, updated_at";

fn internal(e: sqlx::Error) -> StoreError {
    StoreError::Internal(e.to_string())
}

fn now_rfc3339() -> StoreResult<String> {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|e| StoreError::Internal(format!("Timestamp formatting error: {}", e)))
}

fn role_from_row(row: &AnyRow) -> StoreResult<Role> {
    Ok(Role {
        id: Some(row.try_get("id").map_err(internal)?),
        name: row.try_get("name").map_err(internal)?,
        description: row
            .try_get::<Option<String>, _>("description")
            .map_err(internal)?,
        version: row.try_get("version").map_err(internal)?,
        created_at: Some(row.try_get("created_at").map_err(internal)?),
        updated_at: Some(row.try_get("updated_at").map_err(internal)?),
    })
}

#[async_trait]
impl RoleRepository for Database {
    async fn insert(&self, role: &Role) -> StoreResult<Role> {
        let now = now_rfc3339()?;

        // Row and identity come from the same statement
        let row = sqlx::query(
            "INSERT INTO roles (name, description, version, created_at, updated_at)
             VALUES (?, ?, 0, ?, ?)
             RETURNING id",
        )
        .bind(&role.name)
        .bind(&role.description)
        .bind(&now)
        .bind(&now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                StoreError::Duplicate(role.name.clone())
            }
            other => internal(other),
        })?;

        let id = row.try_get::<i64, _>("id").map_err(internal)?;

        Ok(Role {
            id: Some(id),
            name: role.name.clone(),
            description: role.description.clone(),
            version: 0,
            created_at: Some(now.clone()),
            updated_at: Some(now),
        })
    }

    async fn merge(&self, role: &Role) -> StoreResult<Role> {
        let id = role.id.ok_or(StoreError::MissingIdentity)?;
        let now = now_rfc3339()?;

        // name is the immutable business key and is never rewritten
        let result = sqlx::query(
            "UPDATE roles
             SET description = ?, version = version + 1, updated_at = ?
             WHERE id = ? AND version = ?",
        )
        .bind(&role.description)
        .bind(&now)
        .bind(id)
        .bind(role.version)
        .execute(&self.pool)
        .await
        .map_err(internal)?;

        if result.rows_affected() == 0 {
            return Err(match self.find_by_id(id).await? {
                Some(_) => StoreError::StaleVersion {
                    id,
                    expected: role.version,
                },
                None => StoreError::NotFound(id),
            });
        }

        self.find_by_id(id).await?.ok_or(StoreError::NotFound(id))
    }

    async fn delete_by_id(&self, id: i64) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM roles WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(internal)?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Role>> {
        let row = sqlx::query(&format!("SELECT {} FROM roles WHERE id = ?", ROLE_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(internal)?;

        row.as_ref().map(role_from_row).transpose()
    }

    async fn find_all(&self) -> StoreResult<Vec<Role>> {
        let rows = sqlx::query(&format!("SELECT {} FROM roles ORDER BY name", ROLE_COLUMNS))
            .fetch_all(&self.pool)
            .await
            .map_err(internal)?;

        rows.iter().map(role_from_row).collect()
    }

    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Role>> {
        let row = sqlx::query(&format!("SELECT {} FROM roles WHERE name = ?", ROLE_COLUMNS))
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(internal)?;

        row.as_ref().map(role_from_row).transpose()
    }
}
