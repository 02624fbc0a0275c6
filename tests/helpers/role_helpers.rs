use sqlx::Row;
use wms_core::domain::ports::role_repository::RoleRepository;
use wms_core::infrastructure::persistence::Database;
use wms_core::Role;

pub async fn persist_role(db: &Database, name: &str) -> Role {
    db.insert(&Role::new(name))
        .await
        .expect("Failed to persist role")
}

pub async fn find_role(db: &Database, name: &str) -> Role {
    db.find_by_name(name)
        .await
        .expect("Failed to query role")
        .unwrap_or_else(|| panic!("Role {} not found", name))
}

/// Counts rows with a raw query, bypassing the repository.
pub async fn count_roles(db: &Database) -> i64 {
    sqlx::query("SELECT COUNT(*) AS total FROM roles")
        .fetch_one(db.pool())
        .await
        .expect("Failed to count roles")
        .try_get("total")
        .expect("Failed to read count")
}
