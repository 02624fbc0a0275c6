use async_trait::async_trait;
use crate::domain::errors::StoreResult;
use crate::domain::models::role::Role;

/// Persistence context for roles. The implementation owns identity assignment.
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Writes a transient role and returns it with its new identity.
    async fn insert(&self, role: &Role) -> StoreResult<Role>;

    /// Updates the mutable fields of a persisted role and returns the stored state.
    async fn merge(&self, role: &Role) -> StoreResult<Role>;

    /// Returns whether a row was deleted.
    async fn delete_by_id(&self, id: i64) -> StoreResult<bool>;

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Role>>;
    async fn find_all(&self) -> StoreResult<Vec<Role>>;
    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Role>>;
}
