use crate::domain::errors::{ServiceError, ServiceResult};
use crate::domain::models::role::Role;
use crate::domain::ports::role_repository::RoleRepository;
use std::sync::Arc;

pub const ROLE_TO_SAVE_NULL: &str = "Role to be saved must not be null";
pub const ROLES_TO_REMOVE_NULL: &str = "Roles to be removed must not be null";
pub const ROLE_NAME_EMPTY: &str = "Role name must not be empty";

/// Save, remove and query roles through an injected persistence context.
///
/// Holds no state of its own, so clones can be handed to concurrent callers.
/// Every failure leaves as a [`ServiceError`].
#[derive(Clone)]
pub struct RoleService {
    repository: Arc<dyn RoleRepository>,
}

impl RoleService {
    pub fn new(repository: Arc<dyn RoleRepository>) -> Self {
        Self { repository }
    }

    /// Insert a transient role or merge a persisted one.
    pub async fn save(&self, role: Option<Role>) -> ServiceResult<Role> {
        self.save_role(role)
            .await
            .map_err(|e| record_failure("save", e))
    }

    /// Delete the role with the given id. Unknown ids are ignored.
    pub async fn remove(&self, id: Option<i64>) -> ServiceResult<()> {
        self.remove_role(id)
            .await
            .map_err(|e| record_failure("remove", e))
    }

    pub async fn find_all(&self) -> ServiceResult<Vec<Role>> {
        self.repository
            .find_all()
            .await
            .map_err(|e| record_failure("find_all", e.into()))
    }

    pub async fn find_by_name(&self, name: &str) -> ServiceResult<Option<Role>> {
        self.repository
            .find_by_name(name)
            .await
            .map_err(|e| record_failure("find_by_name", e.into()))
    }

    pub async fn find_by_id(&self, id: i64) -> ServiceResult<Option<Role>> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|e| record_failure("find_by_id", e.into()))
    }

    async fn save_role(&self, role: Option<Role>) -> ServiceResult<Role> {
        let role = role.ok_or_else(|| ServiceError::invalid_argument(ROLE_TO_SAVE_NULL))?;

        if role.name.trim().is_empty() {
            return Err(ServiceError::invalid_argument(ROLE_NAME_EMPTY));
        }

        let saved = if role.is_new() {
            let created = self.repository.insert(&role).await?;
            tracing::info!(role_id = ?created.id, name = %created.name, "Role created");
            created
        } else {
            let updated = self.repository.merge(&role).await?;
            tracing::info!(
                role_id = ?updated.id,
                name = %updated.name,
                version = updated.version,
                "Role updated"
            );
            updated
        };

        metrics::counter!("roles_saved_total").increment(1);
        Ok(saved)
    }

    async fn remove_role(&self, id: Option<i64>) -> ServiceResult<()> {
        let id = id.ok_or_else(|| ServiceError::invalid_argument(ROLES_TO_REMOVE_NULL))?;

        if self.repository.delete_by_id(id).await? {
            tracing::info!(role_id = id, "Role removed");
            metrics::counter!("roles_removed_total").increment(1);
        } else {
            tracing::debug!(role_id = id, "Role not found, nothing to remove");
        }

        Ok(())
    }
}

fn record_failure(operation: &'static str, error: ServiceError) -> ServiceError {
    tracing::warn!(operation, error = %error, "Role service operation failed");
    metrics::counter!("role_service_errors_total", "operation" => operation).increment(1);
    error
}
