use crate::domain::errors::ServiceResult;
use crate::domain::models::role::Role;
use crate::domain::services::role_service::RoleService;

/// Ensure every named role exists. Returns how many were created.
pub async fn seed_roles(service: &RoleService, names: &[String]) -> ServiceResult<usize> {
    let mut created = 0;

    for name in names {
        if service.find_by_name(name).await?.is_some() {
            tracing::debug!(name = %name, "Role already present, skipping seed");
            continue;
        }

        service.save(Some(Role::new(name.as_str()))).await?;
        created += 1;
    }

    tracing::info!(created, requested = names.len(), "Role seeding finished");
    Ok(created)
}
