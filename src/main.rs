use std::sync::Arc;
use wms_core::bootstrap;
use wms_core::config::Config;
use wms_core::domain::ports::role_repository::RoleRepository;
use wms_core::infrastructure::observability;
use wms_core::infrastructure::persistence::Database;
use wms_core::RoleService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing and metrics
    let _observability = observability::init(&config)?;
    tracing::info!("Configuration loaded");

    // Initialize database connection
    let db = Database::connect(&config.database_url, config.database_max_connections).await?;
    tracing::info!("Database connection established");

    // Run migrations
    db.run_migrations().await?;
    tracing::info!("Database migrations applied");

    let roles = RoleService::new(Arc::new(db) as Arc<dyn RoleRepository>);

    if let Err(e) = bootstrap::seed_roles(&roles, &config.seed_roles).await {
        tracing::error!("Failed to seed roles: {}", e);
        return Err(e.into());
    }

    let all = roles.find_all().await?;
    tracing::info!(total = all.len(), "Roles available");
    println!("{}", serde_json::to_string_pretty(&all)?);

    Ok(())
}
