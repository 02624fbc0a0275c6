use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub seed_roles: Vec<String>,
    pub service_name: String,
    pub otel_exporter_endpoint: Option<String>,
    pub metrics_port: Option<u16>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://wms.db?mode=rwc".to_string());

        let database_max_connections = lookup("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|| "5".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidMaxConnections)?;

        let seed_roles = lookup("SEED_ROLES")
            .unwrap_or_else(|| "ROLE_ADMIN,ROLE_USER".to_string())
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect();

        let service_name = lookup("SERVICE_NAME").unwrap_or_else(|| "wms-core".to_string());

        let otel_exporter_endpoint = lookup("OTEL_EXPORTER_OTLP_ENDPOINT");

        let metrics_port = lookup("METRICS_PORT")
            .map(|port| port.parse().map_err(|_| ConfigError::InvalidMetricsPort))
            .transpose()?;

        Ok(Config {
            database_url,
            database_max_connections,
            seed_roles,
            service_name,
            otel_exporter_endpoint,
            metrics_port,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid DATABASE_MAX_CONNECTIONS value")]
    InvalidMaxConnections,

    #[error("Invalid metrics port number")]
    InvalidMetricsPort,
}
