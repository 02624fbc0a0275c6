pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::*;
pub use domain::errors::*;
pub use domain::models::role::{Role, RoleState};
pub use domain::ports::role_repository::RoleRepository;
pub use domain::services::role_service::RoleService;
pub use infrastructure::persistence::Database;
