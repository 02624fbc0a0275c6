use thiserror::Error;

/// Failure raised by a role persistence context.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Role with name '{0}' already exists")]
    Duplicate(String),
    #[error("Role with id {0} not found")]
    NotFound(i64),
    #[error("Role with id {id} was modified concurrently (expected version {expected})")]
    StaleVersion { id: i64, expected: i64 },
    #[error("Role has no identity and cannot be merged")]
    MissingIdentity,
    #[error("{0}")]
    Internal(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// The single error kind surfaced at the service boundary.
///
/// `Display` renders the bare message so callers matching on message text
/// see exactly what the call site produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{0}")]
    InvalidArgument(String),
    #[error("{0}")]
    Store(String),
}

impl ServiceError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        ServiceError::InvalidArgument(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            ServiceError::InvalidArgument(msg) | ServiceError::Store(msg) => msg,
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(error: StoreError) -> Self {
        ServiceError::Store(error.to_string())
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
