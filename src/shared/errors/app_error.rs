use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Which side of the aggregate a lookup failed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntityKind {
    Parent,
    Child,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Parent => write!(f, "Parent"),
            EntityKind::Child => write!(f, "Child"),
        }
    }
}

#[derive(Error, Debug, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Invalid argument '{param}': {message}")]
    InvalidArgument { param: String, message: String },

    #[error("{entity} does not exist (id {id})")]
    NotFound { entity: EntityKind, id: i32 },

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn invalid_argument(param: &str, message: impl Into<String>) -> Self {
        AppError::InvalidArgument {
            param: param.to_string(),
            message: message.into(),
        }
    }

    pub fn parent_not_found(id: i32) -> Self {
        AppError::NotFound {
            entity: EntityKind::Parent,
            id,
        }
    }

    pub fn child_not_found(id: i32) -> Self {
        AppError::NotFound {
            entity: EntityKind::Child,
            id,
        }
    }

    /// True for the `NotFound` family, regardless of entity.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound { .. })
    }
}

impl From<diesel::result::Error> for AppError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => {
                AppError::DatabaseError("Record not found in database".to_string())
            }
            _ => AppError::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::r2d2::PoolError> for AppError {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        AppError::DatabaseError(format!("Database pool error: {}", err))
    }
}

impl From<diesel::ConnectionError> for AppError {
    fn from(err: diesel::ConnectionError) -> Self {
        AppError::DatabaseError(format!("Database connection error: {}", err))
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::InternalError(format!("Blocking database task failed: {}", err))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
