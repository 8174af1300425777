use sea_orm::{DbErr, SqlErr};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("Duplicate field value entered")]
    Duplicate,

    #[error("{0}")]
    InvalidQuery(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("file exceeds the maximum upload size")]
    FileTooLarge,

    #[error("{0}")]
    ObjectStorage(String),

    #[error("Email could not be sent")]
    MailDelivery,

    #[error("Server Error")]
    Internal,
}

impl CoreError {
    /// Translate a database error, keeping constraint violations recognizable
    /// for the HTTP layer while everything else collapses to an internal error.
    pub fn from_db(err: DbErr, context: &str) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => CoreError::Duplicate,
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                CoreError::Validation("Referenced resource does not exist".to_string())
            }
            _ => {
                error!("{context}: {err}");
                CoreError::Internal
            }
        }
    }
}
