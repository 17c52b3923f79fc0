// src/application/error.rs
use crate::domain::errors::DomainError;
use crate::domain::search::schema::SchemaError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource not found: {0}")]
    NotFound(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// The schema error behind this failure, if any.
    pub fn schema_error(&self) -> Option<&SchemaError> {
        match self {
            Self::Domain(DomainError::Schema(err)) => Some(err),
            _ => None,
        }
    }
}

impl From<SchemaError> for ApplicationError {
    fn from(value: SchemaError) -> Self {
        Self::Domain(value.into())
    }
}
