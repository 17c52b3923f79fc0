// src/domain/errors.rs
use crate::domain::search::schema::SchemaError;
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}
