// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("data access error: {0}")]
    DataAccess(String),
}

impl DomainError {
    pub fn data_access(msg: impl Into<String>) -> Self {
        Self::DataAccess(msg.into())
    }
}
