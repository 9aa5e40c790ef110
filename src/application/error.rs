// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ApplicationError {
    /// True when the failure came from reading, parsing or writing listings.
    pub const fn is_data_access(&self) -> bool {
        matches!(self, Self::Domain(DomainError::DataAccess(_)))
    }
}
