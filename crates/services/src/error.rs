use thiserror::Error;

use trailex_store::StoreError;

/// Domain validation failures stay distinct from storage failures: callers
/// can match on `NotFound`/`InvalidState` without caring how collections
/// are persisted.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    InvalidState(&'static str),
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
