use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors reported by the catalog and stock clients.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Catalog entry not found: {0}")]
    NotFound(String),
    #[error("Catalog rejected the request: {0}")]
    Rejected(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for CatalogError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => CatalogError::NotFound(id),
            FrameworkError::Rejected(reason) => CatalogError::Rejected(reason),
            other => CatalogError::ActorCommunicationError(other.to_string()),
        }
    }
}
