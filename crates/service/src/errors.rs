use common::messages;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    /// Displays the bare message; it is sent to clients as-is.
    #[error("{0}")]
    NotFound(String),
}

impl ServiceError {
    pub fn category_not_found() -> Self { Self::NotFound(messages::CATEGORY_NOT_FOUND.to_string()) }

    pub fn ids_exhausted() -> Self { Self::Validation("no category id left to assign".into()) }
}
