//! Error types for query operations.

use thiserror::Error;
use ug_model::{ErrorKind, ModelError};

/// Errors that can occur while answering a query.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    #[error(transparent)]
    Model(#[from] ModelError),

    /// The search ran out of lines without reaching the destination.
    #[error("Cannot find a route from '{start}' to '{destination}'")]
    RouteNotFound { start: String, destination: String },

    /// An aggregate was requested over an empty collection.
    #[error("Model has no {what}")]
    EmptyModel { what: &'static str },

    #[error("Invalid query configuration: {what}")]
    InvalidConfig { what: String },

    #[error("Internal query error: {what}")]
    Internal { what: String },
}

pub type QueryResult<T> = Result<T, QueryError>;

impl QueryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            QueryError::Model(e) => e.kind(),
            QueryError::RouteNotFound { .. } => ErrorKind::RouteNotFound,
            QueryError::EmptyModel { .. } => ErrorKind::EmptyModel,
            QueryError::InvalidConfig { .. } => ErrorKind::InvalidArgument,
            QueryError::Internal { .. } => ErrorKind::Internal,
        }
    }
}
