//! Model-specific error types.

use thiserror::Error;

use crate::entity::EntityKind;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Coarse classification of a failure, for callers that translate errors
/// into transport-level responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    DuplicateEntity,
    InvalidArgument,
    RouteNotFound,
    EmptyModel,
    Internal,
}

/// Model construction, lookup and validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A station, line, district or zone key was never added.
    #[error("No such {kind} '{key}'")]
    NotFound { kind: EntityKind, key: String },

    /// A station with this name has already been added.
    #[error("Station '{name}' already exists")]
    DuplicateStation { name: String },

    /// The station is already associated with the line.
    #[error("Station '{station}' is already on line '{line}'")]
    DuplicateMembership { station: String, line: String },

    /// Zones passed to `add_station` were empty or contained zero.
    #[error("Invalid zones for station '{station}': {what}")]
    InvalidZones { station: String, what: &'static str },

    /// Cross-references between collections disagree.
    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}

impl ModelError {
    pub(crate) fn not_found(kind: EntityKind, key: impl ToString) -> Self {
        ModelError::NotFound {
            kind,
            key: key.to_string(),
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ModelError::NotFound { .. } => ErrorKind::NotFound,
            ModelError::DuplicateStation { .. } | ModelError::DuplicateMembership { .. } => {
                ErrorKind::DuplicateEntity
            }
            ModelError::InvalidZones { .. } => ErrorKind::InvalidArgument,
            ModelError::Invariant { .. } => ErrorKind::Internal,
        }
    }
}
