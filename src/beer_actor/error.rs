//! Error types for the Beer actor.

use crate::links::LinkError;
use crate::validation::ValidationErrors;
use actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during beer operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BeerError {
    /// The requested beer was not found.
    #[error("Beer not found: {0}")]
    NotFound(String),

    /// The beer data violates one or more field constraints.
    #[error("Beer validation error: {0}")]
    Validation(#[from] ValidationErrors),

    /// The caller wrote against a stale version.
    #[error("Beer version conflict on {id}: expected {expected}, actual {actual}")]
    Conflict {
        id: String,
        expected: u64,
        actual: u64,
    },

    /// Order lines still reference the beer.
    #[error("Beer still referenced: {0}")]
    StillReferenced(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for BeerError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => BeerError::NotFound(id),
            FrameworkError::VersionConflict {
                id,
                expected,
                actual,
            } => BeerError::Conflict {
                id,
                expected,
                actual,
            },
            other => match other.downcast_entity::<BeerError>() {
                Ok(beer) => beer,
                Err(other) => BeerError::ActorCommunicationError(other.to_string()),
            },
        }
    }
}

impl From<LinkError> for BeerError {
    fn from(e: LinkError) -> Self {
        match e {
            LinkError::StillReferenced { .. } => BeerError::StillReferenced(e.to_string()),
            LinkError::UpcTaken { upc, .. } => BeerError::Validation(ValidationErrors::single(
                "upc",
                format!("{upc} is already used by another beer"),
            )),
            other => BeerError::ActorCommunicationError(other.to_string()),
        }
    }
}
