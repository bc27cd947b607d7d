//! Error types for the Customer actor.

use crate::links::LinkError;
use crate::validation::ValidationErrors;
use actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during customer operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CustomerError {
    /// The requested customer was not found.
    #[error("Customer not found: {0}")]
    NotFound(String),

    #[error("Customer validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Customer version conflict on {id}: expected {expected}, actual {actual}")]
    Conflict {
        id: String,
        expected: u64,
        actual: u64,
    },

    /// The customer still owns orders.
    #[error("Customer still referenced: {0}")]
    StillReferenced(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for CustomerError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => CustomerError::NotFound(id),
            FrameworkError::VersionConflict {
                id,
                expected,
                actual,
            } => CustomerError::Conflict {
                id,
                expected,
                actual,
            },
            other => match other.downcast_entity::<CustomerError>() {
                Ok(customer) => customer,
                Err(other) => CustomerError::ActorCommunicationError(other.to_string()),
            },
        }
    }
}

impl From<LinkError> for CustomerError {
    fn from(e: LinkError) -> Self {
        match e {
            LinkError::StillReferenced { .. } => CustomerError::StillReferenced(e.to_string()),
            other => CustomerError::ActorCommunicationError(other.to_string()),
        }
    }
}
