//! Error types for the Category actor.

use crate::links::LinkError;
use crate::validation::ValidationErrors;
use actor_framework::FrameworkError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CategoryError {
    #[error("Category not found: {0}")]
    NotFound(String),

    #[error("Category validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Category version conflict on {id}: expected {expected}, actual {actual}")]
    Conflict {
        id: String,
        expected: u64,
        actual: u64,
    },

    /// The beer or category of a link does not exist.
    #[error("Category link error: {0}")]
    Link(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for CategoryError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => CategoryError::NotFound(id),
            FrameworkError::VersionConflict {
                id,
                expected,
                actual,
            } => CategoryError::Conflict {
                id,
                expected,
                actual,
            },
            other => match other.downcast_entity::<CategoryError>() {
                Ok(category) => category,
                Err(other) => CategoryError::ActorCommunicationError(other.to_string()),
            },
        }
    }
}

impl From<LinkError> for CategoryError {
    fn from(e: LinkError) -> Self {
        match e {
            LinkError::ActorCommunicationError(msg) => CategoryError::ActorCommunicationError(msg),
            other => CategoryError::Link(other.to_string()),
        }
    }
}
