//! Error types for the Order actor.

use crate::links::{LinkError, RecordRef};
use crate::validation::ValidationErrors;
use actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The order data is invalid, or references a customer or beer that does not exist.
    #[error("Order validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Order version conflict on {id}: expected {expected}, actual {actual}")]
    Conflict {
        id: String,
        expected: u64,
        actual: u64,
    },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            FrameworkError::VersionConflict {
                id,
                expected,
                actual,
            } => OrderError::Conflict {
                id,
                expected,
                actual,
            },
            other => match other.downcast_entity::<OrderError>() {
                Ok(order) => order,
                Err(other) => OrderError::ActorCommunicationError(other.to_string()),
            },
        }
    }
}

/// Unknown references become one field violation each.
impl From<LinkError> for OrderError {
    fn from(e: LinkError) -> Self {
        match e {
            LinkError::UnknownRecords(records) => {
                let mut errors = ValidationErrors::new();
                for record in records {
                    let field = match record {
                        RecordRef::Customer(_) => "customer_id",
                        RecordRef::Beer(_) => "lines.beer_id",
                        RecordRef::Category(_) | RecordRef::Order(_) => "order",
                    };
                    errors.push(field, format!("{record} does not exist"));
                }
                OrderError::Validation(errors)
            }
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
