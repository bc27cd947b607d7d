use crate::model::{BeerId, CategoryId, CustomerId, OrderId};
use actor_framework::FrameworkError;
use std::fmt;
use thiserror::Error;

/// A typed reference to any record the link graph knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordRef {
    Beer(BeerId),
    Category(CategoryId),
    Customer(CustomerId),
    Order(OrderId),
}

impl fmt::Display for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordRef::Beer(id) => write!(f, "beer {id}"),
            RecordRef::Category(id) => write!(f, "category {id}"),
            RecordRef::Customer(id) => write!(f, "customer {id}"),
            RecordRef::Order(id) => write!(f, "order {id}"),
        }
    }
}

fn list(records: &[RecordRef]) -> String {
    records
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors raised while maintaining relations between records.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LinkError {
    /// One or more referenced records do not exist.
    #[error("Unknown records: {}", list(.0))]
    UnknownRecords(Vec<RecordRef>),

    /// The record cannot be retired while other records depend on it.
    #[error("{record} is still referenced by {dependents} record(s)")]
    StillReferenced { record: RecordRef, dependents: usize },

    /// Another beer already holds this product code.
    #[error("UPC {upc} is already used by beer {owner}")]
    UpcTaken { upc: String, owner: BeerId },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for LinkError {
    fn from(e: FrameworkError) -> Self {
        match e.downcast_entity::<LinkError>() {
            Ok(link) => link,
            Err(other) => LinkError::ActorCommunicationError(other.to_string()),
        }
    }
}
