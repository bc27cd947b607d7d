//! # Framework Errors
//!
//! Errors raised by the actor runtime itself. Entity-specific failures travel inside
//! [`FrameworkError::EntityError`] and are recovered by the resource clients.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Version conflict on {id}: expected {expected}, actual {actual}")]
    VersionConflict {
        id: String,
        expected: u64,
        actual: u64,
    },
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Wraps an entity error, keeping it downcastable.
    pub fn entity<E: std::error::Error + Send + Sync + 'static>(error: E) -> Self {
        FrameworkError::EntityError(Box::new(error))
    }

    /// Recovers the typed entity error carried by [`FrameworkError::EntityError`].
    ///
    /// Returns the original error unchanged when it is another variant or carries a
    /// different error type.
    pub fn downcast_entity<E: std::error::Error + 'static>(self) -> Result<E, FrameworkError> {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(typed) => Ok(*typed),
                Err(other) => Err(FrameworkError::EntityError(other)),
            },
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error, PartialEq)]
    #[error("stock too low")]
    struct StockError;

    #[test]
    fn downcast_recovers_entity_error() {
        let err = FrameworkError::entity(StockError);
        assert_eq!(err.downcast_entity::<StockError>().unwrap(), StockError);
    }

    #[test]
    fn downcast_keeps_other_variants() {
        let err = FrameworkError::NotFound("7".into());
        assert!(matches!(
            err.downcast_entity::<StockError>(),
            Err(FrameworkError::NotFound(id)) if id == "7"
        ));

        let foreign = FrameworkError::entity(std::io::Error::other("disk"));
        assert!(matches!(
            foreign.downcast_entity::<StockError>(),
            Err(FrameworkError::EntityError(_))
        ));
    }
}
