//! # Framework Errors
//!
//! Errors raised by the engine itself, plus the boxed entity error that carries a
//! resource's own error type across the channel.

/// Errors that can occur within the actor engine.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the entity's own error type when the failure came from an entity hook.
    ///
    /// Returns the original `FrameworkError` when it is not an entity error, or when the
    /// boxed error is of a different type.
    pub fn downcast_entity<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + 'static,
    {
        match self {
            FrameworkError::EntityError(boxed) => match boxed.downcast::<E>() {
                Ok(err) => Ok(*err),
                Err(boxed) => Err(FrameworkError::EntityError(boxed)),
            },
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("table is occupied")]
    struct TableOccupied;

    #[test]
    fn test_downcast_recovers_entity_error() {
        let err = FrameworkError::EntityError(Box::new(TableOccupied));
        assert_eq!(err.downcast_entity::<TableOccupied>().unwrap(), TableOccupied);
    }

    #[test]
    fn test_downcast_keeps_foreign_errors() {
        let err = FrameworkError::EntityError(Box::new(std::io::Error::other("disk")));
        let back = err.downcast_entity::<TableOccupied>().unwrap_err();
        assert!(back.to_string().contains("disk"));

        let not_found = FrameworkError::NotFound("table_9".into());
        assert!(matches!(
            not_found.downcast_entity::<TableOccupied>(),
            Err(FrameworkError::NotFound(id)) if id == "table_9"
        ));
    }
}
