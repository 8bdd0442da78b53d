//! Error types for precinct operations

use crate::EntityKind;
use thiserror::Error;
use uuid::Uuid;

/// Storage layer errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: EntityKind, id: Uuid },

    #[error("{entity} already exists: {id}")]
    AlreadyExists { entity: EntityKind, id: Uuid },

    #[error("store lock poisoned")]
    LockPoisoned,
}

/// Typed failures surfaced to the HTTP layer.
///
/// Every failure is detected synchronously at the point of violation and
/// returned as a value. The HTTP layer owns the translation to status
/// codes; this core never sets one.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordsError {
    /// Payload failed a field rule or required-field check.
    /// Carries the first offending field only (fail-fast).
    #[error("invalid field '{field}': {reason}")]
    Validation { field: String, reason: String },

    /// Payload attempted to set or change the primary identifier.
    #[error("identifier of {id} is immutable")]
    IdentifierImmutable { id: Uuid },

    /// The primary entity of a get/replace/merge/delete does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: EntityKind, id: Uuid },

    /// A case's `agentId` does not resolve to an existing agent.
    #[error("unknown agent reference: {agent_id}")]
    UnknownReference { agent_id: Uuid },

    /// A partial-update payload supplied zero updatable fields.
    #[error("partial update supplied no fields")]
    EmptyPatch,

    /// Storage-internal failure with no domain meaning.
    #[error(transparent)]
    Store(StoreError),
}

impl RecordsError {
    /// Build a validation failure for `field`.
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        RecordsError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// HTTP status code the consuming layer is expected to map this to.
    /// Documented here so the mapping stays in one place; no HTTP types
    /// are involved.
    pub fn status_hint(&self) -> u16 {
        match self {
            RecordsError::Validation { .. }
            | RecordsError::IdentifierImmutable { .. }
            | RecordsError::EmptyPatch => 400,
            RecordsError::NotFound { .. } | RecordsError::UnknownReference { .. } => 404,
            RecordsError::Store(_) => 500,
        }
    }
}

impl From<StoreError> for RecordsError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { entity, id } => RecordsError::NotFound { entity, id },
            other => RecordsError::Store(other),
        }
    }
}

/// Result type for precinct operations.
pub type RecordsResult<T> = Result<T, RecordsError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_not_found_lifts_to_records_not_found() {
        let id = Uuid::now_v7();
        let err: RecordsError = StoreError::NotFound {
            entity: EntityKind::Case,
            id,
        }
        .into();
        assert_eq!(
            err,
            RecordsError::NotFound {
                entity: EntityKind::Case,
                id
            }
        );
    }

    #[test]
    fn test_lock_poisoned_stays_a_store_error() {
        let err: RecordsError = StoreError::LockPoisoned.into();
        assert_eq!(err, RecordsError::Store(StoreError::LockPoisoned));
        assert_eq!(err.status_hint(), 500);
    }

    #[test]
    fn test_status_hints() {
        assert_eq!(RecordsError::validation("name", "required").status_hint(), 400);
        assert_eq!(RecordsError::EmptyPatch.status_hint(), 400);
        let id = Uuid::now_v7();
        assert_eq!(
            RecordsError::UnknownReference { agent_id: id }.status_hint(),
            404
        );
        assert_eq!(
            RecordsError::NotFound {
                entity: EntityKind::Agent,
                id
            }
            .status_hint(),
            404
        );
    }
}
