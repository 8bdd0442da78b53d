//! Precinct Service - Consistency Orchestration
//!
//! `RecordsService` is the component an HTTP layer calls directly. It wires
//! validation, the agent store, and the case store together, and it is the
//! only place where cross-store referential integrity is enforced: a case
//! never persists with an `agentId` that did not resolve to a stored agent
//! at the moment of the write.
//!
//! Every case write follows one fixed ordering - existence check of the
//! primary entity, field validation, foreign-key resolution, identifier
//! immutability, mutation - so a malformed request always surfaces the same
//! error first. PUT and PATCH run through a single parameterized update
//! routine to keep that ordering from diverging.

pub mod agents;
pub mod cases;
pub mod query;

pub use query::{AgentQuery, CaseQuery};

use precinct_core::{RecordsError, RecordsResult};
use precinct_storage::{AgentStore, CaseStore, InMemoryAgentStore, InMemoryCaseStore};
use std::sync::Arc;
use uuid::Uuid;

/// Update discipline shared by the PUT and PATCH paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UpdateMode {
    /// Full replace: every field required, unspecified fields are lost.
    Replace,
    /// Partial merge: a nonempty subset, unspecified fields are kept.
    Merge,
}

/// Orchestrates validation, both stores, and referential integrity.
///
/// Holds references to the stores but owns neither collection. Construct
/// one at process start and hand it to the HTTP layer.
pub struct RecordsService {
    agents: Arc<dyn AgentStore>,
    cases: Arc<dyn CaseStore>,
}

impl RecordsService {
    /// Build a service over existing stores.
    pub fn new(agents: Arc<dyn AgentStore>, cases: Arc<dyn CaseStore>) -> Self {
        Self { agents, cases }
    }

    /// Build a service over fresh, empty in-memory stores.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryAgentStore::new()),
            Arc::new(InMemoryCaseStore::new()),
        )
    }

    pub(crate) fn agents(&self) -> &dyn AgentStore {
        self.agents.as_ref()
    }

    pub(crate) fn cases(&self) -> &dyn CaseStore {
        self.cases.as_ref()
    }
}

/// Parse a path-segment identifier. Identifiers arrive from the HTTP layer
/// as raw strings.
pub(crate) fn parse_id(raw: &str) -> RecordsResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| RecordsError::validation("id", "must be a well-formed UUID"))
}

/// Reject a payload that tries to change the target's identifier. A payload
/// id equal to the stored one is tolerated; anything else - including a
/// malformed id - is an attempt to change an immutable field.
pub(crate) fn reject_foreign_id(supplied: Option<&str>, current: Uuid) -> RecordsResult<()> {
    match supplied {
        None => Ok(()),
        Some(raw) => match Uuid::parse_str(raw) {
            Ok(parsed) if parsed == current => Ok(()),
            _ => Err(RecordsError::IdentifierImmutable { id: current }),
        },
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_rejects_malformed_uuid() {
        assert!(parse_id("401bccf5-cf9e-489d-8412-446cd169a0f1").is_ok());
        assert!(matches!(
            parse_id("not-a-uuid"),
            Err(RecordsError::Validation { field, .. }) if field == "id"
        ));
    }

    #[test]
    fn test_reject_foreign_id() {
        let current = Uuid::now_v7();
        assert!(reject_foreign_id(None, current).is_ok());
        assert!(reject_foreign_id(Some(&current.to_string()), current).is_ok());
        assert_eq!(
            reject_foreign_id(Some(&Uuid::now_v7().to_string()), current),
            Err(RecordsError::IdentifierImmutable { id: current })
        );
        assert_eq!(
            reject_foreign_id(Some("garbage"), current),
            Err(RecordsError::IdentifierImmutable { id: current })
        );
    }
}
