//! Precinct Core - Entity Types and Validation
//!
//! Pure data structures and pure functions for the precinct records
//! service. This crate contains the data model, the error taxonomy, and the
//! payload validation rules - no storage, no orchestration, no I/O.

pub mod entities;
pub mod enums;
pub mod error;
pub mod identity;
pub mod payload;
pub mod validation;

pub use entities::{Agent, Case};
pub use enums::{
    AgentRole, AgentRoleParseError, AgentSortKey, AgentSortKeyParseError, CaseStatus,
    CaseStatusParseError, EntityKind,
};
pub use error::{RecordsError, RecordsResult, StoreError};
pub use identity::{new_entity_id, AgentId, CaseId, EntityId};
pub use payload::{
    AgentDraft, AgentPatch, AgentPayload, CaseDraft, CasePatch, CasePayload,
};
