//! Request payload shapes consumed from the HTTP layer.
//!
//! A payload is the already-deserialized body of a write request. Every
//! field is optional at this stage; the validation mode (full vs. partial)
//! decides which must be present. Drafts and patches are the validated,
//! normalized outputs.

use crate::{AgentId, AgentRole, CaseStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// RAW PAYLOADS
// ============================================================================

/// Raw agent payload as parsed from a request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AgentPayload {
    /// Present only when a client tries to set the identifier; the service
    /// rejects a value differing from the target record's id.
    pub id: Option<String>,
    pub name: Option<String>,
    pub date_joined: Option<String>,
    pub role: Option<String>,
}

/// Raw case payload as parsed from a request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CasePayload {
    /// Present only when a client tries to set the identifier; the service
    /// rejects a value differing from the target record's id.
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub agent_id: Option<String>,
}

// ============================================================================
// VALIDATED OUTPUTS
// ============================================================================

/// Full-mode (POST/PUT) agent payload after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentDraft {
    pub name: String,
    pub date_joined: NaiveDate,
    pub role: AgentRole,
}

/// Partial-mode (PATCH) agent payload after validation.
/// Only the supplied fields are set; the identifier is never part of a patch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentPatch {
    pub name: Option<String>,
    pub date_joined: Option<NaiveDate>,
    pub role: Option<AgentRole>,
}

impl AgentPatch {
    /// Check whether the patch carries any updatable field.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.date_joined.is_none() && self.role.is_none()
    }
}

/// Full-mode (POST/PUT) case payload after validation.
/// Whether `agent_id` resolves to a stored agent is the service's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseDraft {
    pub title: String,
    pub description: String,
    pub status: CaseStatus,
    pub agent_id: AgentId,
}

/// Partial-mode (PATCH) case payload after validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CasePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<CaseStatus>,
    pub agent_id: Option<AgentId>,
}

impl CasePatch {
    /// Check whether the patch carries any updatable field.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.agent_id.is_none()
    }
}
