//! Query-string parameter shapes for listings.
//!
//! Parameters arrive from the HTTP layer as optional raw strings and are
//! parsed into typed store filters here. An unrecognized value is a
//! validation failure on that parameter, surfaced before the store is
//! touched.

use precinct_core::{AgentRole, AgentSortKey, CaseStatus, RecordsError, RecordsResult};
use precinct_storage::{AgentFilter, CaseFilter};
use serde::Deserialize;
use uuid::Uuid;

/// Query parameters accepted on agent listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AgentQuery {
    pub role: Option<String>,
    pub sort: Option<String>,
}

impl AgentQuery {
    pub(crate) fn to_filter(&self) -> RecordsResult<AgentFilter> {
        let role = self
            .role
            .as_deref()
            .map(|raw| {
                AgentRole::from_wire_str(raw)
                    .map_err(|e| RecordsError::validation("role", e.to_string()))
            })
            .transpose()?;
        let sort = self
            .sort
            .as_deref()
            .map(|raw| {
                AgentSortKey::from_wire_str(raw)
                    .map_err(|e| RecordsError::validation("sort", e.to_string()))
            })
            .transpose()?;
        Ok(AgentFilter { role, sort })
    }
}

/// Query parameters accepted on case listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CaseQuery {
    pub agent_id: Option<String>,
    pub status: Option<String>,
}

impl CaseQuery {
    pub(crate) fn to_filter(&self) -> RecordsResult<CaseFilter> {
        let agent_id = self
            .agent_id
            .as_deref()
            .map(|raw| {
                Uuid::parse_str(raw)
                    .map_err(|_| RecordsError::validation("agentId", "must be a well-formed UUID"))
            })
            .transpose()?;
        let status = self
            .status
            .as_deref()
            .map(|raw| {
                CaseStatus::from_wire_str(raw)
                    .map_err(|e| RecordsError::validation("status", e.to_string()))
            })
            .transpose()?;
        Ok(CaseFilter { agent_id, status })
    }
}

// =============================================================================
// TESTS
// =============================================================================
