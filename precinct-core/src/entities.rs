//! Core entity structures

use crate::{AgentId, AgentRole, CaseId, CaseStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Agent - a member of the precinct staff.
///
/// The identifier is generated at creation and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    #[serde(rename = "id")]
    pub agent_id: AgentId,
    pub name: String,
    /// Wire form is `YYYY-MM-DD`; never a date in the future.
    pub date_joined: NaiveDate,
    pub role: AgentRole,
}

/// Case - an investigation assigned to an agent.
///
/// `agent_id` must resolve to an existing [`Agent`] at the moment the case
/// is created or fully replaced, and at a merge whenever it is supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    #[serde(rename = "id")]
    pub case_id: CaseId,
    pub title: String,
    pub description: String,
    pub status: CaseStatus,
    pub agent_id: AgentId,
}
